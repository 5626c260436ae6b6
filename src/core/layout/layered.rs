//! Layered (Sugiyama-style) layout, top to bottom
//!
//! 1. Rank assignment: longest path from the sources (Kahn's algorithm)
//! 2. Ordering within ranks: alternating barycenter sweeps, best ordering kept
//! 3. Coordinates: rank → y, order → x, every rank centered on the widest one
//!
//! Nothing depends on hash iteration order, so identical input always gives
//! identical coordinates.

use super::{LayoutConfig, LayoutEngine, LayoutInput, NodeSize, Point};

/// Default number of down/up barycenter sweep pairs
const DEFAULT_SWEEPS: usize = 8;

/// Layered layout engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayeredLayout {
    config: LayoutConfig,
    sweeps: usize,
}

impl LayeredLayout {
    /// Create an engine using the spacing of `config`
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.sanitized(),
            sweeps: DEFAULT_SWEEPS,
        }
    }

    /// Change the number of crossing-minimisation sweeps (0 keeps input order)
    #[must_use]
    pub const fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }
}

impl Default for LayeredLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine for LayeredLayout {
    fn layout(&self, input: &LayoutInput) -> Vec<Point> {
        let n = input.node_count();
        if n == 0 {
            return Vec::new();
        }

        let graph = Adjacency::new(n, &input.edges);
        let ranks = assign_ranks(&graph);
        let mut rank_order = build_rank_buckets(&ranks);
        minimize_crossings(&mut rank_order, &graph, self.sweeps);
        assign_coordinates(&rank_order, &input.sizes, &self.config)
    }
}

/// Forward and reverse adjacency lists, sorted and deduplicated
struct Adjacency {
    n: usize,
    succ: Vec<Vec<usize>>,
    pred: Vec<Vec<usize>>,
}

impl Adjacency {
    fn new(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut succ = vec![Vec::new(); n];
        let mut pred = vec![Vec::new(); n];
        for &(source, target) in edges {
            // Out-of-range endpoints and self-loops carry no layering information
            if source >= n || target >= n || source == target {
                continue;
            }
            succ[source].push(target);
            pred[target].push(source);
        }
        for list in succ.iter_mut().chain(pred.iter_mut()) {
            list.sort_unstable();
            list.dedup();
        }
        Self { n, succ, pred }
    }
}

/// Rank of every node: sources get 0, others 1 + the highest predecessor rank.
/// Nodes caught in a cycle are placed on one extra rank below everything else.
fn assign_ranks(graph: &Adjacency) -> Vec<usize> {
    let mut in_degree: Vec<usize> = graph.pred.iter().map(Vec::len).collect();
    let mut queue: Vec<usize> = (0..graph.n).filter(|&v| in_degree[v] == 0).collect();
    let mut ranks = vec![0usize; graph.n];
    let mut visited = vec![false; graph.n];

    let mut head = 0;
    while head < queue.len() {
        let u = queue[head];
        head += 1;
        visited[u] = true;

        for &v in &graph.succ[u] {
            ranks[v] = ranks[v].max(ranks[u] + 1);
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push(v);
            }
        }
    }

    if queue.len() < graph.n {
        let cycle_rank = ranks
            .iter()
            .zip(&visited)
            .filter(|&(_, &seen)| seen)
            .map(|(&rank, _)| rank + 1)
            .max()
            .unwrap_or(0);
        for (rank, _) in ranks.iter_mut().zip(&visited).filter(|&(_, &seen)| !seen) {
            *rank = cycle_rank;
        }
    }

    ranks
}

/// `rank_order[r]` lists the nodes of rank `r`, initially by node index
fn build_rank_buckets(ranks: &[usize]) -> Vec<Vec<usize>> {
    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut buckets = vec![Vec::new(); max_rank + 1];
    for (v, &r) in ranks.iter().enumerate() {
        buckets[r].push(v);
    }
    buckets
}

/// Position of each node inside `order`; `usize::MAX` for nodes not in it
fn positions_of(order: &[usize], n: usize) -> Vec<usize> {
    let mut positions = vec![usize::MAX; n];
    for (pos, &node) in order.iter().enumerate() {
        positions[node] = pos;
    }
    positions
}

/// Mean position of the neighbors found in the adjacent rank
fn barycenter(neighbor_pos: &[usize], neighbors: &[usize]) -> Option<f64> {
    let placed: Vec<usize> = neighbors
        .iter()
        .map(|&nb| neighbor_pos[nb])
        .filter(|&pos| pos != usize::MAX)
        .collect();
    if placed.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = placed.iter().sum::<usize>() as f64 / placed.len() as f64;
    Some(mean)
}

/// Reorder `rank` by the barycenters of its neighbors in `fixed`.
///
/// Nodes without neighbors in `fixed` keep their current slot as their key,
/// and ties keep their current relative order.
#[allow(clippy::cast_precision_loss)]
fn reorder_rank(rank: &mut Vec<usize>, fixed: &[usize], neighbors: &[Vec<usize>], n: usize) {
    let fixed_pos = positions_of(fixed, n);
    let mut keyed: Vec<(f64, usize, usize)> = rank
        .iter()
        .enumerate()
        .map(|(slot, &v)| {
            let key = barycenter(&fixed_pos, &neighbors[v]).unwrap_or(slot as f64);
            (key, slot, v)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    *rank = keyed.into_iter().map(|(_, _, v)| v).collect();
}

/// Edge crossings between two adjacent ranks
fn count_crossings(upper: &[usize], lower: &[usize], graph: &Adjacency) -> usize {
    let upper_pos = positions_of(upper, graph.n);
    let lower_pos = positions_of(lower, graph.n);

    let mut segments: Vec<(usize, usize)> = Vec::new();
    for &u in upper {
        for &v in &graph.succ[u] {
            if lower_pos[v] != usize::MAX {
                segments.push((upper_pos[u], lower_pos[v]));
            }
        }
    }

    let mut crossings = 0;
    for (i, &(a1, b1)) in segments.iter().enumerate() {
        for &(a2, b2) in &segments[i + 1..] {
            if (a1 < a2 && b1 > b2) || (a1 > a2 && b1 < b2) {
                crossings += 1;
            }
        }
    }
    crossings
}

fn total_crossings(rank_order: &[Vec<usize>], graph: &Adjacency) -> usize {
    rank_order
        .windows(2)
        .map(|pair| count_crossings(&pair[0], &pair[1], graph))
        .sum()
}

/// Alternate downward and upward barycenter sweeps, keeping the ordering
/// with the fewest crossings seen so far
fn minimize_crossings(rank_order: &mut Vec<Vec<usize>>, graph: &Adjacency, sweeps: usize) {
    if rank_order.len() < 2 {
        return;
    }

    let mut best = rank_order.clone();
    let mut best_crossings = total_crossings(rank_order, graph);

    for _ in 0..sweeps {
        if best_crossings == 0 {
            break;
        }

        for r in 1..rank_order.len() {
            let (above, rest) = rank_order.split_at_mut(r);
            reorder_rank(&mut rest[0], &above[r - 1], &graph.pred, graph.n);
        }
        for r in (0..rank_order.len() - 1).rev() {
            let (upto, below) = rank_order.split_at_mut(r + 1);
            reorder_rank(&mut upto[r], &below[0], &graph.succ, graph.n);
        }

        let crossings = total_crossings(rank_order, graph);
        if crossings < best_crossings {
            best_crossings = crossings;
            best.clone_from(rank_order);
        }
    }

    *rank_order = best;
}

/// Center point of every node.
///
/// Ranks are stacked top to bottom with `rank_sep` between the tallest boxes;
/// inside a rank boxes are laid left to right with `node_sep` between them.
#[allow(clippy::cast_precision_loss)]
fn assign_coordinates(
    rank_order: &[Vec<usize>],
    sizes: &[NodeSize],
    config: &LayoutConfig,
) -> Vec<Point> {
    let mut points = vec![Point::default(); sizes.len()];

    let max_height = sizes.iter().map(|s| s.height).fold(0.0_f64, f64::max);
    let rank_step = max_height + config.rank_sep;

    let rank_widths: Vec<f64> = rank_order
        .iter()
        .map(|nodes| {
            let boxes: f64 = nodes.iter().map(|&v| sizes[v].width).sum();
            let gaps = nodes.len().saturating_sub(1) as f64 * config.node_sep;
            boxes + gaps
        })
        .collect();
    let max_width = rank_widths.iter().copied().fold(0.0_f64, f64::max);

    for (r, nodes) in rank_order.iter().enumerate() {
        let y = (r as f64).mul_add(rank_step, max_height / 2.0);
        let mut offset = (max_width - rank_widths[r]) / 2.0;
        for &v in nodes {
            let width = sizes[v].width;
            points[v] = Point::new(offset + width / 2.0, y);
            offset += width + config.node_sep;
        }
    }

    points
}
