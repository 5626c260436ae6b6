//! Tech-tree graph construction
//!
//! A single pass over the tracks description: tracks in input order, steps
//! sorted by name, options and subjects in input order. Every subject becomes
//! one node; consecutive steps of a track are joined by a complete bipartite
//! set of edges. A layout pass then gives every node its top-left position.

use crate::core::category::Category;
use crate::core::layout::{LayeredLayout, LayoutConfig, LayoutEngine, LayoutInput, NodeSize};
use crate::core::models::{
    Position, SkillStatus, Subject, TechEdge, TechGraph, TechNode, Track, Tracks,
};
use crate::core::progress::{PlaceholderProgress, StatusPolicy, SubjectRef};
use crate::{debug, warn};

/// Builds a positioned [`TechGraph`] from [`Tracks`]
///
/// The status policy and the layout engine are injected; the defaults are
/// [`PlaceholderProgress`] and [`LayeredLayout`] with [`LayoutConfig::default`].
pub struct GraphBuilder {
    policy: Box<dyn StatusPolicy>,
    layout: Box<dyn LayoutEngine>,
    node_size: NodeSize,
}

impl GraphBuilder {
    /// Builder with the placeholder statuses and the default layout
    #[must_use]
    pub fn new() -> Self {
        let config = LayoutConfig::default();
        Self {
            policy: Box::new(PlaceholderProgress),
            layout: Box::new(LayeredLayout::new(config)),
            node_size: config.node_size(),
        }
    }

    /// Use another source of node statuses
    #[must_use]
    pub fn with_status_policy(mut self, policy: impl StatusPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Use another layout engine; node boxes keep their current size
    #[must_use]
    pub fn with_layout(mut self, layout: impl LayoutEngine + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    /// Use the layered layout with the given box size and spacing
    #[must_use]
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        let config = config.sanitized();
        self.layout = Box::new(LayeredLayout::new(config));
        self.node_size = config.node_size();
        self
    }

    /// Size of every node box
    #[must_use]
    pub const fn node_size(&self) -> NodeSize {
        self.node_size
    }

    /// Build the graph and lay it out.
    ///
    /// Never fails: empty tracks, steps and options simply contribute nothing.
    /// The input is not modified and every call numbers nodes from `node-0`.
    #[must_use]
    pub fn build(&self, tracks: &Tracks) -> TechGraph {
        let state = tracks
            .iter()
            .enumerate()
            .fold(BuildState::default(), |state, (track_index, track)| {
                self.add_track(state, track_index, track)
            });

        debug!(
            "Built tech tree: {} nodes, {} edges from {} tracks",
            state.nodes.len(),
            state.edges.len(),
            tracks.len()
        );

        self.apply_layout(state)
    }

    fn add_track(&self, mut state: BuildState, track_index: usize, track: &Track) -> BuildState {
        let category = Category::from_track_name(&track.name);
        if category == Category::Other {
            debug!("Track '{}' matches no category pattern", track.name);
        }

        let mut previous: Vec<usize> = Vec::new();
        for (step_index, step) in track.ordered_steps().into_iter().enumerate() {
            let mut current = Vec::with_capacity(step.subject_count());

            for subject in step.subjects() {
                let status = self.policy.status(&SubjectRef {
                    track_index,
                    step_index,
                    track_name: &track.name,
                    step_name: &step.name,
                    subject_name: &subject.name,
                });
                let index = state.push_node(subject, status, category);
                for &source in &previous {
                    state.push_edge(source, index);
                }
                current.push(index);
            }

            previous = current;
        }

        state
    }

    fn apply_layout(&self, state: BuildState) -> TechGraph {
        let BuildState {
            mut nodes,
            edges,
            links,
        } = state;

        let input = LayoutInput {
            sizes: vec![self.node_size; nodes.len()],
            edges: links,
        };
        let centers = self.layout.layout(&input);
        if centers.len() != nodes.len() {
            warn!(
                "Layout returned {} positions for {} nodes",
                centers.len(),
                nodes.len()
            );
        }

        let half_width = self.node_size.width / 2.0;
        let half_height = self.node_size.height / 2.0;
        for (node, center) in nodes.iter_mut().zip(centers) {
            node.position = Position::new(center.x - half_width, center.y - half_height);
        }

        TechGraph { nodes, edges }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulator threaded through the traversal
///
/// Node ids come from the number of nodes created so far, so numbering is
/// local to one build.
#[derive(Default)]
struct BuildState {
    nodes: Vec<TechNode>,
    edges: Vec<TechEdge>,
    /// Edges by node index, for the layout pass
    links: Vec<(usize, usize)>,
}

impl BuildState {
    fn push_node(&mut self, subject: &Subject, status: SkillStatus, category: Category) -> usize {
        let index = self.nodes.len();
        self.nodes.push(TechNode::new(
            format!("node-{index}"),
            subject.name.clone(),
            subject.description.clone(),
            status,
            category,
        ));
        index
    }

    fn push_edge(&mut self, source: usize, target: usize) {
        let emphasized = self.nodes[target].status.is_emphasized();
        self.edges.push(TechEdge::new(
            &self.nodes[source].id,
            &self.nodes[target].id,
            emphasized,
        ));
        self.links.push((source, target));
    }
}

/// Build a tech tree with the default status policy and layout
#[must_use]
pub fn build_tech_tree(tracks: &Tracks) -> TechGraph {
    GraphBuilder::new().build(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::Point;
    use crate::core::models::{Step, TrackOption};

    fn step(name: &str, subjects: &[&str]) -> Step {
        let option = subjects.iter().fold(TrackOption::new("Option 1", ""), |o, s| {
            o.with_subject(Subject::new(*s, ""))
        });
        Step::new(name, "").with_option(option)
    }

    #[test]
    fn test_single_subject() {
        let mut tracks = Tracks::new();
        tracks.add_track(
            Track::new("Track 0", "").with_step(
                Step::new("Step 1", "").with_option(
                    TrackOption::new("Option 1", "").with_subject(Subject::new("Python", "basics")),
                ),
            ),
        );

        let graph = build_tech_tree(&tracks);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);

        let node = &graph.nodes[0];
        assert_eq!(node.id, "node-0");
        assert_eq!(node.label, "Python");
        assert_eq!(node.description, "basics");
        assert_eq!(node.category, Category::Common);
        assert_eq!(node.status, SkillStatus::Mastered);
        assert_eq!(node.stars(), 3);
        assert_eq!(node.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn test_consecutive_steps_fully_connected() {
        let mut tracks = Tracks::new();
        tracks.add_track(
            Track::new("Track 1", "")
                .with_step(step("Step 2", &["C", "D", "E"]))
                .with_step(step("Step 1", &["A", "B"])),
        );

        let graph = build_tech_tree(&tracks);
        let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D", "E"]);

        let ids: Vec<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "e-node-0-node-2",
                "e-node-1-node-2",
                "e-node-0-node-3",
                "e-node-1-node-3",
                "e-node-0-node-4",
                "e-node-1-node-4",
            ]
        );
    }

    #[test]
    fn test_empty_step_breaks_chain() {
        let mut tracks = Tracks::new();
        tracks.add_track(
            Track::new("Track 0", "")
                .with_step(step("Step 1", &["A"]))
                .with_step(Step::new("Step 2", ""))
                .with_step(step("Step 3", &["B"])),
        );

        let graph = build_tech_tree(&tracks);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        // Step 3 is index 2 in the first track
        assert_eq!(graph.nodes[1].status, SkillStatus::Available);
    }

    #[test]
    fn test_emphasis_follows_target_status() {
        let mut tracks = Tracks::new();
        tracks.add_track(
            Track::new("Track 0", "")
                .with_step(step("Step 1", &["A"]))
                .with_step(step("Step 2", &["B"]))
                .with_step(step("Step 3", &["C"]))
                .with_step(step("Step 4", &["D"])),
        );

        let graph = build_tech_tree(&tracks);
        let emphasized: Vec<bool> = graph.edges.iter().map(|e| e.emphasized).collect();
        // B mastered, C available, D locked
        assert_eq!(emphasized, vec![true, true, false]);
    }

    #[test]
    fn test_custom_policy() {
        fn everything_in_progress(_: &SubjectRef<'_>) -> SkillStatus {
            SkillStatus::InProgress
        }

        let mut tracks = Tracks::new();
        tracks.add_track(Track::new("Track 0", "").with_step(step("Step 1", &["A", "B"])));

        let graph = GraphBuilder::new()
            .with_status_policy(everything_in_progress)
            .build(&tracks);
        assert!(graph
            .nodes
            .iter()
            .all(|n| n.status == SkillStatus::InProgress && n.stars() == 0));
    }

    #[test]
    fn test_positions_are_top_left() {
        struct FixedCenter;
        impl LayoutEngine for FixedCenter {
            fn layout(&self, input: &LayoutInput) -> Vec<Point> {
                vec![Point::new(500.0, 300.0); input.node_count()]
            }
        }

        let mut tracks = Tracks::new();
        tracks.add_track(Track::new("Track 0", "").with_step(step("Step 1", &["A"])));

        let graph = GraphBuilder::new().with_layout(FixedCenter).build(&tracks);
        assert_eq!(graph.nodes[0].position, Position::new(400.0, 250.0));
    }

    #[test]
    fn test_layout_config_changes_box_size() {
        let config = LayoutConfig {
            node_width: 120.0,
            node_height: 60.0,
            node_sep: 10.0,
            rank_sep: 40.0,
        };
        let builder = GraphBuilder::new().with_layout_config(config);
        assert_eq!(builder.node_size(), NodeSize::new(120.0, 60.0));

        let mut tracks = Tracks::new();
        tracks.add_track(
            Track::new("Track 0", "")
                .with_step(step("Step 1", &["A", "B"]))
                .with_step(step("Step 2", &["C"])),
        );
        let graph = builder.build(&tracks);
        assert_eq!(graph.nodes[0].position, Position::new(0.0, 0.0));
        assert_eq!(graph.nodes[1].position, Position::new(130.0, 0.0));
        assert_eq!(graph.nodes[2].position, Position::new(65.0, 100.0));
    }
}
