//! Positioned tech-tree graph

use super::{TechEdge, TechNode};
use serde::Serialize;

/// Nodes and edges produced by one build, ready for rendering
///
/// The graph is an immutable snapshot: each build renumbers everything, so
/// ids are only comparable within the same graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechGraph {
    /// Nodes in creation order
    pub nodes: Vec<TechNode>,

    /// Edges in creation order
    pub edges: Vec<TechEdge>,
}

impl TechGraph {
    /// Create an empty graph
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&TechNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Number of nodes
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges leaving a node
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a TechEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.source == id)
    }

    /// Edges entering a node
    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a TechEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.target == id)
    }

    /// Width and height of the area covered by node boxes of the given size
    #[must_use]
    pub fn extent(&self, node_width: f64, node_height: f64) -> (f64, f64) {
        self.nodes.iter().fold((0.0_f64, 0.0_f64), |(w, h), node| {
            (
                w.max(node.position.x + node_width),
                h.max(node.position.y + node_height),
            )
        })
    }
}

impl std::fmt::Display for TechGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Tech tree ({} nodes, {} edges):",
            self.nodes.len(),
            self.edges.len()
        )?;
        writeln!(f)?;

        for node in &self.nodes {
            let prereqs: Vec<&str> = self
                .incoming(&node.id)
                .map(|edge| edge.source.as_str())
                .collect();
            if prereqs.is_empty() {
                writeln!(
                    f,
                    "  {} {} [{}] → (no prerequisites)",
                    node.id, node.label, node.status
                )?;
            } else {
                writeln!(
                    f,
                    "  {} {} [{}] → {}",
                    node.id,
                    node.label,
                    node.status,
                    prereqs.join(", ")
                )?;
            }
        }

        Ok(())
    }
}
