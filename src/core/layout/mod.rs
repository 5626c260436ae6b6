//! Graph layout
//!
//! The builder hands a [`LayoutEngine`] nothing but node sizes and an edge
//! list (by node index) and gets back one center point per node. The layered
//! engine in [`layered`] is the default; any other engine honoring the same
//! contract can be plugged into the builder.

pub mod layered;

pub use layered::LayeredLayout;

use serde::{Deserialize, Serialize};

/// A point in layout space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a node box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    /// Box width
    pub width: f64,
    /// Box height
    pub height: f64,
}

impl NodeSize {
    /// Create a size
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Node boxes plus directed edges between them, by index into `sizes`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutInput {
    /// Size of each node
    pub sizes: Vec<NodeSize>,
    /// Directed edges `(source, target)`
    pub edges: Vec<(usize, usize)>,
}

impl LayoutInput {
    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.sizes.len()
    }
}

/// Spacing and box dimensions for the layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of every node box
    pub node_width: f64,
    /// Height of every node box
    pub node_height: f64,
    /// Minimum gap between boxes in the same rank
    pub node_sep: f64,
    /// Gap between consecutive ranks
    pub rank_sep: f64,
}

impl LayoutConfig {
    /// Default box width
    pub const DEFAULT_NODE_WIDTH: f64 = 200.0;
    /// Default box height
    pub const DEFAULT_NODE_HEIGHT: f64 = 100.0;
    /// Default gap inside a rank
    pub const DEFAULT_NODE_SEP: f64 = 100.0;
    /// Default gap between ranks
    pub const DEFAULT_RANK_SEP: f64 = 150.0;

    /// Size shared by every node box
    #[must_use]
    pub const fn node_size(&self) -> NodeSize {
        NodeSize::new(self.node_width, self.node_height)
    }

    /// Replace unusable values: non-positive or non-finite sizes fall back to
    /// the defaults, negative or non-finite separations become zero
    #[must_use]
    pub fn sanitized(self) -> Self {
        let size = |value: f64, default: f64| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                default
            }
        };
        let gap = |value: f64| {
            if value.is_finite() {
                value.max(0.0)
            } else {
                0.0
            }
        };
        Self {
            node_width: size(self.node_width, Self::DEFAULT_NODE_WIDTH),
            node_height: size(self.node_height, Self::DEFAULT_NODE_HEIGHT),
            node_sep: gap(self.node_sep),
            rank_sep: gap(self.rank_sep),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: Self::DEFAULT_NODE_WIDTH,
            node_height: Self::DEFAULT_NODE_HEIGHT,
            node_sep: Self::DEFAULT_NODE_SEP,
            rank_sep: Self::DEFAULT_RANK_SEP,
        }
    }
}

/// Assigns coordinates to the nodes of a directed graph
pub trait LayoutEngine {
    /// Center point of every node, indexed like `input.sizes`.
    ///
    /// Must be deterministic: the same input always yields the same points.
    fn layout(&self, input: &LayoutInput) -> Vec<Point>;
}
