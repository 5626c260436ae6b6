//! Tech-tree edge model

use serde::{Deserialize, Serialize};

/// Directed prerequisite edge between nodes of consecutive steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechEdge {
    /// Unique id derived from the endpoints (`e-{source}-{target}`)
    pub id: String,

    /// Id of the prerequisite node
    pub source: String,

    /// Id of the dependent node
    pub target: String,

    /// Presentation hint: the target is available or mastered
    pub emphasized: bool,
}

impl TechEdge {
    /// Create an edge; the id is derived from the endpoint pair
    #[must_use]
    pub fn new(source: &str, target: &str, emphasized: bool) -> Self {
        Self {
            id: Self::edge_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
            emphasized,
        }
    }

    /// Id for an edge between two nodes
    #[must_use]
    pub fn edge_id(source: &str, target: &str) -> String {
        format!("e-{source}-{target}")
    }
}
