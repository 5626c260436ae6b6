//! JSON exporter
//!
//! Writes `{ "nodes": [...], "edges": [...] }` with the node and edge shapes
//! the web renderer expects.

use super::GraphExporter;
use crate::core::models::TechGraph;
use std::error::Error;

/// JSON exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// Compact output
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented output
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl GraphExporter for JsonExporter {
    fn render(&self, graph: &TechGraph) -> Result<String, Box<dyn Error>> {
        let json = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };
        Ok(json)
    }
}
