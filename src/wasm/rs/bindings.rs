//! WASM bindings exported to JavaScript/TypeScript

use crate::core::export::{GraphExporter, JsonExporter};
use crate::core::parser::parse_tracks_str;
use crate::core::GraphBuilder;
use crate::get_version;
use wasm_bindgen::prelude::*;

/// Returns the current tech-tree version for the WASM build.
#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    format!("tech-tree WASM v{}", get_version())
}

/// Build a positioned tech tree from a tracks JSON document.
///
/// Returns the `{ "nodes": [...], "edges": [...] }` JSON consumed by the
/// renderer, or throws with a message when the input cannot be loaded.
#[wasm_bindgen]
pub fn build_tech_tree_json(tracks_json: &str) -> Result<String, JsValue> {
    let tracks = parse_tracks_str(tracks_json).map_err(|e| {
        crate::error!("Failed to load tracks: {e}");
        JsValue::from_str(&e.to_string())
    })?;
    let graph = GraphBuilder::new().build(&tracks);
    crate::debug!(
        "Built tech tree with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    JsonExporter::new()
        .render(&graph)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
