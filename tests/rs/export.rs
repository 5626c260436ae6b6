//! Integration tests for the file exporters

use serde_json::Value;
use std::fs;
use std::str::FromStr;
use tech_tree::core::build_tech_tree;
use tech_tree::core::export::{ExportFormat, GraphExporter, HtmlExporter, JsonExporter};
use tech_tree::core::layout::LayoutConfig;
use tech_tree::core::models::TechGraph;
use tech_tree::core::parser::parse_tracks_file;
use tempfile::TempDir;

fn fixture_graph() -> TechGraph {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tracks.json");
    build_tech_tree(&parse_tracks_file(path).expect("Failed to load fixture"))
}

#[test]
fn json_export_round_trips_to_renderer_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.json");
    let graph = fixture_graph();

    JsonExporter::pretty().export(&graph, &path).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let nodes = value["nodes"].as_array().unwrap();
    let edges = value["edges"].as_array().unwrap();
    assert_eq!(nodes.len(), graph.node_count());
    assert_eq!(edges.len(), graph.edge_count());

    let linux = &nodes[3];
    assert_eq!(linux["label"], "Linux");
    assert_eq!(linux["status"], "available");
    assert_eq!(linux["stars"], 1);
    assert_eq!(linux["position"]["y"], 500.0);

    let modeler = &nodes[5];
    assert_eq!(modeler["category"], "Modeler");
    assert_eq!(modeler["stars"], 0);
}

#[test]
fn mermaid_export_writes_flowchart() {
    let dir = TempDir::new().unwrap();
    let format = ExportFormat::from_str("md").unwrap();
    let path = dir.path().join(format!("tree.{}", format.extension()));

    format
        .exporter(LayoutConfig::default().node_size())
        .export(&fixture_graph(), &path)
        .unwrap();

    let diagram = fs::read_to_string(&path).unwrap();
    assert!(path.to_string_lossy().ends_with("tree.md"));
    assert!(diagram.contains("flowchart TB"));
    assert!(diagram.contains("node_0 ==> node_2"));
    assert!(diagram.contains("node_5 --> node_6"));
    assert!(diagram.contains(":::locked"));
}

#[test]
fn html_export_places_every_node() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.html");
    let graph = fixture_graph();

    HtmlExporter::default()
        .with_title("AI Tracks")
        .export(&graph, &path)
        .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<title>AI Tracks</title>"));
    assert!(html.contains("7 skills, 5 connections"));
    for node in &graph.nodes {
        assert!(html.contains(&format!("id=\"{}\"", node.id)));
        assert!(html.contains(&format!(
            "style=\"left:{:.1}px;top:{:.1}px\"",
            node.position.x, node.position.y
        )));
    }
    assert_eq!(html.matches("class=\"edge emphasized\"").count(), 4);
    assert!(!html.contains("{{"));
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("tree.json");

    assert!(JsonExporter::new().export(&fixture_graph(), &path).is_err());
}
