//! Integration tests for graph construction and layout

use std::collections::{BTreeMap, HashSet};
use tech_tree::core::category::Category;
use tech_tree::core::layout::LayoutConfig;
use tech_tree::core::models::{SkillStatus, TechGraph, Tracks};
use tech_tree::core::parser::{parse_tracks_file, parse_tracks_str};
use tech_tree::core::progress::ProgressMap;
use tech_tree::core::{build_tech_tree, GraphBuilder};

fn fixture_tracks() -> Tracks {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tracks.json");
    parse_tracks_file(path).expect("Failed to load fixture")
}

fn labels(graph: &TechGraph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.label.as_str()).collect()
}

fn edge_ids(graph: &TechGraph) -> Vec<&str> {
    graph.edges.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn single_subject_end_to_end() {
    let tracks = parse_tracks_str(
        r#"{"Track 0": {"description": "", "steps": {"Step 1": {"description": "",
            "Option 1": {"description": "", "Python": {"description": "basics"}}}}}}"#,
    )
    .unwrap();

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
}

#[test]
fn node_count_matches_subject_entries() {
    let tracks = fixture_tracks();
    let graph = build_tech_tree(&tracks);

    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.node_count(), tracks.subject_count());
}

#[test]
fn ids_follow_traversal_order() {
    let graph = build_tech_tree(&fixture_tracks());

    // Steps sorted by name, options and subjects in input order, tracks in input order
    assert_eq!(
        labels(&graph),
        ["Python", "OOP", "Git", "Linux", "Docker", "Matrices", "PyTorch"]
    );
    for (index, node) in graph.nodes.iter().enumerate() {
        assert_eq!(node.id, format!("node-{index}"));
    }
    let unique: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(unique.len(), graph.node_count());
}

#[test]
fn statuses_follow_placeholder_rules() {
    let graph = build_tech_tree(&fixture_tracks());
    let statuses: Vec<SkillStatus> = graph.nodes.iter().map(|n| n.status).collect();

    assert_eq!(
        statuses,
        [
            SkillStatus::Mastered,
            SkillStatus::Mastered,
            SkillStatus::Mastered,
            SkillStatus::Available,
            SkillStatus::Available,
            SkillStatus::Locked,
            SkillStatus::Locked,
        ]
    );
}

#[test]
fn stars_are_derived_from_status() {
    let graph = build_tech_tree(&fixture_tracks());

    for node in &graph.nodes {
        let expected = match node.status {
            SkillStatus::Mastered => 3,
            SkillStatus::Available => 1,
            _ => 0,
        };
        assert_eq!(node.stars(), expected, "stars of {}", node.label);
    }
}

#[test]
fn categories_come_from_track_names() {
    let graph = build_tech_tree(&fixture_tracks());

    assert_eq!(graph.node("node-0").unwrap().category, Category::Common);
    assert_eq!(graph.node("node-5").unwrap().category, Category::Modeler);
    assert_eq!(Category::from_track_name("Custom Path"), Category::Other);
}

#[test]
fn edges_join_consecutive_steps() {
    let graph = build_tech_tree(&fixture_tracks());

    assert_eq!(
        edge_ids(&graph),
        [
            "e-node-0-node-2",
            "e-node-1-node-2",
            "e-node-2-node-3",
            "e-node-2-node-4",
            "e-node-5-node-6",
        ]
    );

    // Nothing enters a first step
    for first_step in ["node-0", "node-1", "node-5"] {
        assert_eq!(graph.incoming(first_step).count(), 0);
    }
    // Nothing crosses from Track 0 into Track 2
    assert!(graph
        .edges
        .iter()
        .all(|e| (e.source.as_str() < "node-5") == (e.target.as_str() < "node-5")));
}

#[test]
fn edges_are_emphasized_by_target_status() {
    let graph = build_tech_tree(&fixture_tracks());

    for edge in &graph.edges {
        let target = graph.node(&edge.target).unwrap();
        assert_eq!(edge.emphasized, target.status.is_emphasized(), "{}", edge.id);
    }
    assert!(graph.edges[0].emphasized);
    assert!(!graph.edges[4].emphasized);
}

#[test]
fn bipartite_join_between_wide_steps() {
    let tracks = parse_tracks_str(
        r#"{"Track 1": {"steps": {
            "A": {"O": {"a1": {}, "a2": {}}},
            "B": {"O": {"b1": {}}, "P": {"b2": {}, "b3": {}}}
        }}}"#,
    )
    .unwrap();

    let graph = build_tech_tree(&tracks);

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    for target in ["node-2", "node-3", "node-4"] {
        let sources: Vec<&str> = graph.incoming(target).map(|e| e.source.as_str()).collect();
        assert_eq!(sources, ["node-0", "node-1"]);
    }
    assert!(graph.nodes.iter().all(|n| n.category == Category::Engineer));
}

#[test]
fn empty_branches_contribute_nothing() {
    let tracks = parse_tracks_str(
        r#"{
            "Track 0": {"description": "no steps", "steps": {}},
            "Track 1": {"steps": {"Step 1": {"description": "only metadata"}}},
            "Track 5": {"steps": {"Step 1": {"Option 1": {"Airflow": {}}}}}
        }"#,
    )
    .unwrap();

    let graph = build_tech_tree(&tracks);

    assert_eq!(labels(&graph), ["Airflow"]);
    assert_eq!(graph.nodes[0].category, Category::MlOps);
    // Track index 2, so the placeholder locks it
    assert_eq!(graph.nodes[0].status, SkillStatus::Locked);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn option_without_subjects_breaks_the_chain() {
    let tracks = parse_tracks_str(
        r#"{"Track 0": {"steps": {
            "Step 1": {"Option 1": {"A": {}}},
            "Step 2": {"Option 1": {"description": "only metadata"}},
            "Step 3": {"Option 1": {"C": {}}}
        }}}"#,
    )
    .unwrap();
    assert_eq!(tracks.tracks[0].steps.len(), 3);

    let graph = build_tech_tree(&tracks);

    assert_eq!(labels(&graph), ["A", "C"]);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.incoming("node-1").count(), 0);
    assert_eq!(graph.nodes[0].status, SkillStatus::Mastered);
    // The empty step still takes index 1, so C sits at index 2
    assert_eq!(graph.nodes[1].status, SkillStatus::Available);
}

#[test]
fn empty_input_builds_empty_graph() {
    let graph = build_tech_tree(&Tracks::new());
    assert_eq!(graph, TechGraph::default());
}

#[test]
fn numbering_restarts_per_build() {
    let tracks = fixture_tracks();
    let first = build_tech_tree(&tracks);
    let second = build_tech_tree(&tracks);

    assert_eq!(first, second);
    assert_eq!(second.nodes[0].id, "node-0");
}

#[test]
fn layout_is_layered_top_to_bottom() {
    let graph = build_tech_tree(&fixture_tracks());
    let y = |id: &str| graph.node(id).unwrap().position.y;

    // Top-left corners: rank r starts at r * (height + rank_sep)
    assert!(y("node-0").abs() < f64::EPSILON);
    assert!((y("node-2") - 250.0).abs() < f64::EPSILON);
    assert!((y("node-3") - 500.0).abs() < f64::EPSILON);
    assert!((y("node-6") - y("node-2")).abs() < f64::EPSILON);
    for edge in &graph.edges {
        assert!(y(&edge.source) < y(&edge.target), "{}", edge.id);
    }
}

#[test]
fn nodes_in_a_rank_do_not_overlap() {
    let graph = build_tech_tree(&fixture_tracks());
    let width = LayoutConfig::default().node_width;

    let mut ranks: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for node in &graph.nodes {
        #[allow(clippy::cast_possible_truncation)]
        let row = node.position.y.round() as i64;
        ranks.entry(row).or_default().push(node.position.x);
    }

    for xs in ranks.values_mut() {
        xs.sort_by(f64::total_cmp);
        for pair in xs.windows(2) {
            assert!(pair[1] - pair[0] >= width, "overlap at {pair:?}");
        }
    }
}

#[test]
fn layout_config_changes_spacing() {
    let config = LayoutConfig {
        node_width: 100.0,
        node_height: 40.0,
        node_sep: 10.0,
        rank_sep: 20.0,
    };
    let graph = GraphBuilder::new()
        .with_layout_config(config)
        .build(&fixture_tracks());

    let git = graph.node("node-2").unwrap();
    assert!((git.position.y - 60.0).abs() < f64::EPSILON);
}

#[test]
fn progress_map_replaces_placeholder() {
    let progress = ProgressMap::from_json_str(r#"{"Matrices": "mastered", "PyTorch": "available"}"#)
        .unwrap();
    let graph = GraphBuilder::new()
        .with_status_policy(progress)
        .build(&fixture_tracks());

    let by_label = |label: &str| graph.nodes.iter().find(|n| n.label == label).unwrap();
    assert_eq!(by_label("Python").status, SkillStatus::Locked);
    assert_eq!(by_label("Matrices").status, SkillStatus::Mastered);
    assert_eq!(by_label("PyTorch").stars(), 1);
    assert!(graph.edges.iter().find(|e| e.id == "e-node-5-node-6").unwrap().emphasized);
}
