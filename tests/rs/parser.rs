//! Integration tests for loading tracks descriptions

use std::fs;
use tech_tree::core::models::StepKind;
use tech_tree::core::outline::TrackOutline;
use tech_tree::core::parser::{parse_tracks_file, parse_tracks_str};
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tracks.json");

#[test]
fn fixture_keeps_input_order() {
    let tracks = parse_tracks_file(FIXTURE).unwrap();

    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Track 0: Common", "Track 2: AI Modeler", "Custom Path"]);

    // Steps stay in file order; only the builder sorts them
    let steps: Vec<&str> = tracks.tracks[0].steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(steps, ["Step 2", "Step 1", "Step 3"]);

    let custom = &tracks.tracks[2];
    assert!(custom.steps.is_empty());
    assert_eq!(custom.description, "A track without steps");
}

#[test]
fn fixture_levels_and_kinds() {
    let tracks = parse_tracks_file(FIXTURE).unwrap();
    let common = &tracks.tracks[0];

    let git = common.steps[0].subjects().next().unwrap();
    assert_eq!(git.name, "Git");
    assert_eq!(git.concept_count(), 3);

    assert_eq!(common.steps[0].kind(), StepKind::Fixed);
    assert_eq!(common.steps[2].kind(), StepKind::Branch);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(parse_tracks_file(dir.path().join("absent.json")).is_err());
}

#[test]
fn malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"Track 0\": ").unwrap();

    assert!(parse_tracks_file(&path).is_err());
    assert!(parse_tracks_str("[1, 2, 3]").is_err());
}

#[test]
fn outline_of_fixture() {
    let tracks = parse_tracks_file(FIXTURE).unwrap();
    let outlines = TrackOutline::from_tracks(&tracks);

    assert_eq!(outlines.len(), 3);
    assert_eq!(outlines[0].subject_count(), 5);
    let step_names: Vec<&str> = outlines[0].steps.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(step_names, ["Step 1", "Step 2", "Step 3"]);

    let text = outlines[2].to_string();
    assert!(text.contains("Custom Path [Other] (0 subjects)"));
    assert!(text.contains("(no steps)"));
}
