//! Parser for tracks descriptions
//!
//! The source is a keyed JSON document:
//!
//! ```text
//! { "<track>": { "description": "...",
//!     "steps": { "<step>": { "description": "...",
//!         "<option>": { "description": "...",
//!             "<subject>": { "description": "...", "Lv1": ["..."] } } } } } }
//! ```
//!
//! Keys named exactly `description` are metadata, never children. Anything
//! that does not have the expected shape below the top level is skipped, so a
//! partially malformed file still yields every well-formed branch.

use crate::core::models::{Step, Subject, Track, TrackOption, Tracks};
use crate::debug;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Metadata key present at every level of the source
const DESCRIPTION_KEY: &str = "description";

/// Key holding the step map of a track
const STEPS_KEY: &str = "steps";

/// Parse a tracks file from disk
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON, or its top
/// level is not an object
pub fn parse_tracks_file<P: AsRef<Path>>(path: P) -> Result<Tracks, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_tracks_str(&content)
}

/// Parse a tracks description from a JSON string
///
/// # Errors
/// Returns an error if the text is not valid JSON or its top level is not an object
pub fn parse_tracks_str(json: &str) -> Result<Tracks, Box<dyn Error>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(parse_tracks_value(&value)?)
}

/// Convert an already-decoded JSON value into [`Tracks`]
///
/// # Errors
/// Returns an error only when the top-level value is not an object
pub fn parse_tracks_value(value: &Value) -> Result<Tracks, String> {
    let root = value
        .as_object()
        .ok_or_else(|| format!("Expected a JSON object of tracks, found {}", kind_of(value)))?;

    let mut tracks = Tracks::new();
    for (track_name, track_value) in root {
        match track_value.as_object() {
            Some(track_map) => tracks.add_track(parse_track(track_name, track_map)),
            None => debug!("Skipping track '{track_name}': not an object"),
        }
    }
    Ok(tracks)
}

fn parse_track(name: &str, map: &Map<String, Value>) -> Track {
    let mut track = Track::new(name, description_of(map));

    match map.get(STEPS_KEY).and_then(Value::as_object) {
        Some(steps) => {
            for (step_name, step_value) in steps {
                if let Some(step_map) = step_value.as_object() {
                    track.steps.push(parse_step(step_name, step_map));
                } else {
                    debug!("Skipping step '{step_name}' in '{name}': not an object");
                }
            }
        }
        None => debug!("Track '{name}' has no steps"),
    }

    track
}

fn parse_step(name: &str, map: &Map<String, Value>) -> Step {
    let mut step = Step::new(name, description_of(map));

    for (option_name, option_value) in children(map) {
        if let Some(option_map) = option_value.as_object() {
            step.options.push(parse_option(option_name, option_map));
        } else {
            debug!("Skipping option '{option_name}' in '{name}': not an object");
        }
    }

    step
}

fn parse_option(name: &str, map: &Map<String, Value>) -> TrackOption {
    let mut option = TrackOption::new(name, description_of(map));

    for (subject_name, subject_value) in children(map) {
        if let Some(subject_map) = subject_value.as_object() {
            option.subjects.push(parse_subject(subject_name, subject_map));
        } else {
            debug!("Skipping subject '{subject_name}' in '{name}': not an object");
        }
    }

    option
}

fn parse_subject(name: &str, map: &Map<String, Value>) -> Subject {
    let mut subject = Subject::new(name, description_of(map));
    subject.levels = parse_levels(map);
    subject
}

/// Collect `LvN`-style concept lists; other array-valued keys are ignored
fn parse_levels(map: &Map<String, Value>) -> BTreeMap<String, Vec<String>> {
    children(map)
        .filter(|(key, _)| is_level_key(key))
        .filter_map(|(key, value)| {
            let concepts: Vec<String> = value
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            Some((key.clone(), concepts))
        })
        .collect()
}

fn is_level_key(key: &str) -> bool {
    key.strip_prefix("Lv")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

/// Entries of a map other than the `description` metadata key
fn children(map: &Map<String, Value>) -> impl Iterator<Item = (&String, &Value)> {
    map.iter().filter(|(key, _)| key.as_str() != DESCRIPTION_KEY)
}

fn description_of(map: &Map<String, Value>) -> String {
    map.get(DESCRIPTION_KEY)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
