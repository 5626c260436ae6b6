//! Learning-track model
//!
//! Mirrors the nested source description: a track holds steps, a step holds
//! alternative options, and an option groups the subjects that become nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All tracks of a description, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracks {
    /// Tracks in the order they appeared in the source
    pub tracks: Vec<Track>,
}

impl Tracks {
    /// Create an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a track, keeping input order
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Iterate tracks in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Number of tracks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether there are no tracks at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total number of subjects across every track, step and option
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.tracks.iter().map(Track::subject_count).sum()
    }
}

impl<'a> IntoIterator for &'a Tracks {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

/// A named learning path made of steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track name (e.g., "Track 1: AI Engineer")
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Steps in source order; see [`Track::ordered_steps`] for prerequisite order
    pub steps: Vec<Step>,
}

impl Track {
    /// Create a track with no steps
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Steps sorted by name, ascending.
    ///
    /// The source format has no explicit order field, so the step name is the
    /// order key. Comparison is plain byte order: "Step 10" sorts before "Step 2".
    #[must_use]
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by(|a, b| a.name.cmp(&b.name));
        steps
    }

    /// Number of subjects in this track
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.steps.iter().map(Step::subject_count).sum()
    }
}

/// Whether a step offers a single path or a choice between options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepKind {
    /// Exactly one option
    Fixed,
    /// Zero or several options
    Branch,
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "FIXED"),
            Self::Branch => write!(f, "BRANCH"),
        }
    }
}

/// A stage of a track; any one of its options satisfies it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step name, also the ordering key (e.g., "Step 1: Core Python Mastery")
    pub name: String,

    /// Free-text description (not used by the layout)
    pub description: String,

    /// Alternative options in source order
    pub options: Vec<TrackOption>,
}

impl Step {
    /// Create a step with no options
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Append an option
    #[must_use]
    pub fn with_option(mut self, option: TrackOption) -> Self {
        self.options.push(option);
        self
    }

    /// `Fixed` for a single option, `Branch` otherwise
    #[must_use]
    pub fn kind(&self) -> StepKind {
        if self.options.len() == 1 {
            StepKind::Fixed
        } else {
            StepKind::Branch
        }
    }

    /// All subjects of the step, options flattened in source order
    pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
        self.options.iter().flat_map(|option| option.subjects.iter())
    }

    /// Number of subjects across all options
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.options.iter().map(|option| option.subjects.len()).sum()
    }
}

/// One way of satisfying a step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackOption {
    /// Option name (e.g., "Option 1: Serving Specialist")
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Subjects in source order
    pub subjects: Vec<Subject>,
}

impl TrackOption {
    /// Create an option with no subjects
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            subjects: Vec::new(),
        }
    }

    /// Append a subject
    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }
}

/// A single topic; the unit that becomes a graph node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Topic name, used as the node label
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Concept lists by level (`Lv1`, `Lv2`, `Lv3`), when the source provides them
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub levels: BTreeMap<String, Vec<String>>,
}

impl Subject {
    /// Create a subject without level data
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            levels: BTreeMap::new(),
        }
    }

    /// Total number of concepts across all levels
    #[must_use]
    pub fn concept_count(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }
}
