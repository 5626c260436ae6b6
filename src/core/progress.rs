//! Status policies
//!
//! The builder never decides progression itself: it asks a [`StatusPolicy`]
//! for the status of every subject. [`PlaceholderProgress`] reproduces the
//! fixed demo rules; [`ProgressMap`] reads a learner's snapshot from a file.

use crate::core::models::SkillStatus;
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Where a subject sits in the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectRef<'a> {
    /// Position of the track in input order
    pub track_index: usize,
    /// Position of the step after sorting by name
    pub step_index: usize,
    /// Track name
    pub track_name: &'a str,
    /// Step name
    pub step_name: &'a str,
    /// Subject name
    pub subject_name: &'a str,
}

/// Supplies the progression status of each subject
pub trait StatusPolicy {
    /// Status for one subject
    fn status(&self, subject: &SubjectRef<'_>) -> SkillStatus;
}

impl<F> StatusPolicy for F
where
    F: Fn(&SubjectRef<'_>) -> SkillStatus,
{
    fn status(&self, subject: &SubjectRef<'_>) -> SkillStatus {
        self(subject)
    }
}

/// Fixed rules used until real progress data is supplied
///
/// First track: steps 0 and 1 mastered, step 2 available. Everything else locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderProgress;

impl StatusPolicy for PlaceholderProgress {
    fn status(&self, subject: &SubjectRef<'_>) -> SkillStatus {
        match (subject.track_index, subject.step_index) {
            (0, 0 | 1) => SkillStatus::Mastered,
            (0, 2) => SkillStatus::Available,
            _ => SkillStatus::Locked,
        }
    }
}

/// Statuses keyed by subject name
///
/// Subjects missing from the map get the fallback status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressMap {
    statuses: HashMap<String, SkillStatus>,
    fallback: SkillStatus,
}

impl ProgressMap {
    /// Create an empty map falling back to `Locked`
    #[must_use]
    pub fn new() -> Self {
        Self {
            statuses: HashMap::new(),
            fallback: SkillStatus::Locked,
        }
    }

    /// Use a different status for subjects missing from the map
    #[must_use]
    pub const fn with_fallback(mut self, fallback: SkillStatus) -> Self {
        self.fallback = fallback;
        self
    }

    /// Record the status of a subject
    pub fn insert(&mut self, subject_name: impl Into<String>, status: SkillStatus) {
        self.statuses.insert(subject_name.into(), status);
    }

    /// Status recorded for a subject, if any
    #[must_use]
    pub fn get(&self, subject_name: &str) -> Option<SkillStatus> {
        self.statuses.get(subject_name).copied()
    }

    /// Number of recorded subjects
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether no subject is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Parse a JSON object mapping subject names to status names
    ///
    /// # Errors
    /// Returns an error if the text is not a JSON object of strings or a
    /// status name is unknown
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        let value: Value = serde_json::from_str(json)?;
        let entries = value
            .as_object()
            .ok_or("Progress file must be a JSON object of subject → status")?;

        let mut map = Self::new();
        for (subject, status) in entries {
            let name = status
                .as_str()
                .ok_or_else(|| format!("Status for '{subject}' must be a string"))?;
            map.insert(subject.clone(), SkillStatus::from_str(name)?);
        }
        Ok(map)
    }

    /// Load a progress snapshot from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl Default for ProgressMap {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPolicy for ProgressMap {
    fn status(&self, subject: &SubjectRef<'_>) -> SkillStatus {
        self.get(subject.subject_name).unwrap_or(self.fallback)
    }
}
