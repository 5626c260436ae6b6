//! Track outline
//!
//! A textual overview of a tracks description: step order as the builder
//! sees it, whether each step branches, and how many subjects and concepts
//! it holds.

use crate::core::category::Category;
use crate::core::models::{Step, StepKind, Track, Tracks};
use std::fmt;

/// Summary of one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutline {
    /// Step name
    pub name: String,
    /// Single option or a choice
    pub kind: StepKind,
    /// Number of options
    pub option_count: usize,
    /// Number of subjects across all options
    pub subject_count: usize,
    /// Number of level concepts across all subjects
    pub concept_count: usize,
}

impl StepOutline {
    fn from_step(step: &Step) -> Self {
        Self {
            name: step.name.clone(),
            kind: step.kind(),
            option_count: step.options.len(),
            subject_count: step.subject_count(),
            concept_count: step.subjects().map(|s| s.concept_count()).sum(),
        }
    }
}

/// Summary of one track, steps in build order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackOutline {
    /// Track name
    pub name: String,
    /// Category derived from the name
    pub category: Category,
    /// Steps sorted by name
    pub steps: Vec<StepOutline>,
}

impl TrackOutline {
    /// Outline a single track
    #[must_use]
    pub fn from_track(track: &Track) -> Self {
        Self {
            name: track.name.clone(),
            category: Category::from_track_name(&track.name),
            steps: track
                .ordered_steps()
                .into_iter()
                .map(StepOutline::from_step)
                .collect(),
        }
    }

    /// Outline every track, in input order
    #[must_use]
    pub fn from_tracks(tracks: &Tracks) -> Vec<Self> {
        tracks.iter().map(Self::from_track).collect()
    }

    /// Number of subjects (future nodes) in the track
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.steps.iter().map(|s| s.subject_count).sum()
    }
}

impl fmt::Display for TrackOutline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}] ({} subjects)",
            self.name,
            self.category,
            self.subject_count()
        )?;

        if self.steps.is_empty() {
            writeln!(f, "  (no steps)")?;
        }

        for (index, step) in self.steps.iter().enumerate() {
            write!(
                f,
                "  {index}. {} | {}, {} option(s), {} subject(s)",
                step.name, step.kind, step.option_count, step.subject_count
            )?;
            if step.concept_count > 0 {
                write!(f, ", {} concept(s)", step.concept_count)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
