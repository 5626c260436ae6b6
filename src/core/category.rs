//! Track categories

use serde::{Serialize, Serializer};
use std::fmt;

/// Display category of a node, derived from the name of its track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Shared prerequisites
    Common,
    /// AI engineering
    Engineer,
    /// Model research and training
    Modeler,
    /// LLM application development
    LlmApp,
    /// Data engineering
    Data,
    /// Deployment and operations
    MlOps,
    /// Any track name that matches no known pattern
    Other,
}

/// Substring patterns checked in order; the first match wins
const TRACK_PATTERNS: [(&str, Category); 6] = [
    ("Track 0", Category::Common),
    ("Track 1", Category::Engineer),
    ("Track 2", Category::Modeler),
    ("Track 3", Category::LlmApp),
    ("Track 4", Category::Data),
    ("Track 5", Category::MlOps),
];

impl Category {
    /// Resolve the category of a track by case-sensitive substring match
    #[must_use]
    pub fn from_track_name(track_name: &str) -> Self {
        TRACK_PATTERNS
            .iter()
            .find(|(pattern, _)| track_name.contains(pattern))
            .map_or(Self::Other, |(_, category)| *category)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Engineer => "Engineer",
            Self::Modeler => "Modeler",
            Self::LlmApp => "LLM App",
            Self::Data => "Data",
            Self::MlOps => "MLOps",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
