//! Tech-tree node model

use crate::core::category::Category;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Progression state of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    /// Prerequisites not met yet
    Locked,
    /// Ready to be started
    Available,
    /// Started but not finished
    InProgress,
    /// Finished
    Completed,
    /// Finished at the highest level
    Mastered,
}

impl SkillStatus {
    /// Star count shown for this status: mastered 3, available 1, otherwise 0
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Self::Mastered => 3,
            Self::Available => 1,
            _ => 0,
        }
    }

    /// Whether edges into a node with this status are drawn emphasized
    #[must_use]
    pub const fn is_emphasized(self) -> bool {
        matches!(self, Self::Available | Self::Mastered)
    }

    /// The snake_case name used in serialized output and CSS classes
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Available => "available",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Mastered => "mastered",
        }
    }
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "locked" => Ok(Self::Locked),
            "available" => Ok(Self::Available),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "mastered" => Ok(Self::Mastered),
            _ => Err(format!("Unknown skill status: {s}")),
        }
    }
}

/// Top-left corner of a node box in layout space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downwards with rank
    pub y: f64,
}

impl Position {
    /// Create a position
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A subject placed in the tech tree
///
/// The star count is not stored: [`TechNode::stars`] derives it from the
/// status every time, and serialization writes the derived value.
#[derive(Debug, Clone, PartialEq)]
pub struct TechNode {
    /// Unique id within one build (`node-0`, `node-1`, ...)
    pub id: String,

    /// Subject name
    pub label: String,

    /// Subject description
    pub description: String,

    /// Progression state
    pub status: SkillStatus,

    /// Category derived from the track name
    pub category: Category,

    /// Top-left corner assigned by the layout pass
    pub position: Position,
}

impl TechNode {
    /// Create an unpositioned node
    #[must_use]
    pub fn new(
        id: String,
        label: String,
        description: String,
        status: SkillStatus,
        category: Category,
    ) -> Self {
        Self {
            id,
            label,
            description,
            status,
            category,
            position: Position::default(),
        }
    }

    /// Stars (0-3) derived from the status
    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.status.stars()
    }
}

impl Serialize for TechNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TechNode", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("stars", &self.stars())?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("position", &self.position)?;
        state.end()
    }
}
