//! Data models for `techtree`

pub mod edge;
pub mod graph;
pub mod node;
pub mod track;

pub use edge::TechEdge;
pub use graph::TechGraph;
pub use node::{Position, SkillStatus, TechNode};
pub use track::{Step, StepKind, Subject, Track, TrackOption, Tracks};
