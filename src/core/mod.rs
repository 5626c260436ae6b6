//! Core module for common functionality across all targets

pub mod builder;
pub mod category;
pub mod config;
pub mod export;
pub mod layout;
pub mod models;
pub mod outline;
pub mod parser;
pub mod progress;

pub use builder::{build_tech_tree, GraphBuilder};

/// Returns the current version of the `techtree` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
