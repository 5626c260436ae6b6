//! CLI command handlers for `techtree`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod build;
pub mod config;
pub mod outline;
