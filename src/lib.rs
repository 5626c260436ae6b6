//! Library for `techtree`
//! Builds positioned skill-progression graphs used by the CLI and WASM targets

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
