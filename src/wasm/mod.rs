//! WASM entry point: lets a web renderer call the builder directly

mod rs;

pub use rs::bindings::*;
