//! `wasm-bindgen` exports
pub mod bindings;
