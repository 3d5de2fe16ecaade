//! iframe-tester-ui - Store and view components for the iframe tester
//!
//! Views are pure: they take plain props or read-only stores plus event
//! handlers. The web crate owns the browser wiring around them.

pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
