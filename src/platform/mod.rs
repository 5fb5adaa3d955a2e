//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Keyboard state to intent snapshots
//! - The JS-facing game handle (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::KeyState;
