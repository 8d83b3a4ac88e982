//! Animation demo page controller.
//!
//! Play/pause, recolor and effect controls for a page of animated cards,
//! plus a duration + delay calculator. Runs in the browser through
//! `web-sys`, or natively against an in-memory page.

pub mod bindings;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod memory_page;
pub mod message;
pub mod model;
pub mod page;
pub mod scheduler;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::DemoConfig;
pub use controller::{DemoController, calculate_total_time};
pub use error::{DemoError, PageError};
pub use memory_page::MemoryPage;
pub use page::Page;
pub use state::AnimationState;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
