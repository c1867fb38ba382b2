//! Schema module - Configuration types for animation jobs.

mod config;
mod scene;

pub use config::*;
pub use scene::*;
