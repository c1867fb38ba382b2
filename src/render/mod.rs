//! Render module - Plot surfaces and captured frames.

mod frame;
mod surface;

pub use frame::*;
pub use surface::*;
