//! gifplot - Animated plot rendering and GIF export.
//!
//! This crate renders animated 2D visualizations and serializes them as
//! animated GIF files. A *scene* produces one frame per index, either
//! recomputed on demand (a phase-shifting sine wave) or with state
//! accumulated across frames (a seeded random walk); frames can also be
//! pre-materialized into an ordered sequence and played back without
//! recomputation. A single driver feeds either kind of source through
//! the GIF encoder in ascending frame order.
//!
//! # Architecture
//!
//! - `schema`: Configuration and scene specifications (serde)
//! - `render`: Plot surface and captured frames (plotters bitmap)
//! - `scene`: Frame sources (sine wave, random walk)
//! - `encode`: GIF encoding and read-back
//! - `driver`: Frame-source dispatch and the animate loop
//!
//! # Example
//!
//! ```rust,no_run
//! use gifplot::{animate, build_scene, AnimationConfig, FrameSource, SceneSpec};
//!
//! # fn main() -> Result<(), gifplot::AnimationError> {
//! let config = AnimationConfig::default();
//! let scene = build_scene(&SceneSpec::default());
//!
//! let stats = animate(FrameSource::Computed(scene), &config, "sine_wave.gif")?;
//! println!("wrote sine_wave.gif: {stats}");
//! # Ok(())
//! # }
//! ```

pub mod driver;
pub mod encode;
pub mod error;
pub mod render;
pub mod scene;
pub mod schema;

// Re-export commonly used types
pub use driver::{animate, FrameSequence, FrameSource};
pub use encode::{EncodeStats, GifEncoder, GifReader};
pub use error::AnimationError;
pub use render::{Frame, PlotSurface};
pub use scene::{build_scene, RandomWalk, Scene, SineWave};
pub use schema::{AnimationConfig, RenderJob, SceneSpec};
