//! Scene module - Frame sources that draw onto a plot surface.

mod sine;
mod walk;

pub use sine::*;
pub use walk::*;

use crate::render::{PlotSurface, RenderError};
use crate::schema::SceneSpec;

/// A frame source driven once per output frame.
///
/// The driver invokes `render_frame` with ascending indices starting at
/// 0; scenes may recompute purely from the index (sine wave) or carry
/// accumulated state between calls (random walk).
pub trait Scene {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Draw the frame at `index` onto the surface, replacing its
    /// previous contents.
    fn render_frame(&mut self, index: u32, surface: &mut PlotSurface) -> Result<(), RenderError>;
}

/// Construct the scene described by a job's scene specification.
pub fn build_scene(spec: &SceneSpec) -> Box<dyn Scene> {
    match *spec {
        SceneSpec::SineWave {
            samples,
            x_max,
            phase_step,
        } => Box::new(SineWave::new(samples, x_max, phase_step)),
        SceneSpec::RandomWalk { seed, step_scale } => {
            Box::new(RandomWalk::new(seed, step_scale))
        }
    }
}
