//! Phase-shifting sine wave scene.

use plotters::style::BLUE;

use super::Scene;
use crate::render::{PlotSurface, RenderError};

/// Sine curve recomputed per frame: frame `i` draws
/// `y = sin(x + i * phase_step)` over fixed x samples.
#[derive(Debug, Clone)]
pub struct SineWave {
    xs: Vec<f64>,
    x_max: f64,
    phase_step: f64,
}

impl SineWave {
    /// Create a sine scene with `samples` points over `[0, x_max]`.
    pub fn new(samples: usize, x_max: f64, phase_step: f64) -> Self {
        let n = samples.max(2);
        let xs = (0..n)
            .map(|i| x_max * i as f64 / (n - 1) as f64)
            .collect();
        Self {
            xs,
            x_max,
            phase_step,
        }
    }

    /// The y-series for a frame as a pure function of its index.
    pub fn series(&self, index: u32) -> Vec<(f64, f64)> {
        let phase = index as f64 * self.phase_step;
        self.xs.iter().map(|&x| (x, (x + phase).sin())).collect()
    }
}

impl Scene for SineWave {
    fn name(&self) -> &'static str {
        "sine_wave"
    }

    fn render_frame(&mut self, index: u32, surface: &mut PlotSurface) -> Result<(), RenderError> {
        let points = self.series(index);
        surface.draw_line_series(0.0..self.x_max, -1.5..1.5, &points, BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_matches_shifted_sine() {
        let scene = SineWave::new(100, std::f64::consts::TAU, 0.1);
        for index in 0..50u32 {
            let phase = index as f64 * 0.1;
            for (x, y) in scene.series(index) {
                assert!(
                    (y - (x + phase).sin()).abs() < 1e-12,
                    "frame {index}: y({x}) = {y}"
                );
            }
        }
    }

    #[test]
    fn test_series_is_pure() {
        let scene = SineWave::new(50, 10.0, 0.1);
        assert_eq!(scene.series(7), scene.series(7));
    }

    #[test]
    fn test_sample_spacing() {
        let scene = SineWave::new(5, 4.0, 0.1);
        let points = scene.series(0);
        assert_eq!(points.len(), 5);
        assert!((points[0].0 - 0.0).abs() < 1e-12);
        assert!((points[4].0 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_frame() {
        let mut scene = SineWave::new(100, std::f64::consts::TAU, 0.1);
        let mut surface = PlotSurface::new(64, 48).unwrap();
        scene.render_frame(0, &mut surface).unwrap();
        let frame = surface.capture(0);
        assert!(frame.pixels.iter().any(|&b| b != 0xFF));
    }
}
