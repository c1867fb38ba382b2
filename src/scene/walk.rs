//! Seeded random walk scene with accumulating state.

use plotters::style::RED;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Scene;
use crate::render::{series_bounds, PlotSurface, RenderError};

/// Random walk that appends one point per frame and redraws the full
/// path. Positions start at the origin, so after N frames the path
/// holds N + 1 points.
///
/// The seed is explicit: the same seed always reproduces the same walk.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    xs: Vec<f64>,
    ys: Vec<f64>,
    rng: StdRng,
    step_scale: f64,
}

impl RandomWalk {
    /// Create a walk at the origin with uniform steps in
    /// `[-step_scale, step_scale)`.
    pub fn new(seed: u64, step_scale: f64) -> Self {
        Self {
            xs: vec![0.0],
            ys: vec![0.0],
            rng: StdRng::seed_from_u64(seed),
            step_scale,
        }
    }

    /// Number of points accumulated so far, including the origin.
    pub fn point_count(&self) -> usize {
        self.xs.len()
    }

    /// The accumulated path as (x, y) pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs
            .iter()
            .copied()
            .zip(self.ys.iter().copied())
            .collect()
    }

    /// Advance the walk by one step.
    fn step(&mut self) {
        let last_x = *self.xs.last().unwrap_or(&0.0);
        let last_y = *self.ys.last().unwrap_or(&0.0);
        // gen_range panics on an empty range; a zero scale walks in place.
        let (dx, dy) = if self.step_scale > 0.0 {
            (
                self.rng.gen_range(-self.step_scale..self.step_scale),
                self.rng.gen_range(-self.step_scale..self.step_scale),
            )
        } else {
            (0.0, 0.0)
        };
        self.xs.push(last_x + dx);
        self.ys.push(last_y + dy);
    }
}

impl Scene for RandomWalk {
    fn name(&self) -> &'static str {
        "random_walk"
    }

    fn render_frame(&mut self, index: u32, surface: &mut PlotSurface) -> Result<(), RenderError> {
        // The walk advances once per call; the index only tags the
        // capture, so the driver must call in ascending order.
        let _ = index;
        self.step();

        let points = self.points();
        let (x_range, y_range) = series_bounds(&points);
        surface.draw_line_series(x_range, y_range, &points, RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let mut a = RandomWalk::new(42, 0.25);
        let mut b = RandomWalk::new(42, 0.25);
        let mut surface = PlotSurface::new(32, 32).unwrap();

        for i in 0..20 {
            a.render_frame(i, &mut surface).unwrap();
            b.render_frame(i, &mut surface).unwrap();
        }

        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomWalk::new(1, 0.25);
        let mut b = RandomWalk::new(2, 0.25);
        let mut surface = PlotSurface::new(32, 32).unwrap();

        for i in 0..5 {
            a.render_frame(i, &mut surface).unwrap();
            b.render_frame(i, &mut surface).unwrap();
        }

        assert_ne!(a.points(), b.points());
    }

    #[test]
    fn test_length_is_frames_plus_origin() {
        let mut walk = RandomWalk::new(7, 0.25);
        let mut surface = PlotSurface::new(32, 32).unwrap();

        assert_eq!(walk.point_count(), 1);
        for i in 0..10 {
            walk.render_frame(i, &mut surface).unwrap();
        }
        assert_eq!(walk.point_count(), 11);
    }

    #[test]
    fn test_starts_at_origin() {
        let walk = RandomWalk::new(3, 0.25);
        assert_eq!(walk.points(), vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_step_bounded() {
        let mut walk = RandomWalk::new(9, 0.25);
        let mut surface = PlotSurface::new(32, 32).unwrap();
        for i in 0..100 {
            walk.render_frame(i, &mut surface).unwrap();
        }
        let points = walk.points();
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            assert!((x1 - x0).abs() <= 0.25);
            assert!((y1 - y0).abs() <= 0.25);
        }
    }
}
