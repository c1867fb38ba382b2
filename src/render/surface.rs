//! Plot surface backed by an in-memory RGB buffer.

use std::ops::Range;

use plotters::prelude::*;

use super::Frame;

/// Drawing errors from the plot surface.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Axis range is degenerate: [{start}, {end})")]
    DegenerateRange { start: f64, end: f64 },
    #[error("Drawing failed: {0}")]
    Draw(String),
}

/// A drawable canvas with cartesian axes, rendered into an owned RGB
/// pixel buffer.
///
/// The surface is a plain owned value: dropping it releases the buffer,
/// so examples that create one per animation cannot leak drawing
/// resources across runs.
pub struct PlotSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PlotSurface {
    /// Create a surface cleared to white.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0xFF; width as usize * height as usize * 3],
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Clear the surface and draw one polyline over the given axis
    /// ranges. Each call replaces the previous contents, so one call
    /// per frame yields an in-place curve update.
    pub fn draw_line_series(
        &mut self,
        x_range: Range<f64>,
        y_range: Range<f64>,
        points: &[(f64, f64)],
        color: RGBColor,
    ) -> Result<(), RenderError> {
        check_range(&x_range)?;
        check_range(&y_range)?;

        let (width, height) = (self.width, self.height);
        let root =
            BitMapBackend::with_buffer(&mut self.pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::Draw(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| RenderError::Draw(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(|e| RenderError::Draw(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        Ok(())
    }

    /// Snapshot the current buffer as an indexed animation frame.
    pub fn capture(&self, index: u32) -> Frame {
        Frame {
            index,
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

fn check_range(range: &Range<f64>) -> Result<(), RenderError> {
    if !(range.start < range.end) {
        return Err(RenderError::DegenerateRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

/// Compute padded axis ranges covering a point series.
///
/// Padding is 5% of the span on each side, with a floor so a constant
/// series still yields a usable range.
pub fn series_bounds(points: &[(f64, f64)]) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if points.is_empty() {
        return (-1.0..1.0, -1.0..1.0);
    }

    let x_pad = (0.05 * (x_max - x_min).abs()).max(0.5);
    let y_pad = (0.05 * (y_max - y_min).abs()).max(0.5);
    (
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_rejects_zero_dimensions() {
        assert!(matches!(
            PlotSurface::new(0, 100),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_draw_marks_pixels() {
        let mut surface = PlotSurface::new(64, 48).unwrap();
        let points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, i as f64)).collect();
        surface
            .draw_line_series(0.0..9.0, 0.0..9.0, &points, BLUE)
            .unwrap();

        let frame = surface.capture(0);
        assert_eq!(frame.pixels.len(), 64 * 48 * 3);
        // The blue polyline must have left non-white pixels behind.
        assert!(frame.pixels.iter().any(|&b| b != 0xFF));
    }

    #[test]
    fn test_degenerate_range_rejected() {
        let mut surface = PlotSurface::new(32, 32).unwrap();
        let result = surface.draw_line_series(1.0..1.0, 0.0..1.0, &[], BLUE);
        assert!(matches!(result, Err(RenderError::DegenerateRange { .. })));
    }

    #[test]
    fn test_series_bounds_padded() {
        let points = [(0.0, -1.0), (10.0, 1.0)];
        let (xs, ys) = series_bounds(&points);
        assert!(xs.start < 0.0 && xs.end > 10.0);
        assert!(ys.start < -1.0 && ys.end > 1.0);
    }

    #[test]
    fn test_series_bounds_constant_series() {
        let points = [(0.0, 0.0), (0.0, 0.0)];
        let (xs, ys) = series_bounds(&points);
        assert!(xs.start < xs.end);
        assert!(ys.start < ys.end);
    }
}
