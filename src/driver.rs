//! Animation driver - walks a frame source through the GIF encoder.

use std::path::Path;

use log::{debug, info};

use crate::encode::{EncodeError, EncodeStats, GifEncoder};
use crate::error::AnimationError;
use crate::render::{Frame, PlotSurface};
use crate::scene::Scene;
use crate::schema::AnimationConfig;

/// A fixed, ordered list of frames materialized before playback.
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Render `config.frames` frames from a scene into memory, in
    /// ascending index order.
    ///
    /// A render failure partway through propagates immediately and no
    /// sequence is returned, so callers never see a partial batch.
    pub fn prerender(
        scene: &mut dyn Scene,
        config: &AnimationConfig,
    ) -> Result<Self, AnimationError> {
        config.validate()?;

        let mut surface = PlotSurface::new(config.width, config.height)?;
        let mut frames = Vec::with_capacity(config.frames as usize);
        for index in 0..config.frames {
            scene.render_frame(index, &mut surface)?;
            frames.push(surface.capture(index));
        }

        info!("prerendered {} frames of {}", frames.len(), scene.name());
        Ok(Self { frames })
    }

    /// Wrap an existing frame list.
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no frames are present.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

/// Where frames come from: computed one at a time from a scene, or a
/// pre-materialized ordered sequence played back without recomputation.
pub enum FrameSource {
    Computed(Box<dyn Scene>),
    Prerendered(FrameSequence),
}

/// Drive a frame source through the encoder and write an animated GIF.
///
/// Validates the configuration before any file is created, so an
/// invalid frame count or interval never leaves a degenerate output on
/// disk. Prerendered playback additionally requires the sequence length
/// to equal the configured frame count.
pub fn animate<P: AsRef<Path>>(
    source: FrameSource,
    config: &AnimationConfig,
    path: P,
) -> Result<EncodeStats, AnimationError> {
    config.validate()?;

    if let FrameSource::Prerendered(sequence) = &source {
        if sequence.len() != config.frames as usize {
            return Err(EncodeError::SequenceLengthMismatch {
                expected: config.frames,
                got: sequence.len() as u32,
            }
            .into());
        }
    }

    let path = path.as_ref();
    let mut encoder = GifEncoder::create(path, config.width, config.height, config.interval_ms)?;

    match source {
        FrameSource::Computed(mut scene) => {
            info!(
                "animating {} for {} frames -> {}",
                scene.name(),
                config.frames,
                path.display()
            );
            let mut surface = PlotSurface::new(config.width, config.height)?;
            for index in 0..config.frames {
                scene.render_frame(index, &mut surface)?;
                encoder.write_frame(&surface.capture(index))?;
                debug!("encoded frame {index}");
            }
        }
        FrameSource::Prerendered(sequence) => {
            info!(
                "playing back {} prerendered frames -> {}",
                sequence.len(),
                path.display()
            );
            for frame in sequence.frames() {
                encoder.write_frame(frame)?;
            }
        }
    }

    let stats = encoder.finalize()?;
    info!("wrote {}: {}", path.display(), stats);
    Ok(stats)
}
