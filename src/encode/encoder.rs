//! GIF encoder that serializes frames in ascending index order.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use gif::{Encoder, Repeat};

use crate::render::Frame;
use crate::schema::MAX_DIMENSION;

/// Errors from GIF encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Frame interval must be positive")]
    InvalidInterval,
    #[error("Output dimensions invalid for GIF: {width}x{height} (max {MAX_DIMENSION})")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Frame {got} out of order (expected {expected})")]
    FrameOutOfOrder { expected: u32, got: u32 },
    #[error("Frame {index} is {frame_w}x{frame_h}, output is {output_w}x{output_h}")]
    DimensionMismatch {
        index: u32,
        frame_w: u32,
        frame_h: u32,
        output_w: u32,
        output_h: u32,
    },
    #[error("Frame {index} pixel buffer has {got} bytes, expected {expected}")]
    BadFrameBuffer {
        index: u32,
        got: usize,
        expected: usize,
    },
    #[error("Animation has no frames")]
    NoFrames,
    #[error("Prerendered sequence has {got} frames, configured frame count is {expected}")]
    SequenceLengthMismatch { expected: u32, got: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("GIF encoding error: {0}")]
    Gif(#[from] gif::EncodingError),
    #[error("GIF decoding error: {0}")]
    Decode(#[from] gif::DecodingError),
}

/// Writes an animated GIF frame by frame.
///
/// Usage:
/// ```ignore
/// let mut encoder = GifEncoder::create("out.gif", 640, 480, 50)?;
/// for index in 0..frames {
///     encoder.write_frame(&surface.capture(index))?;
/// }
/// let stats = encoder.finalize()?;
/// ```
pub struct GifEncoder {
    encoder: Encoder<BufWriter<File>>,
    path: PathBuf,
    width: u32,
    height: u32,
    /// GIF delay in centiseconds.
    delay: u16,
    frames_written: u32,
}

impl GifEncoder {
    /// Create the output file and write the GIF header.
    ///
    /// `interval_ms` is the nominal display time per frame; GIF stores
    /// delays in centiseconds, with a floor of one.
    pub fn create<P: AsRef<Path>>(
        path: P,
        width: u32,
        height: u32,
        interval_ms: u32,
    ) -> Result<Self, EncodeError> {
        if interval_ms == 0 {
            return Err(EncodeError::InvalidInterval);
        }
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(EncodeError::InvalidDimensions { width, height });
        }

        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let writer = BufWriter::new(file);

        let mut encoder = Encoder::new(writer, width as u16, height as u16, &[])?;
        encoder.set_repeat(Repeat::Infinite)?;

        Ok(Self {
            encoder,
            path,
            width,
            height,
            // GIF stores the delay in a u16 centisecond field; clamp
            // instead of wrapping for intervals beyond its range.
            delay: (interval_ms / 10).clamp(1, u16::MAX as u32) as u16,
            frames_written: 0,
        })
    }

    /// Encode one frame.
    ///
    /// Frames must arrive with contiguous ascending indices starting at
    /// 0, matching the output dimensions.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), EncodeError> {
        if frame.index != self.frames_written {
            return Err(EncodeError::FrameOutOfOrder {
                expected: self.frames_written,
                got: frame.index,
            });
        }
        if frame.width != self.width || frame.height != self.height {
            return Err(EncodeError::DimensionMismatch {
                index: frame.index,
                frame_w: frame.width,
                frame_h: frame.height,
                output_w: self.width,
                output_h: self.height,
            });
        }
        if frame.pixels.len() != frame.expected_len() {
            return Err(EncodeError::BadFrameBuffer {
                index: frame.index,
                got: frame.pixels.len(),
                expected: frame.expected_len(),
            });
        }

        let mut gif_frame = gif::Frame::from_rgb_speed(
            self.width as u16,
            self.height as u16,
            &frame.pixels,
            10,
        );
        gif_frame.delay = self.delay;
        self.encoder.write_frame(&gif_frame)?;

        self.frames_written += 1;
        Ok(())
    }

    /// Number of frames encoded so far.
    pub fn frames_written(&self) -> u32 {
        self.frames_written
    }

    /// Finish the file and report what was written.
    ///
    /// Rejects an empty animation so a degenerate zero-frame GIF is
    /// never left on disk as a valid-looking output.
    pub fn finalize(self) -> Result<EncodeStats, EncodeError> {
        if self.frames_written == 0 {
            return Err(EncodeError::NoFrames);
        }

        let Self {
            encoder,
            path,
            width,
            height,
            frames_written,
            ..
        } = self;
        // Write the trailer and flush explicitly so a failing disk
        // surfaces here instead of being swallowed by a drop.
        let mut writer = encoder.into_inner()?;
        writer.flush()?;
        drop(writer);

        let total_bytes = fs::metadata(&path)?.len();
        Ok(EncodeStats {
            frame_count: frames_written,
            total_bytes,
            width,
            height,
        })
    }
}

/// Statistics from one encoding session.
#[derive(Debug, Clone)]
pub struct EncodeStats {
    /// Total frames encoded.
    pub frame_count: u32,
    /// Output file size in bytes.
    pub total_bytes: u64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl std::fmt::Display for EncodeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames at {}x{}, {} bytes",
            self.frame_count, self.width, self.height, self.total_bytes
        )
    }
}
