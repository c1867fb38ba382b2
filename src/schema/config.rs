//! Configuration types for animation output parameters.

use serde::{Deserialize, Serialize};

/// Largest surface dimension encodable in a GIF (u16 fields).
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Top-level animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Number of frames to render.
    pub frames: u32,
    /// Nominal display duration per frame in milliseconds. Advisory
    /// timing only; encoding never sleeps.
    pub interval_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            frames: 60,
            interval_ms: 50,
        }
    }
}

impl AnimationConfig {
    /// Size of one uncompressed RGB frame in bytes.
    #[inline]
    pub fn frame_size(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.frames == 0 {
            return Err(ConfigError::InvalidFrameCount);
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Surface dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Surface dimensions exceed GIF limit of {MAX_DIMENSION} (got {width}x{height})")]
    DimensionsTooLarge { width: u32, height: u32 },
    #[error("Frame count must be positive")]
    InvalidFrameCount,
    #[error("Frame interval must be positive")]
    InvalidInterval,
}
