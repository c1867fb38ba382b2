//! Crate-level error type.

use crate::encode::EncodeError;
use crate::render::RenderError;
use crate::schema::ConfigError;

/// Any failure while rendering or encoding an animation.
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
