//! Captured frame data.

/// One rendered visual state in an ordered animation sequence.
///
/// Pixels are row-major RGB, 3 bytes per pixel, so the buffer length is
/// always `width * height * 3`.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Position of this frame in the animation, starting at 0.
    pub index: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB pixel data.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Expected pixel buffer length for the frame's dimensions.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}
