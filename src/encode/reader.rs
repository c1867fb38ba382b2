//! Read-back of encoded GIF files.

use std::fs::File;
use std::path::Path;

use gif::{ColorOutput, DecodeOptions, Decoder};

use super::EncodeError;

/// Sequential reader over the frames of an animated GIF.
///
/// Usage:
/// ```ignore
/// let reader = GifReader::open("out.gif")?;
/// println!("{} frames", reader.frame_count()?);
/// ```
pub struct GifReader {
    decoder: Decoder<File>,
}

impl GifReader {
    /// Open a GIF file and read its header.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EncodeError> {
        let mut options = DecodeOptions::new();
        options.set_color_output(ColorOutput::RGBA);
        let decoder = options.read_info(File::open(path)?)?;
        Ok(Self { decoder })
    }

    /// Logical screen width in pixels.
    pub fn width(&self) -> u32 {
        self.decoder.width() as u32
    }

    /// Logical screen height in pixels.
    pub fn height(&self) -> u32 {
        self.decoder.height() as u32
    }

    /// Decode the next frame, or `None` past the trailer.
    pub fn read_next_frame(&mut self) -> Result<Option<&gif::Frame<'_>>, EncodeError> {
        Ok(self.decoder.read_next_frame()?)
    }

    /// Decode to the trailer and count the frames.
    pub fn frame_count(mut self) -> Result<u32, EncodeError> {
        let mut count = 0;
        while self.decoder.read_next_frame()?.is_some() {
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::GifEncoder;
    use crate::render::Frame;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip_frame_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.gif");

        let mut encoder = GifEncoder::create(&path, 12, 10, 100).unwrap();
        for i in 0..7 {
            let frame = Frame {
                index: i,
                width: 12,
                height: 10,
                pixels: vec![(i * 30) as u8; 12 * 10 * 3],
            };
            encoder.write_frame(&frame).unwrap();
        }
        encoder.finalize().unwrap();

        let reader = GifReader::open(&path).unwrap();
        assert_eq!(reader.width(), 12);
        assert_eq!(reader.height(), 10);
        assert_eq!(reader.frame_count().unwrap(), 7);
    }

    #[test]
    fn test_open_rejects_non_gif() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not_a_gif.gif");
        std::fs::write(&path, b"definitely not a gif").unwrap();
        assert!(GifReader::open(&path).is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.gif");
        assert!(matches!(
            GifReader::open(&path),
            Err(EncodeError::Io(_))
        ));
    }
}
