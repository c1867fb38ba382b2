//! GIF encoding and read-back for frame sequences.
//!
//! Frames are encoded in ascending index order into a single animated
//! GIF. The configured frame interval maps onto the GIF per-frame delay
//! field, which GIF stores in centiseconds; the delay is advisory
//! display timing and never affects encoding correctness.

mod encoder;
mod reader;

pub use encoder::{EncodeError, EncodeStats, GifEncoder};
pub use reader::GifReader;
