//! RGB pixel buffers and file helpers.
//!
//! - [`PixelBuffer`]: owned, immutable RGB8 image shared by every stage.
//! - [`io`]: load/save helpers and JSON dumps for the demo tools.

pub mod buffer;
pub mod io;

pub use self::buffer::PixelBuffer;
