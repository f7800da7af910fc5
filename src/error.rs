//! Error types surfaced by the public API.
//!
//! Geometry never fails: an empty foreground, a missing frame or a short
//! detection all degrade into shorter result lists. Errors are reserved for
//! broken preconditions on the caller's side.

use thiserror::Error;

/// Failures constructing a [`PixelBuffer`](crate::image::PixelBuffer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("expected {expected} bytes for {width}x{height} pixels, got {actual}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Failures of [`analyze`](crate::analyze) and [`Analyzer`](crate::Analyzer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The screenshot has no pixels.
    #[error("input image is empty")]
    EmptyImage,
    /// Rows and columns must both be at least one.
    #[error("invalid grid {rows}x{cols}: rows and cols must be >= 1")]
    InvalidGrid { rows: u32, cols: u32 },
    #[error(transparent)]
    Image(#[from] ImageError),
}
