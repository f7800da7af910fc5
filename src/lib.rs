#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod collab;
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod image;
pub mod overlay;
pub mod types;

// Stage modules – public for tools and tests, considered internals.
pub mod filter;
pub mod matcher;
pub mod ordering;
pub mod segmentation;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{Analyzer, AnalyzerParams};
pub use crate::error::{AnalyzeError, ImageError};
pub use crate::geometry::{Blob, CardRegion};
pub use crate::image::PixelBuffer;
pub use crate::types::{CardResult, GridShape};

pub use crate::diagnostics::{AnalysisReport, PipelineTrace};

/// Detect the cards of a `rows × cols` grid and group the identical ones.
///
/// Uses the reference tuning ([`AnalyzerParams::default`]). The result is in
/// row-major order and never longer than `rows × cols`; an image without
/// cards yields an empty list.
pub fn analyze(image: &PixelBuffer, rows: u32, cols: u32) -> Result<Vec<CardResult>, AnalyzeError> {
    Analyzer::default().analyze(image, GridShape::new(rows, cols))
}

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::PixelBuffer;
    pub use crate::{analyze, Analyzer, AnalyzerParams, CardResult, GridShape};
}
