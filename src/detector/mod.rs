//! Card grid analyzer orchestrating segmentation, filtering, ordering and
//! matching.
//!
//! Modules
//! - [`params`] – tuning constants for every stage, with the reference
//!   values as defaults.
//! - `pipeline` – the [`Analyzer`] implementation.

pub mod params;
mod pipeline;

pub use params::{AnalyzerParams, FilterParams, MatchParams, RoiParams, SegmentationParams};
pub use pipeline::Analyzer;
