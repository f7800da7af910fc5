//! Diagnostics data model returned by the analyzer and written by the demo.
//!
//! [`AnalysisReport`] bundles the cards with a [`PipelineTrace`] describing
//! what every stage saw and decided. All types serialize to camelCase JSON.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{AnalysisReport, InputDescriptor, PipelineTrace};
pub use stages::{FilterStage, MatchingStage, OrderingStage, RoiRefinementStage, SegmentationStage};
pub use timing::{StageTiming, TimingBreakdown};
