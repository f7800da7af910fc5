use super::stages::{
    FilterStage, MatchingStage, OrderingStage, RoiRefinementStage, SegmentationStage,
};
use super::timing::TimingBreakdown;
use crate::types::{CardResult, GridShape};
use serde::Serialize;
use std::collections::BTreeMap;

/// Result produced by [`Analyzer::analyze_with_diagnostics`](crate::Analyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub cards: Vec<CardResult>,
    pub trace: PipelineTrace,
}

impl AnalysisReport {
    /// Group id -> number of cards carrying it.
    pub fn group_sizes(&self) -> BTreeMap<u32, usize> {
        let mut sizes = BTreeMap::new();
        for card in &self.cards {
            *sizes.entry(card.group_id).or_insert(0) += 1;
        }
        sizes
    }

    /// Number of groups with exactly two members.
    pub fn pair_count(&self) -> usize {
        self.group_sizes().values().filter(|&&n| n == 2).count()
    }
}

/// Stage-by-stage account of one analysis call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub segmentation: SegmentationStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi_refinement: Option<RoiRefinementStage>,
    pub filter: FilterStage,
    pub ordering: OrderingStage,
    pub matching: MatchingStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: u32,
    pub height: u32,
    pub working_width: u32,
    pub working_height: u32,
    pub downscale_factor: u32,
    pub grid: GridShape,
}
