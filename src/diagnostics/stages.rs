use crate::filter::FilterOutcome;
use crate::geometry::{Blob, CardRegion};
use crate::matcher::{MatchOutcome, MatchedPair};
use crate::ordering::OrderingPath;
use crate::segmentation::{BlobScan, RoiRefinement};
use serde::Serialize;

/// First segmentation pass over the whole working image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationStage {
    pub background_pixels: usize,
    pub noise_components: usize,
    pub significant_blobs: usize,
    pub blobs: Vec<Blob>,
}

impl SegmentationStage {
    pub fn from_scan(scan: &BlobScan, significant_blobs: usize) -> Self {
        Self {
            background_pixels: scan.background_pixels,
            noise_components: scan.noise_components,
            significant_blobs,
            blobs: scan.blobs.clone(),
        }
    }
}

/// Second pass inside an enclosing frame, when it ran.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiRefinementStage {
    pub frame: Blob,
    pub background_pixels: usize,
    pub blobs: Vec<Blob>,
}

impl From<&RoiRefinement> for RoiRefinementStage {
    fn from(roi: &RoiRefinement) -> Self {
        Self {
            frame: roi.frame,
            background_pixels: roi.scan.background_pixels,
            blobs: roi.scan.blobs.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStage {
    pub candidates: usize,
    pub kept: usize,
    pub rejected_aspect: usize,
    pub rejected_area: usize,
    pub dropped_excess: usize,
}

impl FilterStage {
    pub fn new(candidates: usize, outcome: &FilterOutcome) -> Self {
        Self {
            candidates,
            kept: outcome.regions.len(),
            rejected_aspect: outcome.rejected_aspect,
            rejected_area: outcome.rejected_area,
            dropped_excess: outcome.dropped_excess,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingStage {
    pub path: OrderingPath,
    pub regions: Vec<CardRegion>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingStage {
    pub candidate_edges: usize,
    pub pairs: Vec<MatchedPair>,
    pub singletons: usize,
}

impl From<&MatchOutcome> for MatchingStage {
    fn from(outcome: &MatchOutcome) -> Self {
        Self {
            candidate_edges: outcome.candidate_edges,
            pairs: outcome.pairs.clone(),
            singletons: outcome.singletons,
        }
    }
}
