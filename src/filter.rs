//! Card-shape plausibility filter.
//!
//! Rescales working-space blobs into screen space and keeps those that look
//! like a card: aspect ratio (width / height) inside `[min_aspect, max_aspect]`
//! and area of at least `min_area`. Survivors are ranked by area and at most
//! `expected` of them are returned. Fewer survivors than expected is a soft
//! degradation, never an error.

use crate::detector::params::FilterParams;
use crate::geometry::{Blob, CardRegion};

/// Kept regions plus the rejection tallies reported in diagnostics.
#[derive(Clone, Debug, Default)]
pub struct FilterOutcome {
    /// Largest first.
    pub regions: Vec<CardRegion>,
    pub rejected_aspect: usize,
    pub rejected_area: usize,
    /// Plausible regions dropped because more than `expected` survived.
    pub dropped_excess: usize,
}

pub fn filter_blobs(
    blobs: &[Blob],
    expected: usize,
    factor: u32,
    params: &FilterParams,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    let mut valid = Vec::with_capacity(blobs.len());
    for region in blobs.iter().map(|b| b.rescale(factor)) {
        let w = region.width() as f32;
        let h = region.height() as f32;
        let aspect = w / h;
        if !(params.min_aspect..=params.max_aspect).contains(&aspect) {
            outcome.rejected_aspect += 1;
            continue;
        }
        if w * h < params.min_area {
            outcome.rejected_area += 1;
            continue;
        }
        valid.push(region);
    }

    // Stable: equal areas keep scan order.
    valid.sort_by(|a, b| b.area().cmp(&a.area()));
    outcome.dropped_excess = valid.len().saturating_sub(expected);
    valid.truncate(expected);
    outcome.regions = valid;
    outcome
}
