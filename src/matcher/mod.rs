//! Content matching between detected cards.
//!
//! Each region is cropped from the full-resolution screenshot, its border is
//! trimmed and the rest is resampled to a small square ([`sample`]). All
//! region pairs are compared by mean squared error and paired greedily,
//! best match first ([`pairing`]).
//!
//! The greedy pass approximates a minimum-weight matching; it is not optimal
//! when a card's best partner is claimed by an even better pair, and ties are
//! broken by the order of the candidate list. Output compatibility depends on
//! keeping it this way.

pub mod pairing;
pub mod sample;

use crate::detector::params::MatchParams;
use crate::geometry::CardRegion;
use crate::image::PixelBuffer;
use serde::Serialize;

pub use pairing::{assign_groups, GroupAssignment};
pub use sample::{card_sample, mean_squared_error};

/// Two regions the greedy pass put into one group.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedPair {
    pub first: usize,
    pub second: usize,
    pub mse: f64,
}

/// Group ids per region plus what the diagnostics report.
#[derive(Clone, Debug, Default)]
pub struct MatchOutcome {
    /// One id per input region, same order. Ids start at 1.
    pub group_ids: Vec<u32>,
    pub pairs: Vec<MatchedPair>,
    /// Region pairs whose MSE was under the threshold.
    pub candidate_edges: usize,
    pub singletons: usize,
}

/// Assign a group id to every region.
pub fn match_cards(image: &PixelBuffer, regions: &[CardRegion], params: &MatchParams) -> MatchOutcome {
    let samples: Vec<_> = regions
        .iter()
        .map(|r| card_sample(image, r, params))
        .collect();
    let GroupAssignment {
        labels,
        matched,
        candidate_edges,
    } = assign_groups(&samples, params.mse_threshold);

    let pairs: Vec<MatchedPair> = matched
        .into_iter()
        .map(|e| MatchedPair {
            first: e.i,
            second: e.j,
            mse: e.mse,
        })
        .collect();
    let singletons = labels.len() - 2 * pairs.len();
    MatchOutcome {
        group_ids: labels,
        pairs,
        candidate_edges,
        singletons,
    }
}
