//! Analyzer pipeline driving detection and matching end-to-end.
//!
//! Stages run strictly in order on one screenshot:
//! downscale → background separation + blob extraction → optional ROI
//! refinement → card-shape filter → row-major ordering → content matching.
//! The only backward step is the single ROI re-segmentation.
//!
//! Typical usage:
//! ```no_run
//! use pairgrid::{Analyzer, AnalyzerParams, GridShape, PixelBuffer};
//!
//! # fn example(image: PixelBuffer) -> Result<(), pairgrid::AnalyzeError> {
//! let analyzer = Analyzer::new(AnalyzerParams::default());
//! let report = analyzer.analyze_with_diagnostics(&image, GridShape::new(4, 4))?;
//! println!("{} cards, {} pairs", report.cards.len(), report.pair_count());
//! # Ok(())
//! # }
//! ```
use super::params::AnalyzerParams;
use crate::diagnostics::{
    AnalysisReport, FilterStage, InputDescriptor, MatchingStage, OrderingStage, PipelineTrace,
    RoiRefinementStage, SegmentationStage, TimingBreakdown,
};
use crate::error::AnalyzeError;
use crate::filter::filter_blobs;
use crate::image::PixelBuffer;
use crate::matcher::match_cards;
use crate::ordering::order_regions;
use crate::segmentation::{find_blobs, refine_roi, significant_blob_count};
use crate::types::{CardResult, GridShape};
use log::{debug, info};
use std::time::Instant;

/// Card grid analyzer. Stateless across calls; one instance may be reused
/// for any number of screenshots.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    params: AnalyzerParams,
}

impl Analyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Detect and group the cards, in row-major order.
    pub fn analyze(
        &self,
        image: &PixelBuffer,
        grid: GridShape,
    ) -> Result<Vec<CardResult>, AnalyzeError> {
        Ok(self.analyze_with_diagnostics(image, grid)?.cards)
    }

    /// Run the pipeline and return both the cards and a detailed trace.
    pub fn analyze_with_diagnostics(
        &self,
        image: &PixelBuffer,
        grid: GridShape,
    ) -> Result<AnalysisReport, AnalyzeError> {
        grid.validate()?;
        if image.is_empty() {
            return Err(AnalyzeError::EmptyImage);
        }
        let params = &self.params;
        let factor = params.downscale_factor.max(1);
        let expected = grid.expected_count();
        debug!(
            "Analyzer::analyze start w={} h={} grid={}",
            image.width(),
            image.height(),
            grid
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let small = timings.measure("downscale", || image.downscale(factor));

        let first = timings.measure("segmentation", || {
            find_blobs(&small, &params.segmentation)
        });
        let significant = significant_blob_count(&first.blobs, &params.roi);
        debug!(
            "initial blobs found: {} ({} significant)",
            first.blobs.len(),
            significant
        );

        let refinement = timings.measure("roiRefinement", || {
            refine_roi(
                &small,
                &first.blobs,
                expected,
                &params.roi,
                &params.segmentation,
            )
        });
        let blobs = refinement
            .as_ref()
            .map_or(&first.blobs, |roi| &roi.scan.blobs);

        let filtered = timings.measure("filter", || {
            filter_blobs(blobs, expected, factor, &params.filter)
        });
        debug!("filtered cards: {}", filtered.regions.len());

        let (ordered, path) = timings.measure("ordering", || order_regions(&filtered.regions, grid));
        debug!("ordering path: {:?}", path);

        let matching = timings.measure("matching", || {
            match_cards(image, &ordered, &params.matching)
        });

        let cards: Vec<CardResult> = ordered
            .iter()
            .zip(&matching.group_ids)
            .map(|(&region, &group_id)| CardResult { region, group_id })
            .collect();
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        info!(
            "analyzed {}x{} as {}: {} cards, {} pairs in {:.1} ms",
            image.width(),
            image.height(),
            grid,
            cards.len(),
            matching.pairs.len(),
            timings.total_ms
        );

        let trace = PipelineTrace {
            input: InputDescriptor {
                width: image.width(),
                height: image.height(),
                working_width: small.width(),
                working_height: small.height(),
                downscale_factor: factor,
                grid,
            },
            segmentation: SegmentationStage::from_scan(&first, significant),
            roi_refinement: refinement.as_ref().map(RoiRefinementStage::from),
            filter: FilterStage::new(blobs.len(), &filtered),
            ordering: OrderingStage {
                path,
                regions: ordered,
            },
            matching: MatchingStage::from(&matching),
            timings,
        };
        Ok(AnalysisReport { cards, trace })
    }
}
