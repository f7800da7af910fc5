//! Parameter types configuring the analysis stages.
//!
//! Every knob lives here; [`AnalyzerParams::default`] reproduces the values
//! the pipeline was tuned with and is what [`crate::analyze`] uses. Changing
//! them is meant for experiments on new screen layouts only.

use serde::Deserialize;

/// Parameters for background separation and blob extraction (working scale).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SegmentationParams {
    /// Flood fill crosses a neighbour when `|ΔR| + |ΔG| + |ΔB|` is below this.
    pub color_tolerance: u32,
    /// Seeds skip `height / seed_margin_divisor` rows at top and bottom.
    pub seed_margin_divisor: usize,
    /// Labelling seeds are tried every `scan_stride` pixels in each axis.
    pub scan_stride: usize,
    /// Components must contain more pixels than this to become blobs.
    pub min_blob_pixels: usize,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            color_tolerance: 9,
            seed_margin_divisor: 10,
            scan_stride: 2,
            min_blob_pixels: 50,
        }
    }
}

/// Enclosing-frame detection that triggers a second segmentation pass.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoiParams {
    /// Blobs with a bounding-box area above this count as real cards (px²).
    pub significant_blob_area: i64,
    /// Largest blob must cover more than this share of the working image.
    pub frame_area_ratio: f64,
}

impl Default for RoiParams {
    fn default() -> Self {
        Self {
            significant_blob_area: 2000,
            frame_area_ratio: 0.4,
        }
    }
}

/// Plausibility gates applied to full-resolution candidates.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub min_aspect: f32,
    pub max_aspect: f32,
    /// Minimum area in full-resolution px².
    pub min_area: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            min_aspect: 0.5,
            max_aspect: 1.8,
            min_area: 5000.0,
        }
    }
}

/// Card content comparison.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchParams {
    /// Pairs with a mean squared error below this are match candidates.
    /// Calibrated on point-sampled bilinear thumbnails; area-averaged samples
    /// of textured art score somewhat lower against it.
    pub mse_threshold: f64,
    /// Side of the square sample each card is resampled to.
    pub sample_size: u32,
    /// Border fraction trimmed from each side before resampling.
    pub crop_margin: f64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            mse_threshold: 1500.0,
            sample_size: 32,
            crop_margin: 0.15,
        }
    }
}

/// Analyzer-wide parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Integer decimation factor for the geometry stages.
    pub downscale_factor: u32,
    pub segmentation: SegmentationParams,
    pub roi: RoiParams,
    pub filter: FilterParams,
    pub matching: MatchParams,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            downscale_factor: 2,
            segmentation: SegmentationParams::default(),
            roi: RoiParams::default(),
            filter: FilterParams::default(),
            matching: MatchParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let params: AnalyzerParams =
            serde_json::from_str(r#"{ "matching": { "mse_threshold": 900.0 } }"#).unwrap();
        assert_eq!(params.matching.mse_threshold, 900.0);
        assert_eq!(params.matching.sample_size, 32);
        assert_eq!(params.segmentation, SegmentationParams::default());
        assert_eq!(params.downscale_factor, 2);
    }
}
