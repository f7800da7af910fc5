use super::blobs::{find_blobs, BlobScan};
use crate::detector::params::{RoiParams, SegmentationParams};
use crate::geometry::Blob;
use crate::image::PixelBuffer;
use log::debug;

/// Result of re-segmenting inside an enclosing frame blob.
#[derive(Clone, Debug)]
pub struct RoiRefinement {
    /// The blob that was treated as a frame, working coordinates.
    pub frame: Blob,
    /// Blobs found inside the frame, translated back to working coordinates.
    pub scan: BlobScan,
}

/// Count blobs whose bounding-box area exceeds the real-card floor.
pub fn significant_blob_count(blobs: &[Blob], params: &RoiParams) -> usize {
    blobs
        .iter()
        .filter(|b| b.area() > params.significant_blob_area)
        .count()
}

/// Re-run segmentation inside the largest blob when it looks like a frame.
///
/// Triggers only when fewer than `expected` blobs are card-sized and the
/// largest blob covers more than `frame_area_ratio` of the working image.
/// A single pass is made; the caller replaces its blob list with
/// `scan.blobs` whatever they turn out to be.
pub fn refine_roi(
    image: &PixelBuffer,
    blobs: &[Blob],
    expected: usize,
    roi: &RoiParams,
    segmentation: &SegmentationParams,
) -> Option<RoiRefinement> {
    if significant_blob_count(blobs, roi) >= expected {
        return None;
    }
    // First largest wins on ties.
    let mut frame: Option<&Blob> = None;
    for blob in blobs {
        if frame.map_or(true, |f| blob.area() > f.area()) {
            frame = Some(blob);
        }
    }
    let frame = *frame?;

    let image_area = image.width() as f64 * image.height() as f64;
    if frame.area() as f64 <= image_area * roi.frame_area_ratio {
        return None;
    }
    debug!("giant blob {:?} looks like a frame, refining ROI", frame);

    let crop = image.crop(
        frame.left as u32,
        frame.top as u32,
        frame.width() as u32,
        frame.height() as u32,
    );
    let mut scan = find_blobs(&crop, segmentation);
    for blob in &mut scan.blobs {
        *blob = blob.translate(frame.left, frame.top);
    }
    debug!("ROI blobs found: {}", scan.blobs.len());

    Some(RoiRefinement { frame, scan })
}
