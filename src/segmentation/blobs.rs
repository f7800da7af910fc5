use super::background::{separate_background, BackgroundMask};
use super::neighbours4;
use crate::detector::params::SegmentationParams;
use crate::geometry::Blob;
use crate::image::PixelBuffer;
use std::collections::VecDeque;

/// Outcome of one segmentation pass.
#[derive(Clone, Debug, Default)]
pub struct BlobScan {
    /// Kept components, in scan order (top-to-bottom, left-to-right seeds).
    pub blobs: Vec<Blob>,
    pub background_pixels: usize,
    /// Components dropped for being at or below the size floor.
    pub noise_components: usize,
}

/// Label the non-background pixels into 4-connected components.
///
/// Components are only started from seeds on a `scan_stride` lattice, so
/// isolated specks and one-pixel seams that never cover a lattice point are
/// skipped. A component grown from a seed still absorbs every connected
/// non-background pixel.
pub fn extract_blobs(mask: BackgroundMask, params: &SegmentationParams) -> BlobScan {
    let BackgroundMask {
        width,
        height,
        mut visited,
        background_pixels,
    } = mask;
    let stride = params.scan_stride.max(1);

    let mut blobs = Vec::new();
    let mut noise_components = 0usize;
    let mut queue = VecDeque::new();

    for y in (0..height).step_by(stride) {
        for x in (0..width).step_by(stride) {
            let seed = y * width + x;
            if visited[seed] {
                continue;
            }
            visited[seed] = true;
            queue.push_back(seed);

            let (mut min_x, mut max_x, mut min_y, mut max_y) = (x, x, y, y);
            let mut count = 0usize;
            while let Some(curr) = queue.pop_front() {
                count += 1;
                let (cx, cy) = (curr % width, curr / width);
                min_x = min_x.min(cx);
                max_x = max_x.max(cx);
                min_y = min_y.min(cy);
                max_y = max_y.max(cy);
                for n in neighbours4(curr, width, height).into_iter().flatten() {
                    if !visited[n] {
                        visited[n] = true;
                        queue.push_back(n);
                    }
                }
            }

            if count > params.min_blob_pixels {
                blobs.push(Blob::new(
                    min_x as i32,
                    min_y as i32,
                    max_x as i32 + 1,
                    max_y as i32 + 1,
                ));
            } else {
                noise_components += 1;
            }
        }
    }

    BlobScan {
        blobs,
        background_pixels,
        noise_components,
    }
}

/// Background separation followed by blob extraction.
pub fn find_blobs(image: &PixelBuffer, params: &SegmentationParams) -> BlobScan {
    extract_blobs(separate_background(image, params), params)
}
