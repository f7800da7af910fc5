//! Foreground segmentation on the downscaled working image.
//!
//! Overview
//! - [`background`] marks the background with a multi-source flood fill seeded
//!   on the left/right borders. The fill follows locally similar colours, so
//!   gradients, textures and translucent overlays are absorbed while genuine
//!   card edges stop it.
//! - [`blobs`] labels what is left into 4-connected components and keeps their
//!   bounding boxes.
//! - [`roi`] handles the degenerate capture where a panel or frame swallows the
//!   whole field: the largest blob is segmented again in isolation, once.
//!
//! Both traversals run on an explicit FIFO over flat pixel indices with a
//! parallel visited array; nothing recurses.

pub mod background;
pub mod blobs;
pub mod roi;


pub use background::{color_diff, separate_background, BackgroundMask};
pub use blobs::{extract_blobs, find_blobs, BlobScan};
pub use roi::{refine_roi, significant_blob_count, RoiRefinement};

/// 4-neighbourhood of a flat index, `None` where it would leave the image.
#[inline]
pub(crate) fn neighbours4(index: usize, width: usize, height: usize) -> [Option<usize>; 4] {
    let (x, y) = (index % width, index / width);
    [
        (x > 0).then(|| index - 1),
        (x + 1 < width).then(|| index + 1),
        (y > 0).then(|| index - width),
        (y + 1 < height).then(|| index + width),
    ]
}
