//! Rectangles in the two coordinate spaces of the pipeline.
//!
//! [`Blob`] lives in the downscaled working image, [`CardRegion`] in the
//! full-resolution screenshot. The only bridge between them is
//! [`Blob::rescale`]; there is no conversion in the other direction.
//!
//! Both use half-open bounds: `left..right` × `top..bottom`. Centres are
//! integer midpoints `(a + b) >> 1`.

use serde::{Deserialize, Serialize};

/// Bounding box of a connected foreground component, downscaled space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Blob {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Bounding-box area in working-image px².
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Shift by `(dx, dy)`; maps ROI-local blobs back into the outer image.
    pub fn translate(&self, dx: i32, dy: i32) -> Blob {
        Blob::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Lift into full-resolution coordinates.
    pub fn rescale(&self, factor: u32) -> CardRegion {
        let f = factor as i32;
        CardRegion::new(self.left * f, self.top * f, self.right * f, self.bottom * f)
    }
}

/// Screen-space bounding box of one detected card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRegion {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl CardRegion {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    #[inline]
    pub fn center_x(&self) -> i32 {
        (self.left + self.right) >> 1
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) >> 1
    }

    /// Tap point used by click dispatchers.
    pub fn center(&self) -> (i32, i32) {
        (self.center_x(), self.center_y())
    }

    /// Intersect with `[0, width) × [0, height)`.
    ///
    /// The result may be empty (`width() <= 0`) when the region lies fully
    /// outside the image.
    pub fn clamp_to(&self, width: u32, height: u32) -> CardRegion {
        CardRegion::new(
            self.left.max(0),
            self.top.max(0),
            self.right.min(width as i32),
            self.bottom.min(height as i32),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}
