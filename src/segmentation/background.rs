use super::neighbours4;
use crate::detector::params::SegmentationParams;
use crate::image::PixelBuffer;
use std::collections::VecDeque;

/// Background flags for a working image.
#[derive(Clone, Debug)]
pub struct BackgroundMask {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) visited: Vec<bool>,
    pub(crate) background_pixels: usize,
}

impl BackgroundMask {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_background(&self, x: usize, y: usize) -> bool {
        self.visited[y * self.width + x]
    }

    /// Number of pixels reached by the fill.
    pub fn background_pixels(&self) -> usize {
        self.background_pixels
    }
}

/// Sum of absolute per-channel differences.
#[inline]
pub fn color_diff(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&p, &q)| (p as i32 - q as i32).unsigned_abs())
        .sum()
}

/// Flood-fill the background from the left and right borders.
///
/// Seeds cover rows `[h / d, h - h / d)` (`d = seed_margin_divisor`) so status
/// and navigation bars are never used as background samples. The fill moves
/// to a 4-neighbour when its colour differs from the current pixel by less
/// than `color_tolerance`.
pub fn separate_background(image: &PixelBuffer, params: &SegmentationParams) -> BackgroundMask {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let mut visited = vec![false; width * height];
    if visited.is_empty() {
        return BackgroundMask {
            width,
            height,
            visited,
            background_pixels: 0,
        };
    }

    let margin = height.checked_div(params.seed_margin_divisor).unwrap_or(0);
    let start_y = margin.min(height / 2);
    let end_y = height.saturating_sub(margin).clamp(start_y, height);

    let mut queue = VecDeque::with_capacity(2 * (end_y - start_y));
    for y in start_y..end_y {
        for idx in [y * width, y * width + width - 1] {
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(idx);
            }
        }
    }

    let mut background_pixels = 0usize;
    while let Some(curr) = queue.pop_front() {
        background_pixels += 1;
        let rgb = image.rgb_at(curr);
        for n in neighbours4(curr, width, height).into_iter().flatten() {
            if !visited[n] && color_diff(rgb, image.rgb_at(n)) < params.color_tolerance {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }

    BackgroundMask {
        width,
        height,
        visited,
        background_pixels,
    }
}
