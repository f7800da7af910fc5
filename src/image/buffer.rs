use crate::error::ImageError;
use image::{DynamicImage, RgbImage};

/// Owned RGB8 screenshot buffer.
///
/// Row-major, three bytes per pixel, no padding. Geometry stages address it
/// through flat pixel indices (`y * width + x`), the matcher through
/// sub-rectangle crops. Once built it is never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// Wrap tightly packed RGB bytes.
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(ImageError::LengthMismatch {
                width,
                height,
                expected,
                actual: rgb.len(),
            });
        }
        let image = RgbImage::from_raw(width, height, rgb).ok_or(ImageError::LengthMismatch {
            width,
            height,
            expected,
            actual: 0,
        })?;
        Ok(Self { image })
    }

    /// Build from RGBA bytes, dropping alpha.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ImageError::LengthMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        let rgb = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        Self::new(width, height, rgb)
    }

    /// Build from packed `0xAARRGGBB` words, one per pixel.
    pub fn from_argb(width: u32, height: u32, argb: &[u32]) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize;
        if argb.len() != expected {
            return Err(ImageError::LengthMismatch {
                width,
                height,
                expected,
                actual: argb.len(),
            });
        }
        let rgb = argb
            .iter()
            .flat_map(|&c| [(c >> 16) as u8, (c >> 8) as u8, c as u8])
            .collect();
        Self::new(width, height, rgb)
    }

    /// Convert any decoded image to RGB8.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgb8(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.image.width() as usize * self.image.height() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// RGB triple at flat index `y * width + x`.
    #[inline]
    pub fn rgb_at(&self, index: usize) -> [u8; 3] {
        let start = index * 3;
        let px = &self.image.as_raw()[start..start + 3];
        [px[0], px[1], px[2]]
    }

    /// Borrow the backing `image` buffer.
    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.image
    }

    /// Nearest-neighbour decimation by an integer factor.
    ///
    /// The working size is `floor(W / factor) × floor(H / factor)`; each output
    /// pixel samples the source pixel nearest to the centre of its footprint.
    /// May yield an empty buffer for images smaller than `factor`.
    pub fn downscale(&self, factor: u32) -> PixelBuffer {
        let factor = factor.max(1);
        if factor == 1 {
            return self.clone();
        }
        let (w, h) = (self.width(), self.height());
        let (nw, nh) = (w / factor, h / factor);
        let half = factor / 2;
        let image = RgbImage::from_fn(nw, nh, |x, y| {
            let sx = (x * factor + half).min(w - 1);
            let sy = (y * factor + half).min(h - 1);
            *self.image.get_pixel(sx, sy)
        });
        PixelBuffer { image }
    }

    /// Copy the `width × height` rectangle whose top-left corner is `(x, y)`.
    ///
    /// The rectangle must lie inside the buffer.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> PixelBuffer {
        debug_assert!(x + width <= self.width() && y + height <= self.height());
        let image = image::imageops::crop_imm(&self.image, x, y, width, height).to_image();
        PixelBuffer { image }
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        Self { image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[x as u8, y as u8, 7]);
            }
        }
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn rejects_wrong_length() {
        let err = PixelBuffer::new(4, 4, vec![0; 10]).unwrap_err();
        assert_eq!(
            err,
            ImageError::LengthMismatch {
                width: 4,
                height: 4,
                expected: 48,
                actual: 10
            }
        );
    }

    #[test]
    fn argb_words_unpack_to_rgb() {
        let buf = PixelBuffer::from_argb(2, 1, &[0xFF10_2030, 0x0040_5060]).unwrap();
        assert_eq!(buf.rgb_at(0), [0x10, 0x20, 0x30]);
        assert_eq!(buf.rgb_at(1), [0x40, 0x50, 0x60]);
    }

    #[test]
    fn rgba_drops_alpha() {
        let buf = PixelBuffer::from_rgba(1, 1, &[1, 2, 3, 200]).unwrap();
        assert_eq!(buf.rgb_at(0), [1, 2, 3]);
    }

    #[test]
    fn downscale_samples_footprint_centres() {
        let buf = ramp(9, 6);
        let small = buf.downscale(2);
        assert_eq!((small.width(), small.height()), (4, 3));
        // output (1, 2) samples source (3, 5)
        assert_eq!(small.rgb_at(2 * 4 + 1), [3, 5, 7]);
    }

    #[test]
    fn downscale_of_tiny_image_is_empty() {
        let small = ramp(1, 5).downscale(2);
        assert!(small.is_empty());
    }

    #[test]
    fn crop_copies_sub_rectangle() {
        let crop = ramp(8, 8).crop(2, 3, 4, 2);
        assert_eq!((crop.width(), crop.height()), (4, 2));
        assert_eq!(crop.rgb_at(0), [2, 3, 7]);
        assert_eq!(crop.rgb_at(7), [5, 4, 7]);
    }
}
