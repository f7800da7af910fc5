use crate::detector::params::MatchParams;
use crate::geometry::CardRegion;
use crate::image::PixelBuffer;
use image::imageops::{self, FilterType};
use image::RgbImage;

/// Border-trimmed, resampled view of one card.
///
/// The region is clamped to the image, then `crop_margin` of its width and
/// height is removed on every side. If trimming would leave nothing the
/// clamped crop is used as is. The result is resampled with a triangle
/// filter to `sample_size × sample_size`; on reduction the filter spans each
/// output pixel's whole source footprint, so fine texture is averaged out
/// rather than point-sampled. A region entirely outside the image yields a
/// black sample.
pub fn card_sample(image: &PixelBuffer, region: &CardRegion, params: &MatchParams) -> RgbImage {
    let size = params.sample_size.max(1);
    let safe = region.clamp_to(image.width(), image.height());
    if safe.is_empty() {
        return RgbImage::new(size, size);
    }

    let (w, h) = (safe.width(), safe.height());
    let margin_x = (w as f64 * params.crop_margin) as i32;
    let margin_y = (h as f64 * params.crop_margin) as i32;
    let (x, y, cw, ch) = if w > 2 * margin_x && h > 2 * margin_y {
        (
            safe.left + margin_x,
            safe.top + margin_y,
            w - 2 * margin_x,
            h - 2 * margin_y,
        )
    } else {
        (safe.left, safe.top, w, h)
    };

    let crop = imageops::crop_imm(image.as_rgb_image(), x as u32, y as u32, cw as u32, ch as u32)
        .to_image();
    imageops::resize(&crop, size, size, FilterType::Triangle)
}

/// Mean of squared per-channel differences.
///
/// Divides by `pixels × 3`: the average over channel samples, not over RGB
/// triples. Both samples must have the same dimensions.
pub fn mean_squared_error(a: &RgbImage, b: &RgbImage) -> f64 {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let (pa, pb) = (a.as_raw(), b.as_raw());
    if pa.is_empty() {
        return 0.0;
    }
    let sum: u64 = pa
        .iter()
        .zip(pb.iter())
        .map(|(&p, &q)| {
            let d = p as i64 - q as i64;
            (d * d) as u64
        })
        .sum();
    sum as f64 / pa.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn bordered_card(w: u32, h: u32, border: u32, inner: [u8; 3]) -> PixelBuffer {
        let img = RgbImage::from_fn(w, h, |x, y| {
            if x < border || y < border || x >= w - border || y >= h - border {
                Rgb([250, 250, 250])
            } else {
                Rgb(inner)
            }
        });
        PixelBuffer::from(img)
    }

    #[test]
    fn margin_trim_drops_card_border() {
        let img = bordered_card(100, 140, 10, [200, 30, 30]);
        let sample = card_sample(&img, &CardRegion::new(0, 0, 100, 140), &MatchParams::default());
        assert_eq!(sample.dimensions(), (32, 32));
        assert!(sample.pixels().all(|p| p.0 == [200, 30, 30]));
    }

    #[test]
    fn regions_are_clamped_to_the_image() {
        let img = bordered_card(60, 60, 0, [10, 20, 30]);
        let sample = card_sample(&img, &CardRegion::new(-20, -20, 80, 80), &MatchParams::default());
        assert!(sample.pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn tiny_regions_skip_trim() {
        let img = bordered_card(8, 8, 0, [1, 2, 3]);
        let params = MatchParams {
            crop_margin: 0.5,
            ..MatchParams::default()
        };
        // 0.5 margin would leave an empty crop; the clamped region is used instead.
        let sample = card_sample(&img, &CardRegion::new(2, 2, 4, 4), &params);
        assert_eq!(sample.dimensions(), (32, 32));
        assert!(sample.pixels().all(|p| p.0 == [1, 2, 3]));
    }

    #[test]
    fn region_outside_image_is_black() {
        let img = bordered_card(8, 8, 0, [1, 2, 3]);
        let sample = card_sample(&img, &CardRegion::new(20, 20, 40, 40), &MatchParams::default());
        assert!(sample.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn fine_texture_is_averaged_not_point_sampled() {
        // one-pixel checkerboard, reduced 4x: every sample lands near mid-grey
        let img = PixelBuffer::from(RgbImage::from_fn(128, 128, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        }));
        let params = MatchParams {
            crop_margin: 0.0,
            ..MatchParams::default()
        };
        let sample = card_sample(&img, &CardRegion::new(0, 0, 128, 128), &params);
        assert!(sample
            .pixels()
            .all(|p| p.0.iter().all(|&v| (90..=165).contains(&v))));
    }

    #[test]
    fn mse_averages_over_channel_samples() {
        let a = RgbImage::from_pixel(2, 2, Rgb([10, 10, 10]));
        let mut b = a.clone();
        b.put_pixel(0, 0, Rgb([40, 10, 10]));
        // one channel off by 30 over 12 samples
        assert_eq!(mean_squared_error(&a, &b), 900.0 / 12.0);
        assert_eq!(mean_squared_error(&a, &a), 0.0);
    }
}
