//! Debug overlay: detected regions and group markers drawn over a copy of
//! the screenshot.

use crate::image::PixelBuffer;
use crate::types::CardResult;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

const OUTLINE: Rgb<u8> = Rgb([211, 211, 211]);
const OUTLINE_WIDTH: i32 = 5;
const MARKER_RADIUS: i32 = 60;

/// Marker colours, picked by `group_id % len`.
pub const GROUP_PALETTE: [Rgb<u8>; 8] = [
    Rgb([0xFF, 0xFF, 0x80]),
    Rgb([0x80, 0xFF, 0xFF]),
    Rgb([0xFF, 0x80, 0xFF]),
    Rgb([0x80, 0xFF, 0x80]),
    Rgb([0xFF, 0xB3, 0x66]),
    Rgb([0xFF, 0x99, 0xCC]),
    Rgb([0x99, 0xCC, 0xFF]),
    Rgb([0xCC, 0xFF, 0x99]),
];

pub fn group_color(group_id: u32) -> Rgb<u8> {
    GROUP_PALETTE[group_id as usize % GROUP_PALETTE.len()]
}

/// Outline every card and put a group-coloured disc on its top-left corner.
pub fn render_overlay(image: &PixelBuffer, cards: &[CardResult]) -> RgbImage {
    let mut canvas = image.as_rgb_image().clone();
    for card in cards {
        let r = card.region;
        // stroke centred on the edge
        for inset in -(OUTLINE_WIDTH / 2)..=(OUTLINE_WIDTH / 2) {
            let (w, h) = (r.width() - 2 * inset, r.height() - 2 * inset);
            if w <= 0 || h <= 0 {
                continue;
            }
            let rect = Rect::at(r.left + inset, r.top + inset).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(&mut canvas, rect, OUTLINE);
        }
        draw_filled_circle_mut(
            &mut canvas,
            (r.left + MARKER_RADIUS, r.top + MARKER_RADIUS),
            MARKER_RADIUS,
            group_color(card.group_id),
        );
    }
    canvas
}
