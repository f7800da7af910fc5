//! Synthetic screenshots: card grids on flat, framed and noisy backgrounds.
#![allow(dead_code)]

use pairgrid::{CardRegion, PixelBuffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CARD_BORDER: [u8; 3] = [245, 245, 245];
pub const BORDER_PX: u32 = 8;

pub struct Scene {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Scene {
    pub fn flat(width: u32, height: u32, color: [u8; 3]) -> Self {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Slow two-axis gradient with ±1 per-channel noise from a seeded RNG.
    ///
    /// Neighbouring pixels (also two apart) never differ by more than 7 in
    /// summed RGB, so the whole texture stays one background region.
    pub fn noisy(width: u32, height: u32, base: [u8; 3], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let gradient = [0, y / 40, x / 50];
                for c in 0..3 {
                    let noise: i32 = rng.gen_range(-1..=1);
                    let v = base[c] as i32 + gradient[c] as i32 + noise;
                    data.push(v.clamp(0, 255) as u8);
                }
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Scatter isolated `color` pixels over roughly `density` of the scene.
    ///
    /// Each speckle differs from a dark background by far more than the
    /// flood-fill tolerance, so the fill stops at every one of them and has
    /// to route around it.
    pub fn speckle(&mut self, density: f64, color: [u8; 3], seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for px in self.data.chunks_exact_mut(3) {
            if rng.gen_bool(density) {
                px.copy_from_slice(&color);
            }
        }
    }

    pub fn fill(&mut self, x: u32, y: u32, w: u32, h: u32, color: [u8; 3]) {
        for yy in y..y + h {
            for xx in x..x + w {
                let i = ((yy * self.width + xx) * 3) as usize;
                self.data[i..i + 3].copy_from_slice(&color);
            }
        }
    }

    /// Light-bordered card with a solid face; returns its screen rectangle.
    pub fn card(&mut self, x: u32, y: u32, w: u32, h: u32, face: [u8; 3]) -> CardRegion {
        self.fill(x, y, w, h, CARD_BORDER);
        self.fill(
            x + BORDER_PX,
            y + BORDER_PX,
            w - 2 * BORDER_PX,
            h - 2 * BORDER_PX,
            face,
        );
        CardRegion::new(x as i32, y as i32, (x + w) as i32, (y + h) as i32)
    }

    /// Lay out `faces` row-major on a grid; returns the rectangles in the same order.
    pub fn grid(
        &mut self,
        cols: u32,
        origin: (u32, u32),
        card: (u32, u32),
        gap: u32,
        faces: &[[u8; 3]],
    ) -> Vec<CardRegion> {
        faces
            .iter()
            .enumerate()
            .map(|(i, &face)| {
                let (r, c) = (i as u32 / cols, i as u32 % cols);
                let x = origin.0 + c * (card.0 + gap);
                let y = origin.1 + r * (card.1 + gap);
                self.card(x, y, card.0, card.1, face)
            })
            .collect()
    }

    pub fn build(self) -> PixelBuffer {
        PixelBuffer::new(self.width, self.height, self.data).expect("scene buffer size")
    }
}

/// `n` face colours, pairwise at least 100 apart on some channel.
pub fn distinct_faces(n: usize) -> Vec<[u8; 3]> {
    const LEVELS: [u8; 3] = [30, 130, 230];
    let mut out = Vec::new();
    for r in LEVELS {
        for g in LEVELS {
            for b in LEVELS {
                if [r, g, b] != [230, 230, 230] {
                    out.push([r, g, b]);
                }
            }
        }
    }
    assert!(n <= out.len(), "at most {} distinct faces", out.len());
    out.truncate(n);
    out
}

/// Every face twice, shuffled deterministically.
pub fn shuffled_pairs(pairs: usize, seed: u64) -> Vec<[u8; 3]> {
    use rand::seq::SliceRandom;
    let faces = distinct_faces(pairs);
    let mut slots: Vec<[u8; 3]> = faces.iter().chain(faces.iter()).copied().collect();
    slots.shuffle(&mut StdRng::seed_from_u64(seed));
    slots
}
