//! Exposure-dependent film grain.
//!
//! Two octaves of gradient noise form a shared grain texture. Each channel
//! adds its own Gaussian jitter on top, and a luminance mask keeps the grain
//! strongest in the midtones without ever vanishing.

mod perlin;

pub use perlin::GradientLattice;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::color::{Rgb, Srgb};
use crate::raster::Raster;

/// Lowest grain visibility, reached at pure black and white.
pub const GRAIN_MASK_FLOOR: f32 = 0.3;

/// Grain visibility for a pixel of the given luma: peaks at mid-gray.
#[inline]
pub fn grain_mask(luma: f32) -> f32 {
    ((1.0 - (luma - 0.5).abs() * 2.0) * 1.5).clamp(GRAIN_MASK_FLOOR, 1.0)
}

/// Lattice cell counts `(x, y)` for one octave. Larger `size` means fewer
/// cells and coarser grain.
pub fn octave_cells(
    width: usize,
    height: usize,
    size: u32,
    pixels_per_cell: usize,
    min_cells: usize,
) -> (usize, usize) {
    let span = (size.max(1) as usize) * pixels_per_cell;
    ((width / span).max(min_cells), (height / span).max(min_cells))
}

/// Coarse + 0.5 × fine noise, normalised to `[0, 1]` then centred and
/// scaled to `[-amount/2, amount/2]`.
pub fn grain_texture<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    amount: f32,
    size: u32,
) -> Vec<f32> {
    let (bx, by) = octave_cells(width, height, size, 50, 4);
    let (dx, dy) = octave_cells(width, height, size, 20, 8);
    let base = GradientLattice::random(rng, bx, by).render(width, height);
    let detail = GradientLattice::random(rng, dx, dy).render(width, height);

    let mut texture: Vec<f32> = base
        .iter()
        .zip(&detail)
        .map(|(b, d)| b + 0.5 * d)
        .collect();

    let min = texture.iter().copied().fold(f32::INFINITY, f32::min);
    let max = texture.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;
    for t in &mut texture {
        let normalised = if range > f32::EPSILON { (*t - min) / range } else { 0.5 };
        *t = (normalised - 0.5) * amount;
    }
    texture
}

/// Add grain to a display-space image. No-op for `amount <= 0`.
pub fn apply_grain<R: Rng + ?Sized>(
    image: &mut Raster<Srgb>,
    amount: f32,
    size: u32,
    rng: &mut R,
) {
    if !(amount > 0.0) || !amount.is_finite() {
        return;
    }
    let Ok(jitter) = Normal::new(0.0f32, amount * 0.3) else {
        return;
    };

    let texture = grain_texture(rng, image.width(), image.height(), amount, size);
    for (pixel, shared) in image.pixels_mut().iter_mut().zip(texture) {
        let mask = grain_mask(pixel.luma());
        let [r, g, b] = pixel.channels();
        let mut grainy = |c: f32| (c + (shared + jitter.sample(rng)) * mask).clamp(0.0, 1.0);
        *pixel = Srgb::new(grainy(r), grainy(g), grainy(b));
    }
}
