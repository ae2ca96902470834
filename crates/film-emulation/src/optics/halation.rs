//! Halation: red-orange bloom around highlights.
//!
//! Light that passes through the emulsion reflects off the film base and
//! re-exposes the red-sensitive layer around bright areas.

use super::gaussian::blur_plane;
use crate::color::{LinearRgb, Rgb};
use crate::raster::Raster;

/// Per-channel weight of the bloom (R, G, B).
pub const HALATION_TINT: [f32; 3] = [1.0, 0.6, 0.3];

/// Bloom spread in pixels per unit of strength.
pub const HALATION_SIGMA_PER_STRENGTH: f32 = 20.0;

/// Squared highlight mask: 0 below `threshold`, rising to 1 at full white.
#[inline]
pub fn highlight_mask(luma: f32, threshold: f32) -> f32 {
    let m = ((luma - threshold) / (1.0 - threshold)).clamp(0.0, 1.0);
    m * m
}

/// Add a blurred, tinted highlight bloom. No-op for `strength <= 0` or a
/// threshold that leaves no highlight range.
pub fn apply_halation(image: &mut Raster<LinearRgb>, strength: f32, threshold: f32) {
    if !(strength > 0.0) || !(threshold < 1.0) {
        return;
    }

    let mask: Vec<f32> = image
        .pixels()
        .iter()
        .map(|p| highlight_mask(p.luma(), threshold))
        .collect();
    let bloom = blur_plane(
        &mask,
        image.width(),
        image.height(),
        HALATION_SIGMA_PER_STRENGTH * strength,
    );

    for (pixel, glow) in image.pixels_mut().iter_mut().zip(bloom) {
        let add = glow * strength;
        pixel.r = (pixel.r + add * HALATION_TINT[0]).clamp(0.0, 1.0);
        pixel.g = (pixel.g + add * HALATION_TINT[1]).clamp(0.0, 1.0);
        pixel.b = (pixel.b + add * HALATION_TINT[2]).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_shape() {
        assert_eq!(highlight_mask(0.5, 0.7), 0.0);
        assert_eq!(highlight_mask(0.7, 0.7), 0.0);
        assert!((highlight_mask(0.85, 0.7) - 0.25).abs() < 1e-5);
        assert_eq!(highlight_mask(1.0, 0.7), 1.0);
    }

    #[test]
    fn test_zero_strength_is_noop() {
        let mut image = Raster::filled(4, 4, LinearRgb::new(0.9, 0.9, 0.9)).unwrap();
        let before = image.clone();
        apply_halation(&mut image, 0.0, 0.7);
        assert_eq!(image, before);
        apply_halation(&mut image, -1.0, 0.7);
        assert_eq!(image, before);
    }

    #[test]
    fn test_dark_image_gets_no_bloom() {
        let mut image = Raster::filled(8, 8, LinearRgb::new(0.2, 0.2, 0.2)).unwrap();
        let before = image.clone();
        apply_halation(&mut image, 0.5, 0.7);
        assert_eq!(image, before);
    }

    #[test]
    fn test_bloom_spills_red_into_dark_neighbours() {
        let mut image = Raster::filled(15, 15, LinearRgb::new(0.0, 0.0, 0.0)).unwrap();
        image.set(7, 7, LinearRgb::new(1.0, 1.0, 1.0));
        apply_halation(&mut image, 0.1, 0.7);

        let neighbour = image.get(8, 7);
        assert!(neighbour.r > 0.0);
        assert!(neighbour.r > neighbour.g && neighbour.g > neighbour.b);
    }
}
