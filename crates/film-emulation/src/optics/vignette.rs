//! Elliptical lens vignette.

use crate::color::Srgb;
use crate::raster::Raster;

/// Darkest a corner can get.
pub const VIGNETTE_FLOOR: f32 = 0.3;

/// Multiplier for the pixel at `(x, y)`.
///
/// Coordinates are normalised to the half-dimensions, then the longer axis is
/// stretched by the aspect ratio so the falloff follows the frame.
pub fn vignette_mask(x: usize, y: usize, width: usize, height: usize, strength: f32) -> f32 {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    let mut nx = (x as f32 - half_w) / half_w;
    let mut ny = (y as f32 - half_h) / half_h;

    let aspect = width as f32 / height as f32;
    if aspect > 1.0 {
        nx *= aspect;
    } else {
        ny /= aspect;
    }

    let r2 = nx * nx + ny * ny;
    (1.0 - r2 * strength * 0.7).clamp(VIGNETTE_FLOOR, 1.0)
}

/// Darken towards the edges. No-op for `strength <= 0`.
pub fn apply_vignette(image: &mut Raster<Srgb>, strength: f32) {
    if !(strength > 0.0) {
        return;
    }
    let (width, height) = (image.width(), image.height());
    for y in 0..height {
        for x in 0..width {
            let m = vignette_mask(x, y, width, height, strength);
            let p = image.get(x, y);
            image.set(x, y, Srgb::new(p.r * m, p.g * m, p.b * m));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_untouched() {
        assert_eq!(vignette_mask(50, 50, 100, 100, 1.0), 1.0);
    }

    #[test]
    fn test_corner_floor() {
        assert_eq!(vignette_mask(0, 0, 100, 100, 100.0), VIGNETTE_FLOOR);
    }

    #[test]
    fn test_landscape_falloff_is_stronger_horizontally() {
        // Same normalised offset, but x is stretched by the 2:1 aspect
        let horizontal = vignette_mask(0, 50, 200, 100, 0.2);
        let vertical = vignette_mask(100, 0, 200, 100, 0.2);
        assert!(horizontal < vertical);
    }

    #[test]
    fn test_zero_strength_is_noop() {
        let mut image = Raster::filled(6, 4, Srgb::new(0.5, 0.5, 0.5)).unwrap();
        let before = image.clone();
        apply_vignette(&mut image, 0.0);
        assert_eq!(image, before);
    }

    #[test]
    fn test_corner_darkens() {
        let mut image = Raster::filled(10, 10, Srgb::WHITE).unwrap();
        apply_vignette(&mut image, 0.5);
        assert!(image.get(0, 0).r < 1.0);
        assert_eq!(image.get(5, 5).r, 1.0);
    }
}
