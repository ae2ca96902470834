//! Contrast and saturation in display space.
//!
//! Both blend each pixel against a gray reference and extrapolate for
//! factors above 1.0: contrast against the image's mean luma, saturation
//! against the pixel's own luma. A factor of exactly 1.0 is skipped.

use crate::color::{Rgb, Srgb};
use crate::raster::Raster;

#[inline]
fn blend_from(gray: f32, value: f32, factor: f32) -> f32 {
    (gray + (value - gray) * factor).clamp(0.0, 1.0)
}

/// Scale distance from the mean luma by `factor`.
pub fn apply_contrast(image: &mut Raster<Srgb>, factor: f32) {
    if factor == 1.0 {
        return;
    }
    let mean = image.mean_luma();
    image.for_each_pixel(|p| *p = p.map(|c| blend_from(mean, c, factor)));
}

/// Scale each pixel's distance from its own luma by `factor`.
pub fn apply_saturation(image: &mut Raster<Srgb>, factor: f32) {
    if factor == 1.0 {
        return;
    }
    image.for_each_pixel(|p| {
        let luma = p.luma();
        *p = p.map(|c| blend_from(luma, c, factor));
    });
}
