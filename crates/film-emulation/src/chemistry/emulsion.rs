//! Linear-light emulsion effects: highlight roll-off, shadow tint and dye
//! layer color bleed.

use crate::color::{LinearRgb, Rgb};
use crate::raster::Raster;

/// Channel level above which roll-off starts.
const ROLLOFF_KNEE: f32 = 0.6;

/// Fixed strength of the shadow tint.
pub const SHADOW_TINT_STRENGTH: f32 = 0.2;

/// Compress one channel above the knee.
#[inline]
pub fn rolloff_channel(v: f32, strength: f32) -> f32 {
    let mask = ((v - ROLLOFF_KNEE) / (1.0 - ROLLOFF_KNEE)).clamp(0.0, 1.0);
    let decay = (-5.0 * (v - ROLLOFF_KNEE) * (1.0 - strength)).exp();
    let compressed = ROLLOFF_KNEE + (1.0 - ROLLOFF_KNEE) * (1.0 - decay);
    (v * (1.0 - mask) + compressed * mask).clamp(0.0, 1.0)
}

/// Soft shoulder on each channel. No-op for `strength <= 0`.
pub fn apply_highlight_rolloff(image: &mut Raster<LinearRgb>, strength: f32) {
    if !(strength > 0.0) {
        return;
    }
    image.for_each_pixel(|p| *p = p.map(|c| rolloff_channel(c, strength)));
}

/// Shadow weight: `clamp(1 - 2 * luma, 0, 1) ^ 1.5`.
#[inline]
pub fn shadow_mask(luma: f32) -> f32 {
    (1.0 - 2.0 * luma).clamp(0.0, 1.0).powf(1.5)
}

/// Add `tint` (0..=1 per channel) into the shadows. No-op for a black tint
/// or `strength <= 0`.
pub fn apply_shadow_tint(image: &mut Raster<LinearRgb>, tint: [f32; 3], strength: f32) {
    if !(strength > 0.0) || tint.iter().all(|&t| t == 0.0) {
        return;
    }
    image.for_each_pixel(|p| {
        let weight = shadow_mask(p.luma()) * strength;
        let [r, g, b] = p.channels();
        *p = LinearRgb::new(
            (r + tint[0] * weight).clamp(0.0, 1.0),
            (g + tint[1] * weight).clamp(0.0, 1.0),
            (b + tint[2] * weight).clamp(0.0, 1.0),
        );
    });
}

/// Cross-couple the channels using the pre-bleed values for every term.
#[inline]
pub fn bleed_pixel(pixel: LinearRgb, strength: f32) -> LinearRgb {
    let LinearRgb { r, g, b } = pixel;
    LinearRgb::new(
        (r + b * strength * 0.15).clamp(0.0, 1.0),
        (g + (r + b) * strength * 0.05).clamp(0.0, 1.0),
        (b + r * strength * 0.10).clamp(0.0, 1.0),
    )
}

/// Dye-layer crosstalk. No-op for `strength <= 0`.
pub fn apply_color_bleed(image: &mut Raster<LinearRgb>, strength: f32) {
    if !(strength > 0.0) {
        return;
    }
    image.for_each_pixel(|p| *p = bleed_pixel(*p, strength));
}
