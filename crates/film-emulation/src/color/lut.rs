//! sRGB transfer function lookup
//!
//! Tables are generated at compile time by build.rs and sampled with linear
//! interpolation between adjacent entries.

include!(concat!(env!("OUT_DIR"), "/transfer_lut.rs"));

const LAST: usize = 4095;

#[inline]
fn sample(table: &[f32; 4096], value: f32) -> f32 {
    // NaN clamps to 0.0 through the `max`
    let value = value.max(0.0).min(1.0);

    let scaled = value * LAST as f32;
    let index = scaled as usize;
    if index >= LAST {
        return table[LAST];
    }

    let frac = scaled - index as f32;
    let a = table[index];
    let b = table[index + 1];
    a + (b - a) * frac
}

/// Decode an encoded sRGB sample to linear light.
///
/// Inputs outside 0.0..=1.0 are clamped first.
#[inline]
pub fn srgb_to_linear(encoded: f32) -> f32 {
    sample(&DISPLAY_TO_LINEAR, encoded)
}

/// Encode a linear-light sample with the sRGB transfer function.
///
/// Inputs outside 0.0..=1.0 are clamped first.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    sample(&LINEAR_TO_DISPLAY, linear)
}
