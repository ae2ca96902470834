//! Linear RGB color type
//!
//! Linear light: doubling a value doubles the photon count. Everything that
//! models light inside the emulsion happens here.

use super::lut::srgb_to_linear;
use super::srgb::Srgb;
use super::Rgb;

/// A color in linear RGB.
///
/// Values are nominally 0.0..=1.0; stages may overshoot transiently and clip
/// at their own boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Rgb for LinearRgb {
    #[inline]
    fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    fn from_channels([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode with the sRGB transfer function (LUT based).
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
