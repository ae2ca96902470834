//! Color types and conversion utilities
//!
//! Two RGB encodings are kept apart at the type level:
//!
//! - [`Srgb`]: display-encoded (gamma) samples. Image I/O, print and lens
//!   stages (grain, vignette, aberration, base color, temperature).
//! - [`LinearRgb`]: linear light. Emulsion stages (halation, highlight
//!   roll-off, curves, shadow tint, color bleed).
//!
//! [`Hsv`] is used by hue-indexed curves.
//!
//! # Example
//!
//! ```
//! use film_emulation::{LinearRgb, Srgb};
//!
//! let srgb = Srgb::from_u8(128, 64, 32);
//! let linear = LinearRgb::from(srgb);
//! let back = Srgb::from(linear);
//! assert_eq!(back.to_bytes(), [128, 64, 32]);
//! ```

mod hsv;
mod linear_rgb;
mod lut;
mod srgb;

pub use hsv::Hsv;
pub use linear_rgb::LinearRgb;
pub use srgb::{ParseColorError, Srgb};

pub(crate) use hsv::wrap_degrees;
pub(crate) use lut::{linear_to_srgb, srgb_to_linear};

/// Rec. 601 luma weights, shared by every luminance-driven stage.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Channel access shared by both RGB encodings.
///
/// Stages that do not care which encoding they run in (blur, luma masks,
/// per-channel arithmetic) are written against this trait.
pub trait Rgb: Copy + Send + Sync {
    /// The three channels as `[r, g, b]`.
    fn channels(self) -> [f32; 3];

    /// Build a pixel from `[r, g, b]`.
    fn from_channels(channels: [f32; 3]) -> Self;

    /// Rec. 601 weighted luma of the pixel.
    #[inline]
    fn luma(self) -> f32 {
        let [r, g, b] = self.channels();
        LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b
    }

    /// Apply `f` to every channel.
    #[inline]
    fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        let [r, g, b] = self.channels();
        Self::from_channels([f(r), f(g), f(b)])
    }

    /// Clamp every channel to 0.0..=1.0.
    #[inline]
    fn clamped(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }
}
