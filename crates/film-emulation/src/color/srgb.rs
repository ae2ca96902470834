//! sRGB color type
//!
//! Display-encoded samples, the representation images arrive and leave in.

use std::num::ParseIntError;
use std::str::FromStr;

use super::linear_rgb::LinearRgb;
use super::lut::linear_to_srgb;
use super::Rgb;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// A color in display-encoded sRGB.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..=255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Pure white, the "no tint" base color.
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Pure black.
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit values.
    ///
    /// # Example
    /// ```
    /// use film_emulation::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B], rounding and clamping to 0..=255.
    ///
    /// # Example
    /// ```
    /// use film_emulation::Srgb;
    /// let color = Srgb::new(1.0, 0.5, -0.2);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }
}

impl Rgb for Srgb {
    #[inline]
    fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    fn from_channels([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<LinearRgb> for Srgb {
    /// Encode with the inverse sRGB transfer function (LUT based).
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    ///
    /// Parsing is case-insensitive and trims surrounding whitespace.
    ///
    /// ```
    /// use film_emulation::Srgb;
    ///
    /// let amber: Srgb = "#FFB000".parse().unwrap();
    /// assert_eq!(amber.to_bytes(), [255, 176, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: each digit expands to a repeated pair (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
