//! Owned, row-major pixel buffers.
//!
//! [`Raster`] carries its dimensions alongside the pixels so every stage can
//! address neighbours without the caller threading width/height through.
//! The pixel type is either [`Srgb`] or [`LinearRgb`], which keeps a stage
//! from being handed the wrong encoding.

use crate::color::{LinearRgb, Rgb, Srgb};

/// Errors from constructing a [`Raster`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// Width or height is zero.
    #[error("image dimensions {width}x{height} are empty")]
    EmptyDimensions { width: usize, height: usize },
    /// Buffer length does not match `width * height` (times 3 for bytes).
    #[error("buffer holds {actual} samples, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// A 2D image of `P` pixels in row-major order.
///
/// # Example
///
/// ```
/// use film_emulation::{Raster, Srgb};
///
/// let bytes = vec![128u8; 2 * 2 * 3];
/// let image = Raster::<Srgb>::from_rgb8(2, 2, &bytes).unwrap();
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.to_rgb8(), bytes);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>,
}

impl<P: Rgb> Raster<P> {
    /// Wrap an existing pixel buffer.
    pub fn new(width: usize, height: usize, pixels: Vec<P>) -> Result<Self, RasterError> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if pixels.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster where every pixel is `pixel`.
    pub fn filled(width: usize, height: usize, pixel: P) -> Result<Self, RasterError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the raster.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: P) {
        self.pixels[y * self.width + x] = pixel;
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Apply `f` to every pixel in place.
    pub fn for_each_pixel(&mut self, f: impl FnMut(&mut P)) {
        self.pixels.iter_mut().for_each(f);
    }

    /// Map every pixel into a new raster of the same dimensions.
    pub fn map<Q: Rgb>(&self, f: impl FnMut(P) -> Q) -> Raster<Q> {
        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Per-pixel luma plane, row-major.
    pub fn luma_plane(&self) -> Vec<f32> {
        self.pixels.iter().map(|p| p.luma()).collect()
    }

    /// Mean luma over the whole image.
    pub fn mean_luma(&self) -> f32 {
        let sum: f64 = self.pixels.iter().map(|p| p.luma() as f64).sum();
        (sum / self.pixels.len() as f64) as f32
    }

    /// Clamp every channel of every pixel to 0.0..=1.0.
    pub fn clamp(&mut self) {
        self.for_each_pixel(|p| *p = p.clamped());
    }

    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }
}

impl Raster<Srgb> {
    /// Build from interleaved 8-bit RGB samples.
    pub fn from_rgb8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, RasterError> {
        check_dimensions(width, height)?;
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Srgb::from_u8(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Interleaved 8-bit RGB samples, rounded and clamped.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    /// Decode into linear light.
    pub fn to_linear(&self) -> Raster<LinearRgb> {
        self.map(LinearRgb::from)
    }
}

impl Raster<LinearRgb> {
    /// Clip to 0.0..=1.0 and encode back to display sRGB.
    pub fn to_display(&self) -> Raster<Srgb> {
        self.map(|p| Srgb::from(p.clamped()))
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::EmptyDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(
            Raster::<Srgb>::from_rgb8(0, 4, &[]).unwrap_err(),
            RasterError::EmptyDimensions {
                width: 0,
                height: 4
            }
        );
        assert!(Raster::filled(3, 0, Srgb::WHITE).is_err());
    }

    #[test]
    fn test_rejects_wrong_buffer_length() {
        assert_eq!(
            Raster::<Srgb>::from_rgb8(2, 2, &[0; 11]).unwrap_err(),
            RasterError::BufferSize {
                expected: 12,
                actual: 11
            }
        );
        assert!(Raster::new(2, 2, vec![LinearRgb::default(); 3]).is_err());
    }

    #[test]
    fn test_row_major_addressing() {
        let bytes: Vec<u8> = (0..6u8).flat_map(|i| [i * 10, 0, 0]).collect();
        let image = Raster::<Srgb>::from_rgb8(3, 2, &bytes).unwrap();
        assert_eq!(image.get(2, 0).to_bytes()[0], 20);
        assert_eq!(image.get(0, 1).to_bytes()[0], 30);
        assert_eq!(image.rows().count(), 2);
    }

    #[test]
    fn test_linear_round_trip_preserves_bytes() {
        let bytes: Vec<u8> = (0..=255u8).flat_map(|v| [v, 255 - v, v / 2]).collect();
        let image = Raster::<Srgb>::from_rgb8(16, 16, &bytes).unwrap();
        let back = image.to_linear().to_display();
        assert_eq!(back.to_rgb8(), bytes);
    }

    #[test]
    fn test_to_display_clips_overshoot() {
        let image = Raster::filled(1, 1, LinearRgb::new(1.5, -0.2, 0.5)).unwrap();
        let bytes = image.to_display().to_rgb8();
        assert_eq!(bytes[0], 255);
        assert_eq!(bytes[1], 0);
    }

    #[test]
    fn test_mean_luma() {
        let mut image = Raster::filled(2, 1, Srgb::BLACK).unwrap();
        image.set(1, 0, Srgb::WHITE);
        assert!((image.mean_luma() - 0.5).abs() < 1e-6);
    }
}
