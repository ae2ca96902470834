//! Tone curves and hue-indexed curves.
//!
//! - [`ToneCurve`]: natural cubic spline with flat extrapolation, one per
//!   channel in [`ColorCurves`].
//! - [`HueCurve`]: the same spline on the circular hue domain, grouped into
//!   an [`AdvancedCurve`].
//!
//! Both are applied in linear light.

mod error;
mod hue;
mod spline;

pub use error::CurveError;
pub use hue::{AdvancedCurve, HueCurve};
pub use spline::ToneCurve;

use crate::color::LinearRgb;
use crate::raster::Raster;

/// Independent per-channel response curves.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCurves {
    pub red: ToneCurve,
    pub green: ToneCurve,
    pub blue: ToneCurve,
}

impl Default for ColorCurves {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorCurves {
    /// Identity curve on every channel.
    pub fn identity() -> Self {
        Self {
            red: ToneCurve::identity(),
            green: ToneCurve::identity(),
            blue: ToneCurve::identity(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.red.is_identity() && self.green.is_identity() && self.blue.is_identity()
    }

    /// Map each channel of `pixel` through its curve.
    #[inline]
    pub fn apply_pixel(&self, pixel: LinearRgb) -> LinearRgb {
        LinearRgb::new(
            self.red.evaluate(pixel.r as f64) as f32,
            self.green.evaluate(pixel.g as f64) as f32,
            self.blue.evaluate(pixel.b as f64) as f32,
        )
    }

    pub fn apply(&self, image: &mut Raster<LinearRgb>) {
        image.for_each_pixel(|p| *p = self.apply_pixel(*p));
    }
}

impl AdvancedCurve {
    pub fn apply(&self, image: &mut Raster<LinearRgb>) {
        image.for_each_pixel(|p| *p = self.apply_pixel(*p));
    }
}

/// Check that every value lies in `[0, 1]`.
pub(crate) fn check_unit_domain(values: &[f64]) -> Result<(), CurveError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(CurveError::NonFinite { index });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(CurveError::OutOfDomain { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_curves_leave_pixels_unchanged() {
        let curves = ColorCurves::identity();
        assert!(curves.is_identity());
        let pixel = LinearRgb::new(0.12, 0.5, 0.93);
        let out = curves.apply_pixel(pixel);
        assert!((out.r - pixel.r).abs() < 1e-7);
        assert!((out.g - pixel.g).abs() < 1e-7);
        assert!((out.b - pixel.b).abs() < 1e-7);
    }

    #[test]
    fn test_channels_are_independent() {
        let curves = ColorCurves {
            red: ToneCurve::new(&[0.0, 1.0], &[0.0, 0.5]).unwrap(),
            ..ColorCurves::identity()
        };
        let mut image = Raster::filled(2, 2, LinearRgb::new(0.8, 0.8, 0.8)).unwrap();
        curves.apply(&mut image);
        let p = image.get(1, 1);
        assert!((p.r - 0.4).abs() < 1e-6);
        assert!((p.g - 0.8).abs() < 1e-6);
        assert!((p.b - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_unit_domain_check() {
        assert!(check_unit_domain(&[0.0, 0.5, 1.0]).is_ok());
        assert_eq!(
            check_unit_domain(&[0.0, 1.2]).unwrap_err(),
            CurveError::OutOfDomain {
                index: 1,
                value: 1.2
            }
        );
        assert_eq!(
            check_unit_domain(&[f64::INFINITY]).unwrap_err(),
            CurveError::NonFinite { index: 0 }
        );
    }
}
