//! Hue-indexed curves on the circular domain `[0, 360)`.

use super::{CurveError, ToneCurve};
use crate::color::{wrap_degrees, Hsv, LinearRgb, Rgb};

/// A curve over hue angle that wraps continuously through 0°/360°.
///
/// The anchor set is duplicated one turn up (`h + 360`) and a single spline
/// is fitted through both copies; queries below the first anchor are moved
/// up one turn before evaluation. The segment between the last anchor and
/// the first anchor of the next turn therefore bridges the wrap point.
#[derive(Debug, Clone, PartialEq)]
pub struct HueCurve {
    first_anchor: f64,
    curve: ToneCurve,
}

impl HueCurve {
    /// Build from hue anchors in degrees and their values.
    ///
    /// One anchor is enough (the curve is then constant). Anchors must lie in
    /// `[0, 360)` and be strictly increasing.
    pub fn new(hues: &[f64], values: &[f64]) -> Result<Self, CurveError> {
        if hues.len() != values.len() {
            return Err(CurveError::LengthMismatch {
                x: hues.len(),
                y: values.len(),
            });
        }
        if hues.is_empty() {
            return Err(CurveError::TooFewPoints { count: 0 });
        }
        for (index, &hue) in hues.iter().enumerate() {
            if !hue.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if !(0.0..360.0).contains(&hue) {
                return Err(CurveError::OutOfDomain { index, value: hue });
            }
        }

        let xs: Vec<f64> = hues
            .iter()
            .copied()
            .chain(hues.iter().map(|h| h + 360.0))
            .collect();
        let ys: Vec<f64> = values.iter().chain(values).copied().collect();

        // Validation of ordering and finite values happens in ToneCurve; an
        // index past the first copy maps back onto the original anchor.
        let curve = ToneCurve::new(&xs, &ys).map_err(|err| match err {
            CurveError::NonIncreasing { index } => CurveError::NonIncreasing {
                index: index % hues.len(),
            },
            CurveError::NonFinite { index } => CurveError::NonFinite {
                index: index % hues.len(),
            },
            other => other,
        })?;

        Ok(Self {
            first_anchor: hues[0],
            curve,
        })
    }

    /// Evaluate at `hue` degrees. Any real angle is accepted.
    pub fn evaluate(&self, hue: f64) -> f64 {
        let mut h = hue.rem_euclid(360.0);
        if h < self.first_anchor {
            h += 360.0;
        }
        self.curve.evaluate(h)
    }
}

/// The optional hue-indexed adjustments of a profile.
///
/// Each present curve is evaluated at the pixel's original hue:
/// `saturation` and `value` give multipliers, `hue_shift` gives degrees.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvancedCurve {
    pub saturation: Option<HueCurve>,
    pub hue_shift: Option<HueCurve>,
    pub value: Option<HueCurve>,
}

impl AdvancedCurve {
    /// True when no adjustment is defined.
    pub fn is_empty(&self) -> bool {
        self.saturation.is_none() && self.hue_shift.is_none() && self.value.is_none()
    }

    /// Apply to one linear pixel via HSV.
    ///
    /// Multipliers are clamped to `[0, 1/current]` so saturation and value
    /// never exceed 1.0; the shifted hue is wrapped into `[0, 360)`.
    pub fn apply_pixel(&self, pixel: LinearRgb) -> LinearRgb {
        let mut hsv = Hsv::from_rgb(pixel.clamped());
        let hue = hsv.h as f64;

        if let Some(curve) = &self.saturation {
            hsv.s = scale_bounded(hsv.s, curve.evaluate(hue));
        }
        if let Some(curve) = &self.value {
            hsv.v = scale_bounded(hsv.v, curve.evaluate(hue));
        }
        if let Some(curve) = &self.hue_shift {
            hsv.h = wrap_degrees((hue + curve.evaluate(hue)) as f32);
        }
        hsv.to_rgb()
    }
}

/// `current * multiplier`, with the multiplier limited so the result stays
/// within `[0, 1]`.
fn scale_bounded(current: f32, multiplier: f64) -> f32 {
    if current <= 0.0 {
        return current;
    }
    let limit = 1.0 / current as f64;
    (current as f64 * multiplier.clamp(0.0, limit)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_anchor_is_constant() {
        let curve = HueCurve::new(&[120.0], &[1.3]).unwrap();
        for h in [0.0, 90.0, 119.0, 121.0, 359.0, 720.5, -45.0] {
            assert!((curve.evaluate(h) - 1.3).abs() < 1e-12, "at {h}");
        }
    }

    #[test]
    fn test_rejects_out_of_domain_anchor() {
        assert_eq!(
            HueCurve::new(&[0.0, 360.0], &[1.0, 1.0]).unwrap_err(),
            CurveError::OutOfDomain {
                index: 1,
                value: 360.0
            }
        );
        assert!(matches!(
            HueCurve::new(&[-10.0], &[1.0]).unwrap_err(),
            CurveError::OutOfDomain { index: 0, .. }
        ));
        assert_eq!(
            HueCurve::new(&[], &[]).unwrap_err(),
            CurveError::TooFewPoints { count: 0 }
        );
    }

    #[test]
    fn test_rejects_unsorted_anchor_with_original_index() {
        assert_eq!(
            HueCurve::new(&[0.0, 200.0, 100.0], &[1.0, 1.0, 1.0]).unwrap_err(),
            CurveError::NonIncreasing { index: 2 }
        );
    }

    #[test]
    fn test_hits_anchor_values() {
        let curve = HueCurve::new(&[30.0, 150.0, 270.0], &[0.8, 1.2, 1.0]).unwrap();
        assert!((curve.evaluate(30.0) - 0.8).abs() < 1e-12);
        assert!((curve.evaluate(150.0) - 1.2).abs() < 1e-12);
        assert!((curve.evaluate(270.0) - 1.0).abs() < 1e-12);
        assert!((curve.evaluate(390.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_continuous_through_wrap_point() {
        let curve = HueCurve::new(&[10.0, 120.0, 240.0, 350.0], &[1.2, 0.9, 1.1, 1.2]).unwrap();
        let below = curve.evaluate(359.999);
        let above = curve.evaluate(0.001);
        assert!((below - above).abs() < 1e-4, "{below} vs {above}");
    }

    #[test]
    fn test_saturation_multiplier_cannot_exceed_one() {
        let advanced = AdvancedCurve {
            saturation: Some(HueCurve::new(&[0.0], &[10.0]).unwrap()),
            ..AdvancedCurve::default()
        };
        let out = advanced.apply_pixel(LinearRgb::new(0.8, 0.4, 0.4));
        let hsv = Hsv::from_rgb(out);
        assert!(hsv.s <= 1.0 + 1e-6);
        assert!((hsv.s - 1.0).abs() < 1e-5);
        assert!(out.channels().iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_value_multiplier_is_bounded() {
        let advanced = AdvancedCurve {
            value: Some(HueCurve::new(&[0.0], &[4.0]).unwrap()),
            ..AdvancedCurve::default()
        };
        let out = advanced.apply_pixel(LinearRgb::new(0.5, 0.25, 0.25));
        assert!((out.r - 1.0).abs() < 1e-5);
        assert!((out.g - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_hue_shift_wraps() {
        let advanced = AdvancedCurve {
            hue_shift: Some(HueCurve::new(&[0.0], &[-30.0]).unwrap()),
            ..AdvancedCurve::default()
        };
        // Pure red (0°) shifted by -30° lands on 330°
        let out = advanced.apply_pixel(LinearRgb::new(1.0, 0.0, 0.0));
        let hsv = Hsv::from_rgb(out);
        assert!((hsv.h - 330.0).abs() < 1e-3, "hue {}", hsv.h);
    }

    #[test]
    fn test_empty_advanced_curve_is_identity() {
        let advanced = AdvancedCurve::default();
        assert!(advanced.is_empty());
        let pixel = LinearRgb::new(0.3, 0.6, 0.1);
        let out = advanced.apply_pixel(pixel);
        for (a, b) in out.channels().iter().zip(pixel.channels()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
