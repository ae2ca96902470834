//! Validated film profile.

use crate::color::Srgb;
use crate::curve::{
    check_unit_domain, AdvancedCurve, ColorCurves, CurveError, HueCurve, ToneCurve,
};

use super::error::ProfileError;
use super::record::{
    AdvancedCurveRecord, ColorCurvesRecord, ColorLiteral, CurveRecord, ProfileRecord,
};

/// One film stock's parameters, validated and with defaults resolved.
///
/// Fields left at their defaults make their stage an exact no-op:
/// identity curves, `contrast`/`saturation` 1.0, white `base_color`, black
/// `shadow_tint` and zero for every strength.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmProfile {
    pub name: String,
    pub color_curves: ColorCurves,
    pub advanced_curve: Option<AdvancedCurve>,
    pub contrast: f32,
    pub saturation: f32,
    pub chromatic_aberration: f32,
    pub blur: f32,
    pub base_color: Srgb,
    pub grain_amount: f32,
    pub grain_size: u32,
    pub halation_strength: f32,
    pub halation_threshold: f32,
    pub vignette_strength: f32,
    /// Shadow tint per channel in 0.0..=1.0.
    pub shadow_tint: [f32; 3],
    pub highlight_rolloff: f32,
    pub color_bleed: f32,
}

impl FilmProfile {
    /// A profile whose every stage is a no-op.
    pub fn neutral(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_curves: ColorCurves::identity(),
            advanced_curve: None,
            contrast: 1.0,
            saturation: 1.0,
            chromatic_aberration: 0.0,
            blur: 0.0,
            base_color: Srgb::WHITE,
            grain_amount: 0.0,
            grain_size: 1,
            halation_strength: 0.0,
            halation_threshold: 0.7,
            vignette_strength: 0.0,
            shadow_tint: [0.0; 3],
            highlight_rolloff: 0.0,
            color_bleed: 0.0,
        }
    }

    /// Stable identifier: lower-cased name with spaces replaced by `_`.
    ///
    /// ```
    /// use film_emulation::FilmProfile;
    /// assert_eq!(FilmProfile::neutral("Kodak Portra 400").id(), "kodak_portra_400");
    /// ```
    pub fn id(&self) -> String {
        profile_id(&self.name)
    }

    /// Validate a deserialized record.
    pub fn from_record(name: &str, record: &ProfileRecord) -> Result<Self, ProfileError> {
        let color_curves = build_color_curves(&record.color_curves)?;
        let advanced_curve = record
            .advanced_curve
            .as_ref()
            .map(build_advanced_curve)
            .transpose()?;

        let contrast = positive("contrast", record.contrast)?;
        let saturation = non_negative("saturation", record.saturation)?;
        let chromatic_aberration =
            non_negative("chromatic_aberration", record.chromatic_aberration)?;
        let blur = non_negative("blur", record.blur)?;
        let grain_amount = in_range("grain_amount", record.grain_amount, 0.0, 1.0)?;
        if record.grain_size < 1 || record.grain_size > u32::MAX as i64 {
            return Err(ProfileError::InvalidParameter {
                field: "grain_size",
                reason: format!("must be at least 1, got {}", record.grain_size),
            });
        }
        let halation_strength = non_negative("halation_strength", record.halation_strength)?;
        let halation_threshold = finite("halation_threshold", record.halation_threshold)?;
        if !(0.0..1.0).contains(&halation_threshold) {
            return Err(ProfileError::InvalidParameter {
                field: "halation_threshold",
                reason: format!("must be in [0, 1), got {halation_threshold}"),
            });
        }
        let vignette_strength = non_negative("vignette_strength", record.vignette_strength)?;
        let highlight_rolloff = in_range("highlight_rolloff", record.highlight_rolloff, 0.0, 1.0)?;
        let color_bleed = non_negative("color_bleed", record.color_bleed)?;

        let base_color = match &record.base_color {
            Some(literal) => Srgb::from_bytes(color_bytes("base_color", literal)?),
            None => Srgb::WHITE,
        };
        let shadow_tint = match &record.shadow_tint {
            Some(literal) => color_bytes("shadow_tint", literal)?.map(|c| c as f32 / 255.0),
            None => [0.0; 3],
        };

        Ok(Self {
            name: name.to_string(),
            color_curves,
            advanced_curve,
            contrast,
            saturation,
            chromatic_aberration,
            blur,
            base_color,
            grain_amount,
            grain_size: record.grain_size as u32,
            halation_strength,
            halation_threshold,
            vignette_strength,
            shadow_tint,
            highlight_rolloff,
            color_bleed,
        })
    }
}

/// Lower-case `name` and replace spaces with underscores.
pub fn profile_id(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

fn build_tone_curve(
    curve: &'static str,
    record: &CurveRecord,
) -> Result<ToneCurve, ProfileError> {
    let wrap = |source: CurveError| ProfileError::Curve { curve, source };
    if record.x.len() != record.y.len() {
        return Err(wrap(CurveError::LengthMismatch {
            x: record.x.len(),
            y: record.y.len(),
        }));
    }
    check_unit_domain(&record.x).map_err(wrap)?;
    check_unit_domain(&record.y).map_err(wrap)?;
    ToneCurve::new(&record.x, &record.y).map_err(wrap)
}

fn build_color_curves(record: &ColorCurvesRecord) -> Result<ColorCurves, ProfileError> {
    Ok(ColorCurves {
        red: build_tone_curve("R", &record.red)?,
        green: build_tone_curve("G", &record.green)?,
        blue: build_tone_curve("B", &record.blue)?,
    })
}

fn build_advanced_curve(record: &AdvancedCurveRecord) -> Result<AdvancedCurve, ProfileError> {
    let hue_curve = |curve: &'static str, values: &Option<Vec<f64>>| {
        values
            .as_ref()
            .map(|values| {
                HueCurve::new(&record.hue, values)
                    .map_err(|source| ProfileError::Curve { curve, source })
            })
            .transpose()
    };
    let advanced = AdvancedCurve {
        saturation: hue_curve("saturation", &record.saturation)?,
        hue_shift: hue_curve("hue_shift", &record.hue_shift)?,
        value: hue_curve("value", &record.value)?,
    };
    if advanced.is_empty() {
        return Err(ProfileError::InvalidParameter {
            field: "advanced_curve",
            reason: "needs at least one of saturation, hue_shift or value".to_string(),
        });
    }
    Ok(advanced)
}

fn color_bytes(field: &'static str, literal: &ColorLiteral) -> Result<[u8; 3], ProfileError> {
    literal
        .to_bytes()
        .map_err(|reason| ProfileError::InvalidParameter { field, reason })
}

fn finite(field: &'static str, value: f64) -> Result<f32, ProfileError> {
    if value.is_finite() {
        Ok(value as f32)
    } else {
        Err(ProfileError::InvalidParameter {
            field,
            reason: format!("must be a finite number, got {value}"),
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f32, ProfileError> {
    let v = finite(field, value)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ProfileError::InvalidParameter {
            field,
            reason: format!("must be greater than 0, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f32, ProfileError> {
    let v = finite(field, value)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(ProfileError::InvalidParameter {
            field,
            reason: format!("must not be negative, got {value}"),
        })
    }
}

fn in_range(field: &'static str, value: f64, lo: f64, hi: f64) -> Result<f32, ProfileError> {
    let v = finite(field, value)?;
    if (lo..=hi).contains(&value) {
        Ok(v)
    } else {
        Err(ProfileError::InvalidParameter {
            field,
            reason: format!("must be in [{lo}, {hi}], got {value}"),
        })
    }
}
