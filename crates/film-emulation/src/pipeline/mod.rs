//! Pipeline orchestration.
//!
//! A [`Plan`] lists every stage for one profile and run in the fixed
//! physical order:
//!
//! ```text
//! sRGB input
//!     |  to linear
//!     v
//! halation -> highlight roll-off -> curves -> shadow tint -> color bleed
//!     |  clip, to display
//!     v
//! contrast -> saturation -> grain -> vignette -> chromatic aberration
//!     -> blur -> base color -> color temperature -> cross-process
//!     -> light leak
//! ```
//!
//! Every stage is present in every plan; stages decide for themselves
//! whether their parameters make them a no-op.

mod batch;
mod stage;

pub use batch::{run_batch, BatchOptions, ProfileOutcome};
pub use stage::{DisplayStage, LinearStage};

use rand::Rng;

use crate::api::EmulationError;
use crate::chemistry::SHADOW_TINT_STRENGTH;
use crate::color::Srgb;
use crate::curve::{AdvancedCurve, ColorCurves};
use crate::profile::{CurveMode, FilmProfile, ProfileError, RunOverrides};
use crate::raster::Raster;

/// Pick the curve stages for `mode`.
///
/// - `Color`: color curves.
/// - `Advanced`: the advanced curve, or [`ProfileError::MissingAdvancedCurve`].
/// - `Both`: color curves, then the advanced curve, each if present.
/// - `Auto`: the advanced curve if present, else color curves.
///
/// An empty selection is [`ProfileError::NoCurves`].
pub fn select_curves<'a>(
    color: Option<&'a ColorCurves>,
    advanced: Option<&'a AdvancedCurve>,
    mode: CurveMode,
) -> Result<Vec<LinearStage<'a>>, ProfileError> {
    let stages: Vec<LinearStage<'a>> = match mode {
        CurveMode::Color => color.map(LinearStage::ColorCurves).into_iter().collect(),
        CurveMode::Advanced => {
            let advanced = advanced.ok_or(ProfileError::MissingAdvancedCurve)?;
            vec![LinearStage::AdvancedCurve(advanced)]
        }
        CurveMode::Both => color
            .map(LinearStage::ColorCurves)
            .into_iter()
            .chain(advanced.map(LinearStage::AdvancedCurve))
            .collect(),
        CurveMode::Auto => advanced
            .map(LinearStage::AdvancedCurve)
            .or_else(|| color.map(LinearStage::ColorCurves))
            .into_iter()
            .collect(),
    };
    if stages.is_empty() {
        return Err(ProfileError::NoCurves);
    }
    Ok(stages)
}

/// The ordered stage list for one profile under one set of overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan<'a> {
    linear: Vec<LinearStage<'a>>,
    display: Vec<DisplayStage>,
}

impl<'a> Plan<'a> {
    /// Resolve overrides against `profile` and lay out the stages.
    pub fn new(profile: &'a FilmProfile, overrides: &RunOverrides) -> Result<Self, ProfileError> {
        let curves = select_curves(
            Some(&profile.color_curves),
            profile.advanced_curve.as_ref(),
            overrides.curve_mode,
        )?;

        let mut linear = vec![
            LinearStage::Halation {
                strength: profile.halation_strength,
                threshold: profile.halation_threshold,
            },
            LinearStage::HighlightRolloff {
                strength: profile.highlight_rolloff,
            },
        ];
        linear.extend(curves);
        linear.push(LinearStage::ShadowTint {
            tint: profile.shadow_tint,
            strength: SHADOW_TINT_STRENGTH,
        });
        linear.push(LinearStage::ColorBleed {
            strength: profile.color_bleed,
        });

        let display = vec![
            DisplayStage::Contrast {
                factor: profile.contrast,
            },
            DisplayStage::Saturation {
                factor: profile.saturation,
            },
            DisplayStage::Grain {
                amount: profile.grain_amount,
                size: profile.grain_size,
            },
            DisplayStage::Vignette {
                strength: profile.vignette_strength,
            },
            DisplayStage::ChromaticAberration {
                strength: overrides.chroma.unwrap_or(profile.chromatic_aberration),
            },
            DisplayStage::Blur {
                radius: overrides.blur.unwrap_or(profile.blur),
            },
            DisplayStage::BaseColor {
                color: profile.base_color,
            },
            DisplayStage::ColorTemperature {
                kelvin: overrides.color_temp,
            },
            DisplayStage::CrossProcess {
                enabled: overrides.cross_process,
            },
            DisplayStage::LightLeak {
                enabled: overrides.light_leak,
            },
        ];

        Ok(Self { linear, display })
    }

    pub fn linear_stages(&self) -> &[LinearStage<'a>] {
        &self.linear
    }

    pub fn display_stages(&self) -> &[DisplayStage] {
        &self.display
    }

    /// Run every stage on a copy of `image`.
    pub fn execute<R: Rng + ?Sized>(&self, image: &Raster<Srgb>, rng: &mut R) -> Raster<Srgb> {
        let mut linear = image.to_linear();
        for stage in &self.linear {
            tracing::debug!(stage = stage.name(), ?stage, "Linear stage");
            stage.apply(&mut linear);
        }

        let mut display = linear.to_display();
        for stage in &self.display {
            tracing::debug!(stage = stage.name(), ?stage, "Display stage");
            stage.apply(&mut display, rng);
        }
        display
    }
}

fn check_override(profile: &str, what: &str, value: Option<f32>) -> Result<(), EmulationError> {
    match value {
        Some(v) if !v.is_finite() => Err(EmulationError::NumericDomain {
            profile: profile.to_string(),
            reason: format!("{what} override is not a finite number"),
        }),
        _ => Ok(()),
    }
}

/// Apply `profile` to `image` under `overrides`.
///
/// The input is never modified; the result is a new raster with the same
/// dimensions.
///
/// # Example
///
/// ```
/// use film_emulation::{run, FilmProfile, Raster, RunOverrides, Srgb};
/// use rand::SeedableRng;
///
/// let image = Raster::filled(4, 4, Srgb::from_u8(128, 128, 128)).unwrap();
/// let profile = FilmProfile::neutral("Neutral");
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let out = run(&image, &profile, &RunOverrides::default(), &mut rng).unwrap();
/// assert_eq!(out.to_rgb8(), image.to_rgb8());
/// ```
pub fn run<R: Rng + ?Sized>(
    image: &Raster<Srgb>,
    profile: &FilmProfile,
    overrides: &RunOverrides,
    rng: &mut R,
) -> Result<Raster<Srgb>, EmulationError> {
    check_override(&profile.name, "chroma", overrides.chroma)?;
    check_override(&profile.name, "blur", overrides.blur)?;
    check_override(&profile.name, "color temperature", Some(overrides.color_temp))?;

    let plan = Plan::new(profile, overrides).map_err(|source| EmulationError::Configuration {
        profile: profile.name.clone(),
        source,
    })?;
    Ok(plan.execute(image, rng))
}
