//! Stage descriptions: one enum variant per transform with its parameters.

use rand::Rng;

use crate::adjust::{apply_contrast, apply_saturation};
use crate::chemistry::{
    apply_base_color, apply_color_bleed, apply_color_temperature, apply_cross_process,
    apply_highlight_rolloff, apply_random_light_leak, apply_shadow_tint,
};
use crate::color::{LinearRgb, Srgb};
use crate::curve::{AdvancedCurve, ColorCurves};
use crate::grain::apply_grain;
use crate::optics::{apply_chromatic_aberration, apply_halation, apply_vignette, blur};
use crate::raster::Raster;

/// Stages that model light inside the emulsion. Run in linear light.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearStage<'a> {
    Halation { strength: f32, threshold: f32 },
    HighlightRolloff { strength: f32 },
    ColorCurves(&'a ColorCurves),
    AdvancedCurve(&'a AdvancedCurve),
    ShadowTint { tint: [f32; 3], strength: f32 },
    ColorBleed { strength: f32 },
}

impl LinearStage<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            LinearStage::Halation { .. } => "halation",
            LinearStage::HighlightRolloff { .. } => "highlight_rolloff",
            LinearStage::ColorCurves(_) => "color_curves",
            LinearStage::AdvancedCurve(_) => "advanced_curve",
            LinearStage::ShadowTint { .. } => "shadow_tint",
            LinearStage::ColorBleed { .. } => "color_bleed",
        }
    }

    /// Apply in place. Each stage guards its own no-op conditions.
    pub fn apply(&self, image: &mut Raster<LinearRgb>) {
        match *self {
            LinearStage::Halation {
                strength,
                threshold,
            } => apply_halation(image, strength, threshold),
            LinearStage::HighlightRolloff { strength } => apply_highlight_rolloff(image, strength),
            LinearStage::ColorCurves(curves) => {
                if !curves.is_identity() {
                    curves.apply(image);
                }
            }
            LinearStage::AdvancedCurve(curve) => curve.apply(image),
            LinearStage::ShadowTint { tint, strength } => apply_shadow_tint(image, tint, strength),
            LinearStage::ColorBleed { strength } => apply_color_bleed(image, strength),
        }
    }
}

/// Stages that model the print, the lens and the scan. Run on display sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayStage {
    Contrast { factor: f32 },
    Saturation { factor: f32 },
    Grain { amount: f32, size: u32 },
    Vignette { strength: f32 },
    ChromaticAberration { strength: f32 },
    Blur { radius: f32 },
    BaseColor { color: Srgb },
    ColorTemperature { kelvin: f32 },
    CrossProcess { enabled: bool },
    LightLeak { enabled: bool },
}

impl DisplayStage {
    pub fn name(&self) -> &'static str {
        match self {
            DisplayStage::Contrast { .. } => "contrast",
            DisplayStage::Saturation { .. } => "saturation",
            DisplayStage::Grain { .. } => "grain",
            DisplayStage::Vignette { .. } => "vignette",
            DisplayStage::ChromaticAberration { .. } => "chromatic_aberration",
            DisplayStage::Blur { .. } => "blur",
            DisplayStage::BaseColor { .. } => "base_color",
            DisplayStage::ColorTemperature { .. } => "color_temperature",
            DisplayStage::CrossProcess { .. } => "cross_process",
            DisplayStage::LightLeak { .. } => "light_leak",
        }
    }

    /// Apply in place, drawing randomness from `rng` where needed.
    pub fn apply<R: Rng + ?Sized>(&self, image: &mut Raster<Srgb>, rng: &mut R) {
        match *self {
            DisplayStage::Contrast { factor } => apply_contrast(image, factor),
            DisplayStage::Saturation { factor } => apply_saturation(image, factor),
            DisplayStage::Grain { amount, size } => apply_grain(image, amount, size, rng),
            DisplayStage::Vignette { strength } => apply_vignette(image, strength),
            DisplayStage::ChromaticAberration { strength } => {
                apply_chromatic_aberration(image, strength)
            }
            DisplayStage::Blur { radius } => blur(image, radius),
            DisplayStage::BaseColor { color } => apply_base_color(image, color),
            DisplayStage::ColorTemperature { kelvin } => apply_color_temperature(image, kelvin),
            DisplayStage::CrossProcess { enabled } => {
                if enabled {
                    apply_cross_process(image);
                }
            }
            DisplayStage::LightLeak { enabled } => {
                if enabled {
                    apply_random_light_leak(image, rng);
                }
            }
        }
    }
}
