#![allow(clippy::excessive_precision, clippy::needless_range_loop)]

//! film-emulation: analog film stock emulation for digital images
//!
//! A film profile (tone curves, grain, halation, vignette, base color and
//! friends) is applied to an sRGB raster through a fixed chain of stages
//! that follows where each effect happens physically: inside the emulsion,
//! in the lens, or on the print.
//!
//! # Quick Start
//!
//! The [`FilmEmulator`] builder is the primary entry point:
//!
//! ```
//! use film_emulation::{FilmEmulator, ProfileSet, Raster, Srgb};
//!
//! let json = r#"{
//!     "Soft Warm": {
//!         "color_curves": {
//!             "R": {"x": [0, 0.5, 1], "y": [0, 0.55, 1]},
//!             "G": {"x": [0, 1], "y": [0, 1]},
//!             "B": {"x": [0, 0.5, 1], "y": [0, 0.45, 1]}
//!         },
//!         "contrast": 1.1,
//!         "grain_amount": 0.05
//!     }
//! }"#;
//! let set = ProfileSet::from_json_str(json).unwrap();
//! let image = Raster::filled(8, 8, Srgb::from_u8(120, 120, 120)).unwrap();
//!
//! let outcomes = FilmEmulator::new().seed(42).emulate_set(&image, &set);
//! assert_eq!(outcomes.len(), 1);
//! assert_eq!(outcomes[0].id, "soft_warm");
//! assert!(outcomes[0].result.is_ok());
//! ```
//!
//! # Color Spaces
//!
//! - [`Srgb`]: display-encoded samples for input/output and for print,
//!   lens and scan stages
//! - [`LinearRgb`]: linear light for emulsion stages (halation, roll-off,
//!   curves, shadow tint, color bleed)
//!
//! Between the two halves the linear image is clipped to 0..=1 before it
//! is encoded, so emulsion overshoot never leaks into later stages.
//!
//! # Pipeline
//!
//! ```text
//! sRGB input
//!     |
//!     v
//! LinearRgb                (sRGB EOTF via LUT)
//!     |
//!     +-- halation          (squared highlight mask, Gaussian bloom, red-orange)
//!     +-- highlight roll-off
//!     +-- curves            (per channel and/or hue-indexed, by curve mode)
//!     +-- shadow tint
//!     +-- color bleed
//!     |
//!     v
//! Srgb                     (clip, inverse EOTF)
//!     |
//!     +-- contrast / saturation
//!     +-- grain             (two octaves of gradient noise, luma mask)
//!     +-- vignette
//!     +-- chromatic aberration / blur
//!     +-- base color / color temperature / cross-process / light leak
//!     |
//!     v
//! sRGB output
//! ```
//!
//! # Determinism
//!
//! Grain and light leaks draw from a [`rand::rngs::StdRng`]. With a seed,
//! each profile at position `i` of a batch uses `seed + i`, so parallel and
//! sequential batches produce identical images.

pub mod adjust;
pub mod api;
pub mod chemistry;
pub mod color;
pub mod curve;
pub mod grain;
pub mod optics;
pub mod pipeline;
pub mod profile;
pub mod raster;


pub use api::{EmulationError, FilmEmulator};
pub use color::{Hsv, LinearRgb, ParseColorError, Rgb, Srgb};
pub use curve::{AdvancedCurve, ColorCurves, CurveError, HueCurve, ToneCurve};
pub use pipeline::{run, run_batch, BatchOptions, Plan, ProfileOutcome};
pub use profile::{
    CurveMode, FilmProfile, ProfileEntry, ProfileError, ProfileRecord, ProfileSet,
    ProfileSetError, RunOverrides,
};
pub use raster::{Raster, RasterError};
