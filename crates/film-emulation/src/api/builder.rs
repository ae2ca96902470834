//! FilmEmulator builder -- the primary ergonomic entry point for the crate.
//!
//! [`FilmEmulator`] holds run overrides and batch scheduling so one
//! configured emulator can be applied to many images and profile sets.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::EmulationError;
use crate::color::Srgb;
use crate::pipeline::{run, run_batch, BatchOptions, ProfileOutcome};
use crate::profile::{CurveMode, FilmProfile, ProfileSet, RunOverrides};
use crate::raster::Raster;

/// High-level film emulation builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`emulate()`](Self::emulate) and [`emulate_set()`](Self::emulate_set)
///   take `&self` so the builder is **reusable** across images
/// - With a [`seed()`](Self::seed), output is reproducible, including in
///   parallel batches
///
/// # Example
///
/// ```
/// use film_emulation::{FilmEmulator, FilmProfile, Raster, Srgb};
///
/// let mut profile = FilmProfile::neutral("Warm");
/// profile.base_color = Srgb::from_u8(255, 230, 200);
///
/// let emulator = FilmEmulator::new().color_temp(7000.0).seed(7);
/// let image = Raster::filled(4, 4, Srgb::from_u8(128, 128, 128)).unwrap();
/// let out = emulator.emulate(&image, &profile).unwrap();
///
/// assert_eq!(out.width(), 4);
/// assert!(out.get(0, 0).r > out.get(0, 0).b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilmEmulator {
    overrides: RunOverrides,
    batch: BatchOptions,
}

impl FilmEmulator {
    /// Neutral overrides (6500K, auto curve mode), sequential batches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing overrides.
    pub fn with_overrides(overrides: RunOverrides) -> Self {
        Self {
            overrides,
            batch: BatchOptions::default(),
        }
    }

    /// Override every profile's chromatic aberration strength.
    #[inline]
    pub fn chroma(mut self, strength: f32) -> Self {
        self.overrides = self.overrides.chroma(strength);
        self
    }

    /// Override every profile's blur radius.
    #[inline]
    pub fn blur(mut self, radius: f32) -> Self {
        self.overrides = self.overrides.blur(radius);
        self
    }

    /// Set the color temperature in Kelvin.
    #[inline]
    pub fn color_temp(mut self, kelvin: f32) -> Self {
        self.overrides = self.overrides.color_temp(kelvin);
        self
    }

    #[inline]
    pub fn cross_process(mut self, enabled: bool) -> Self {
        self.overrides = self.overrides.cross_process(enabled);
        self
    }

    #[inline]
    pub fn curve_mode(mut self, mode: CurveMode) -> Self {
        self.overrides = self.overrides.curve_mode(mode);
        self
    }

    #[inline]
    pub fn light_leak(mut self, enabled: bool) -> Self {
        self.overrides = self.overrides.light_leak(enabled);
        self
    }

    /// Seed grain and light leaks for reproducible output.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.overrides = self.overrides.seed(seed);
        self
    }

    /// Run profiles of a set concurrently.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.batch.parallel = enabled;
        self
    }

    /// Use a dedicated pool of `jobs` workers for parallel batches.
    #[inline]
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.batch.jobs = Some(jobs);
        self
    }

    pub fn overrides(&self) -> &RunOverrides {
        &self.overrides
    }

    pub fn batch_options(&self) -> BatchOptions {
        self.batch
    }

    /// Apply one profile.
    pub fn emulate(
        &self,
        image: &Raster<Srgb>,
        profile: &FilmProfile,
    ) -> Result<Raster<Srgb>, EmulationError> {
        let mut rng = match self.overrides.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        run(image, profile, &self.overrides, &mut rng)
    }

    /// Apply every profile of `set`, in set order.
    pub fn emulate_set(&self, image: &Raster<Srgb>, set: &ProfileSet) -> Vec<ProfileOutcome> {
        run_batch(image, set, &self.overrides, self.batch)
    }
}
