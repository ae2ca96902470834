//! Run every profile of a set against one image.
//!
//! Profile runs share nothing but the read-only input and profile set, so
//! they map onto a rayon parallel iterator with no locking. Results come
//! back in set order regardless of scheduling.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::run;
use crate::api::EmulationError;
use crate::color::Srgb;
use crate::profile::{profile_id, ProfileEntry, ProfileSet, RunOverrides};
use crate::raster::Raster;

/// How a batch is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOptions {
    /// Run profiles concurrently.
    pub parallel: bool,
    /// Worker count for parallel runs; rayon's global pool when `None`.
    pub jobs: Option<usize>,
}

impl BatchOptions {
    pub fn sequential() -> Self {
        Self::default()
    }

    pub fn parallel() -> Self {
        Self {
            parallel: true,
            jobs: None,
        }
    }

    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }
}

/// The result of one profile in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOutcome {
    pub name: String,
    pub id: String,
    pub result: Result<Raster<Srgb>, EmulationError>,
}

/// Random source for the profile at `index`.
///
/// With a batch seed each profile gets `seed + index`, so output does not
/// depend on which worker runs which profile.
fn profile_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    }
}

fn run_entry(
    image: &Raster<Srgb>,
    index: usize,
    entry: &ProfileEntry,
    overrides: &RunOverrides,
) -> ProfileOutcome {
    let result = match &entry.profile {
        Ok(profile) => {
            let mut rng = profile_rng(overrides.seed, index);
            run(image, profile, overrides, &mut rng)
        }
        Err(err) => Err(EmulationError::Configuration {
            profile: entry.name.clone(),
            source: err.clone(),
        }),
    };
    match &result {
        Ok(_) => tracing::debug!(profile = %entry.name, "Profile finished"),
        Err(err) => tracing::debug!(profile = %entry.name, error = %err, "Profile failed"),
    }
    ProfileOutcome {
        name: entry.name.clone(),
        id: profile_id(&entry.name),
        result,
    }
}

fn run_parallel(
    image: &Raster<Srgb>,
    entries: &[ProfileEntry],
    overrides: &RunOverrides,
) -> Vec<ProfileOutcome> {
    entries
        .par_iter()
        .enumerate()
        .map(|(i, entry)| run_entry(image, i, entry, overrides))
        .collect()
}

/// Apply every profile in `set` to `image`, one outcome per entry in set
/// order. A failing profile never affects the others.
pub fn run_batch(
    image: &Raster<Srgb>,
    set: &ProfileSet,
    overrides: &RunOverrides,
    options: BatchOptions,
) -> Vec<ProfileOutcome> {
    let entries = set.entries();
    if !options.parallel || entries.len() < 2 {
        return entries
            .iter()
            .enumerate()
            .map(|(i, entry)| run_entry(image, i, entry, overrides))
            .collect();
    }

    match options.jobs {
        Some(jobs) => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(|| run_parallel(image, entries, overrides)),
            Err(err) => {
                tracing::warn!(
                    jobs,
                    error = %err,
                    "Failed to build worker pool, using the global pool"
                );
                run_parallel(image, entries, overrides)
            }
        },
        None => run_parallel(image, entries, overrides),
    }
}
