//! Applying a profile set to one photograph and writing the results.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use film_emulation::{EmulationError, FilmEmulator, ProfileSet};

use super::image_io::{load_image, save_jpeg};
use super::output::{claim_path, output_path};
use crate::error::AppError;

/// One `apply` invocation.
#[derive(Debug, Clone)]
pub struct ApplyJob {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub quality: u8,
    /// Restrict the run to these profile names or ids. Empty runs all.
    pub only: Vec<String>,
}

impl ApplyJob {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            quality: 95,
            only: Vec::new(),
        }
    }

    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn only(mut self, names: Vec<String>) -> Self {
        self.only = names;
        self
    }
}

/// What a run produced, in profile-set order.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Profile name and the file written for it.
    pub written: Vec<(String, PathBuf)>,
    /// Profile name and why it failed.
    pub failed: Vec<(String, EmulationError)>,
    /// Profile name and why its emulated image could not be written.
    pub failed_writes: Vec<(String, AppError)>,
    /// `--only` names that matched no profile.
    pub unmatched: Vec<String>,
}

/// Runs a [`FilmEmulator`] over a profile set for one input image.
#[derive(Debug, Clone, Default)]
pub struct EmulationService {
    emulator: FilmEmulator,
}

impl EmulationService {
    pub fn new(emulator: FilmEmulator) -> Self {
        Self { emulator }
    }

    pub fn emulator(&self) -> &FilmEmulator {
        &self.emulator
    }

    /// Emulate every selected profile and write one JPEG per success.
    ///
    /// Failed profiles and failed writes are logged and reported but do not
    /// stop the others.
    /// Returns an error when nothing could be written.
    pub fn apply(&self, job: &ApplyJob, mut set: ProfileSet) -> Result<ApplyReport, AppError> {
        if !(1..=100).contains(&job.quality) {
            return Err(AppError::InvalidQuality(job.quality));
        }

        let mut report = ApplyReport::default();
        if !job.only.is_empty() {
            report.unmatched = set.retain_named(&job.only);
            for name in &report.unmatched {
                tracing::warn!(profile = %name, "No profile with this name");
            }
        }
        if set.is_empty() {
            return Err(AppError::NoProfiles(report.unmatched));
        }

        let image = load_image(&job.input)?;
        tracing::info!(
            input = %job.input.display(),
            width = image.width(),
            height = image.height(),
            profiles = set.len(),
            "Emulating"
        );

        if let Some(ref dir) = job.output_dir {
            create_dir(dir)?;
        }

        let mut taken = HashSet::new();
        for outcome in self.emulator.emulate_set(&image, &set) {
            match outcome.result {
                Ok(result) => {
                    let wanted = output_path(&job.input, job.output_dir.as_deref(), &outcome.name);
                    let path = claim_path(wanted.clone(), &mut taken);
                    if path != wanted {
                        tracing::warn!(
                            profile = %outcome.name,
                            path = %path.display(),
                            "Output name already used in this run, writing with a suffix"
                        );
                    }
                    match save_jpeg(&result, &path, job.quality) {
                        Ok(()) => {
                            tracing::info!(profile = %outcome.name, path = %path.display(), "Wrote");
                            report.written.push((outcome.name, path));
                        }
                        Err(e) => {
                            tracing::warn!(profile = %outcome.name, error = %e, "Write failed");
                            report.failed_writes.push((outcome.name, e));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(profile = %outcome.name, error = %e, "Profile failed");
                    report.failed.push((outcome.name, e));
                }
            }
        }

        if report.written.is_empty() {
            return Err(AppError::AllProfilesFailed(
                report.failed.len() + report.failed_writes.len(),
            ));
        }
        Ok(report)
    }
}

fn create_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|source| AppError::Io {
        path: dir.to_path_buf(),
        source,
    })
}
