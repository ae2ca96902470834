//! Unified error type for a pipeline run.
//!
//! [`EmulationError`] carries the name of the profile that failed so a batch
//! can report failures without extra bookkeeping.

use crate::profile::ProfileError;
use crate::raster::RasterError;

/// Why one profile's run failed.
///
/// # Example
///
/// ```
/// use film_emulation::{EmulationError, ProfileError};
///
/// let err = EmulationError::Configuration {
///     profile: "Velvia".into(),
///     source: ProfileError::MissingAdvancedCurve,
/// };
/// assert!(err.to_string().starts_with("profile \"Velvia\""));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmulationError {
    /// The profile is malformed or cannot satisfy the requested curve mode.
    #[error("profile {profile:?} is misconfigured: {source}")]
    Configuration {
        profile: String,
        #[source]
        source: ProfileError,
    },

    /// A parameter or image property makes a stage numerically undefined.
    #[error("profile {profile:?} cannot be applied: {reason}")]
    NumericDomain { profile: String, reason: String },

    /// The input raster is unusable.
    #[error("invalid image: {0}")]
    Raster(#[from] RasterError),
}

impl EmulationError {
    /// Name of the failing profile, if the error is tied to one.
    pub fn profile(&self) -> Option<&str> {
        match self {
            EmulationError::Configuration { profile, .. }
            | EmulationError::NumericDomain { profile, .. } => Some(profile),
            EmulationError::Raster(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = EmulationError::Configuration {
            profile: "Portra 400".into(),
            source: ProfileError::NoCurves,
        };
        assert_eq!(
            err.to_string(),
            "profile \"Portra 400\" is misconfigured: no curves available for the requested curve mode"
        );
        assert!(err.source().is_some());
        assert_eq!(err.profile(), Some("Portra 400"));

        let err = EmulationError::NumericDomain {
            profile: "Tri-X".into(),
            reason: "color temperature is not finite".into(),
        };
        assert_eq!(
            err.to_string(),
            "profile \"Tri-X\" cannot be applied: color temperature is not finite"
        );
    }

    #[test]
    fn test_from_raster_error() {
        let err: EmulationError = RasterError::EmptyDimensions {
            width: 0,
            height: 3,
        }
        .into();
        assert_eq!(err.to_string(), "invalid image: image dimensions 0x3 are empty");
        assert_eq!(err.profile(), None);
    }
}
