//! Profile loading and validation errors.

use crate::curve::CurveError;

/// A profile that cannot be run as written.
///
/// Stored per entry in a [`ProfileSet`](super::ProfileSet), so one bad
/// profile never prevents the others from loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// The profile record does not match the expected shape.
    #[error("malformed profile: {0}")]
    Parse(String),

    /// A curve's control points are unusable.
    #[error("invalid {curve} curve: {source}")]
    Curve {
        curve: &'static str,
        #[source]
        source: CurveError,
    },

    /// A parameter is out of range.
    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Advanced curve mode was requested but the profile has no advanced curve.
    #[error("advanced curve mode requested but the profile defines no advanced curve")]
    MissingAdvancedCurve,

    /// No curve set is available for the requested mode.
    #[error("no curves available for the requested curve mode")]
    NoCurves,
}

/// Failure to read a profile set as a whole.
#[derive(Debug, thiserror::Error)]
pub enum ProfileSetError {
    #[error("failed to read profile set: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile set is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile set must be a JSON object mapping names to profiles")]
    NotAnObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_profile_error_display() {
        let err = ProfileError::InvalidParameter {
            field: "contrast",
            reason: "must be greater than 0, got -1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid contrast: must be greater than 0, got -1"
        );

        let err = ProfileError::Curve {
            curve: "R",
            source: CurveError::TooFewPoints { count: 1 },
        };
        assert_eq!(
            err.to_string(),
            "invalid R curve: curve needs at least 2 control points, got 1"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_profile_set_error_display() {
        assert_eq!(
            ProfileSetError::NotAnObject.to_string(),
            "profile set must be a JSON object mapping names to profiles"
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            ProfileSetError::from(io).to_string(),
            "failed to read profile set: gone"
        );
    }
}
