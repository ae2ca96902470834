use std::path::PathBuf;

use film_emulation::{ProfileSetError, RasterError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Profile set error: {0}")]
    ProfileSet(#[from] ProfileSetError),

    #[error("Image error: {0}")]
    Raster(#[from] RasterError),

    #[error("Invalid JPEG quality {0} (expected 1-100)")]
    InvalidQuality(u8),

    #[error("No profiles to run{}", unknown_suffix(.0))]
    NoProfiles(Vec<String>),

    #[error("All {0} profiles failed")]
    AllProfilesFailed(usize),
}

fn unknown_suffix(names: &[String]) -> String {
    if names.is_empty() {
        String::new()
    } else {
        format!(" (unknown: {})", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_invalid_quality() {
        let error = AppError::InvalidQuality(0);
        assert_eq!(error.to_string(), "Invalid JPEG quality 0 (expected 1-100)");
    }

    #[test]
    fn test_app_error_io() {
        let error = AppError::Io {
            path: PathBuf::from("out/a.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "IO error on out/a.jpg: denied");
    }

    #[test]
    fn test_app_error_no_profiles() {
        assert_eq!(AppError::NoProfiles(vec![]).to_string(), "No profiles to run");
        assert_eq!(
            AppError::NoProfiles(vec!["Kodak".into(), "Agfa".into()]).to_string(),
            "No profiles to run (unknown: Kodak, Agfa)"
        );
    }

    #[test]
    fn test_app_error_all_failed() {
        assert_eq!(AppError::AllProfilesFailed(3).to_string(), "All 3 profiles failed");
    }

    #[test]
    fn test_app_error_from_raster_error() {
        let raster_error = RasterError::EmptyDimensions { width: 0, height: 4 };
        let app_error: AppError = raster_error.into();
        match app_error {
            AppError::Raster(_) => {}
            _ => panic!("Expected Raster variant"),
        }
    }

    #[test]
    fn test_app_error_from_profile_set_error() {
        let app_error: AppError = ProfileSetError::NotAnObject.into();
        assert!(app_error.to_string().starts_with("Profile set error: "));
    }
}
