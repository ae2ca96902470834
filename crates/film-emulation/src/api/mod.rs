//! Entry point for callers that just want film out of a photo.
//!
//! [`FilmEmulator`] collects run overrides and batch options, then applies
//! one profile or a whole [`ProfileSet`](crate::ProfileSet). Every failure
//! surfaces as an [`EmulationError`] naming the profile involved.

mod builder;
mod error;

pub use builder::FilmEmulator;
pub use error::EmulationError;
