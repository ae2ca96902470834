//! Filmsim - analog film emulation for digital photographs
//!
//! Command line front end for the `film-emulation` crate.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
