//! Lens and film-base optics: halation, vignette, chromatic aberration and
//! Gaussian blur.

mod aberration;
mod gaussian;
mod halation;
mod vignette;

pub use aberration::{aberration_offset, apply_chromatic_aberration};
pub use gaussian::{blur, blur_plane};
pub use halation::{apply_halation, highlight_mask, HALATION_SIGMA_PER_STRENGTH, HALATION_TINT};
pub use vignette::{apply_vignette, vignette_mask, VIGNETTE_FLOOR};
