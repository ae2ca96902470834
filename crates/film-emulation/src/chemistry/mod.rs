//! Photochemical effects.
//!
//! [`emulsion`] stages run in linear light between the tone curves' input
//! and output; [`print`] stages run on the display-encoded result.

pub mod emulsion;
pub mod print;

pub use emulsion::{
    apply_color_bleed, apply_highlight_rolloff, apply_shadow_tint, SHADOW_TINT_STRENGTH,
};
pub use print::{
    apply_base_color, apply_color_temperature, apply_cross_process, apply_light_leak,
    apply_random_light_leak, temperature_multipliers, LeakSpot,
};
