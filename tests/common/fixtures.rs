//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use film_emulation::{Raster, Srgb};

/// Profile set names used by the fixtures below
pub mod names {
    pub const WARM: &str = "Warm Stock";
    pub const BROKEN: &str = "Broken Stock";
    pub const GRAINY: &str = "Grainy";
}

const IDENTITY: &str = r#"{"x": [0, 1], "y": [0, 1]}"#;

/// Two valid profiles around one whose red curve is not increasing
pub fn mixed_profile_json() -> String {
    format!(
        r##"{{
            "{warm}": {{
                "color_curves": {{"R": {{"x": [0, 0.5, 1], "y": [0, 0.6, 1]}}, "G": {IDENTITY}, "B": {IDENTITY}}},
                "base_color": "#fff0e0"
            }},
            "{broken}": {{
                "color_curves": {{"R": {{"x": [0, 0.6, 0.4, 1], "y": [0, 0.5, 0.5, 1]}}, "G": {IDENTITY}, "B": {IDENTITY}}}
            }},
            "{grainy}": {{
                "color_curves": {{"R": {IDENTITY}, "G": {IDENTITY}, "B": {IDENTITY}}},
                "grain_amount": 0.2,
                "grain_size": 2
            }}
        }}"##,
        warm = names::WARM,
        broken = names::BROKEN,
        grainy = names::GRAINY,
    )
}

/// Horizontal gray ramp with a colored band
pub fn gradient(width: usize, height: usize) -> Raster<Srgb> {
    let mut bytes = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            if y < height / 3 {
                bytes.extend_from_slice(&[v, 40, 255 - v]);
            } else {
                bytes.extend_from_slice(&[v, v, v]);
            }
        }
    }
    Raster::from_rgb8(width, height, &bytes).unwrap()
}

/// Write `raster` as a PNG under `dir` and return its path
pub fn write_png(dir: &Path, name: &str, raster: &Raster<Srgb>) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_raw(raster.width() as u32, raster.height() as u32, raster.to_rgb8())
        .unwrap()
        .save(&path)
        .unwrap();
    path
}

/// Write `json` to `dir/profiles.json` and return its path
pub fn write_profiles(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("profiles.json");
    std::fs::write(&path, json).unwrap();
    path
}
