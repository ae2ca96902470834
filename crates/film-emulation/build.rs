use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Number of entries in each transfer-function table.
const LUT_SIZE: usize = 4096;

/// IEC 61966-2-1 electro-optical transfer function: encoded sRGB to linear light
fn srgb_eotf(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_eotf`]: linear light to encoded sRGB
fn srgb_inverse_eotf(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn write_table(
    out: &mut impl Write,
    name: &str,
    doc: &str,
    transfer: fn(f64) -> f64,
) -> io::Result<()> {
    writeln!(out, "/// {doc}")?;
    writeln!(out, "pub static {name}: [f32; {LUT_SIZE}] = [")?;
    for i in 0..LUT_SIZE {
        let input = i as f64 / (LUT_SIZE - 1) as f64;
        if i > 0 && i % 8 == 0 {
            writeln!(out)?;
        }
        write!(out, "    {:.9},", transfer(input) as f32)?;
    }
    writeln!(out, "\n];\n")
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let dest_path = Path::new(&out_dir).join("transfer_lut.rs");
    let mut out = BufWriter::new(File::create(&dest_path)?);

    write_table(
        &mut out,
        "DISPLAY_TO_LINEAR",
        "sRGB EOTF table. Index: encoded value * 4095",
        srgb_eotf,
    )?;
    write_table(
        &mut out,
        "LINEAR_TO_DISPLAY",
        "Inverse sRGB EOTF table. Index: linear value * 4095",
        srgb_inverse_eotf,
    )?;
    out.flush()?;

    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
