//! Decoding input photographs and encoding emulated results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use film_emulation::{Raster, Srgb};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageEncoder, ImageReader};

use crate::error::AppError;

/// Decode an image file into an sRGB raster.
///
/// The EXIF orientation reported by the decoder is applied first, so the
/// pipeline always sees the picture upright. Alpha is dropped.
pub fn load_image(path: &Path) -> Result<Raster<Srgb>, AppError> {
    let io_err = |source: std::io::Error| AppError::Io {
        path: path.to_path_buf(),
        source,
    };
    let decode_err = |source: image::ImageError| AppError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;
    let mut decoder = reader.into_decoder().map_err(decode_err)?;
    let orientation = decoder.orientation().map_err(decode_err)?;
    let mut image = DynamicImage::from_decoder(decoder).map_err(decode_err)?;
    image.apply_orientation(orientation);

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Decoded image");
    Ok(Raster::from_rgb8(
        width as usize,
        height as usize,
        rgb.as_raw(),
    )?)
}

/// Encode `image` as a baseline JPEG at `quality` (1-100).
pub fn save_jpeg(image: &Raster<Srgb>, path: &Path, quality: u8) -> Result<(), AppError> {
    if !(1..=100).contains(&quality) {
        return Err(AppError::InvalidQuality(quality));
    }
    let io_err = |source: std::io::Error| AppError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, quality)
        .write_image(
            &image.to_rgb8(),
            image.width() as u32,
            image.height() as u32,
            ExtendedColorType::Rgb8,
        )
        .map_err(|source| AppError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(io_err)
}
