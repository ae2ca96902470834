//! Lateral chromatic aberration as a uniform red/blue channel offset.

use crate::color::Srgb;
use crate::raster::Raster;

/// Horizontal displacement in whole pixels.
///
/// Scales with the distance of the origin pixel from the (integer) image
/// center, relative to `width + height`.
pub fn aberration_offset(width: usize, height: usize, strength: f32) -> usize {
    let cx = (width / 2) as f32;
    let cy = (height / 2) as f32;
    let d = strength * cx.hypot(cy) / (width + height) as f32;
    if d > 0.0 {
        d.floor() as usize
    } else {
        0
    }
}

/// Red samples from `x + d`, blue from `x - d`, green stays. Samples outside
/// the frame are black. No-op when the offset rounds down to zero.
pub fn apply_chromatic_aberration(image: &mut Raster<Srgb>, strength: f32) {
    if !(strength > 0.0) {
        return;
    }
    let width = image.width();
    let d = aberration_offset(width, image.height(), strength);
    if d == 0 {
        return;
    }

    let source = image.clone();
    for (row_out, row_in) in image
        .pixels_mut()
        .chunks_exact_mut(width)
        .zip(source.rows())
    {
        for (x, pixel) in row_out.iter_mut().enumerate() {
            pixel.r = row_in.get(x + d).map_or(0.0, |p| p.r);
            pixel.b = x.checked_sub(d).map_or(0.0, |sx| row_in[sx].b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_scales_with_strength() {
        // hypot(50, 50) / 200 ~= 0.354 per unit of strength
        assert_eq!(aberration_offset(100, 100, 1.0), 0);
        assert_eq!(aberration_offset(100, 100, 10.0), 3);
        assert_eq!(aberration_offset(100, 100, 0.0), 0);
    }

    #[test]
    fn test_channels_shift_in_opposite_directions() {
        let bytes: Vec<u8> = (0..20u8).flat_map(|i| [i * 10, 100, i * 10]).collect();
        let mut image = Raster::<Srgb>::from_rgb8(20, 1, &bytes).unwrap();
        // hypot(10, 0) / 21 * 5 = 2.38 -> 2 px
        apply_chromatic_aberration(&mut image, 5.0);

        let out = image.to_rgb8();
        let px = |x: usize| [out[x * 3], out[x * 3 + 1], out[x * 3 + 2]];
        assert_eq!(px(5), [70, 100, 30]);
        // Edges fill with black
        assert_eq!(px(19)[0], 0);
        assert_eq!(px(0)[2], 0);
        assert_eq!(px(0)[1], 100);
    }

    #[test]
    fn test_dimensions_are_preserved() {
        let mut image = Raster::filled(7, 3, Srgb::WHITE).unwrap();
        apply_chromatic_aberration(&mut image, 50.0);
        assert_eq!((image.width(), image.height()), (7, 3));
    }
}
