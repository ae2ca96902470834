//! Display-space print and scan effects: base color, color temperature,
//! cross-processing and light leaks.

use rand::Rng;

use crate::adjust::{apply_contrast, apply_saturation};
use crate::color::{Rgb, Srgb};
use crate::raster::Raster;

/// Weight of the film base color in the final blend.
pub const BASE_COLOR_WEIGHT: f32 = 0.1;

/// Kelvin value at which temperature correction is neutral.
pub const NEUTRAL_TEMPERATURE: f32 = 6500.0;

/// Blend towards the film base color. White disables the stage.
pub fn apply_base_color(image: &mut Raster<Srgb>, base: Srgb) {
    if base == Srgb::WHITE {
        return;
    }
    let tint = base.channels();
    image.for_each_pixel(|p| {
        let [r, g, b] = p.channels();
        *p = Srgb::new(
            r + (tint[0] - r) * BASE_COLOR_WEIGHT,
            g + (tint[1] - g) * BASE_COLOR_WEIGHT,
            b + (tint[2] - b) * BASE_COLOR_WEIGHT,
        );
    });
}

/// Channel gains for a color temperature: red up and blue down by 1% per
/// 100K above neutral. Exactly `[1, 1, 1]` at 6500K.
pub fn temperature_multipliers(kelvin: f32) -> [f32; 3] {
    let shift = (kelvin - NEUTRAL_TEMPERATURE) / 100.0 * 0.01;
    [1.0 + shift, 1.0, 1.0 - shift]
}

/// Scale red and blue by [`temperature_multipliers`]. Skipped at neutral.
pub fn apply_color_temperature(image: &mut Raster<Srgb>, kelvin: f32) {
    let [mr, mg, mb] = temperature_multipliers(kelvin);
    if mr == 1.0 && mb == 1.0 {
        return;
    }
    image.for_each_pixel(|p| {
        *p = Srgb::new(
            (p.r * mr).clamp(0.0, 1.0),
            (p.g * mg).clamp(0.0, 1.0),
            (p.b * mb).clamp(0.0, 1.0),
        );
    });
}

/// Fixed cross-process grade: contrast 1.5, R×1.2 G×0.9 B×1.1, saturation 1.3.
pub fn apply_cross_process(image: &mut Raster<Srgb>) {
    apply_contrast(image, 1.5);
    image.for_each_pixel(|p| {
        *p = Srgb::new(
            (p.r * 1.2).clamp(0.0, 1.0),
            (p.g * 0.9).clamp(0.0, 1.0),
            (p.b * 1.1).clamp(0.0, 1.0),
        );
    });
    apply_saturation(image, 1.3);
}

/// One warm radial gradient of a light leak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakSpot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Srgb,
}

impl LeakSpot {
    /// Overlay contribution at `(x, y)`: `1 - d / radius` inside the radius.
    #[inline]
    fn falloff(&self, x: f32, y: f32) -> f32 {
        let d = (x - self.x).hypot(y - self.y);
        if d <= self.radius {
            1.0 - d / self.radius
        } else {
            0.0
        }
    }
}

/// Draw 1 to 3 leak spots for a `width` x `height` frame.
pub fn random_leak_spots<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
) -> Vec<LeakSpot> {
    let w = width as i64;
    let h = height as i64;
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-w / 2..=w) as f32;
            let y = rng.gen_range(-h / 2..=h) as f32;
            let radius = rng.gen_range(w / 4..=(1.5 * w as f64) as i64).max(1) as f32;
            let color = Srgb::from_u8(
                rng.gen_range(200..=255),
                rng.gen_range(50..=200),
                rng.gen_range(0..=100),
            );
            LeakSpot {
                x,
                y,
                radius,
                color,
            }
        })
        .collect()
}

/// Add the summed leak overlay at `weight`, then boost saturation by 1.2.
pub fn apply_light_leak(image: &mut Raster<Srgb>, spots: &[LeakSpot], weight: f32) {
    if spots.is_empty() || !(weight > 0.0) {
        return;
    }
    let width = image.width();
    for (i, pixel) in image.pixels_mut().iter_mut().enumerate() {
        let x = (i % width) as f32;
        let y = (i / width) as f32;
        let mut overlay = [0.0f32; 3];
        for spot in spots {
            let g = spot.falloff(x, y);
            if g > 0.0 {
                let c = spot.color.channels();
                for k in 0..3 {
                    overlay[k] += g * c[k];
                }
            }
        }
        *pixel = Srgb::new(
            (pixel.r + overlay[0].min(1.0) * weight).clamp(0.0, 1.0),
            (pixel.g + overlay[1].min(1.0) * weight).clamp(0.0, 1.0),
            (pixel.b + overlay[2].min(1.0) * weight).clamp(0.0, 1.0),
        );
    }
    apply_saturation(image, 1.2);
}

/// Draw spots and weight from `rng` and apply a light leak.
pub fn apply_random_light_leak<R: Rng + ?Sized>(image: &mut Raster<Srgb>, rng: &mut R) {
    let spots = random_leak_spots(rng, image.width(), image.height());
    let weight = rng.gen_range(0.3..=0.7);
    apply_light_leak(image, &spots, weight);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_white_base_is_noop() {
        let mut image = Raster::filled(2, 2, Srgb::new(0.2, 0.4, 0.6)).unwrap();
        let before = image.clone();
        apply_base_color(&mut image, Srgb::WHITE);
        assert_eq!(image, before);
    }

    #[test]
    fn test_base_color_blends_at_ten_percent() {
        let mut image = Raster::filled(1, 1, Srgb::new(1.0, 1.0, 1.0)).unwrap();
        apply_base_color(&mut image, Srgb::new(0.0, 0.5, 1.0));
        let p = image.get(0, 0);
        assert!((p.r - 0.9).abs() < 1e-6);
        assert!((p.g - 0.95).abs() < 1e-6);
        assert!((p.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_neutral_temperature_multipliers_are_exact() {
        assert_eq!(temperature_multipliers(6500.0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_warm_and_cool_temperatures() {
        let [r, g, b] = temperature_multipliers(7500.0);
        assert!((r - 1.1).abs() < 1e-6);
        assert_eq!(g, 1.0);
        assert!((b - 0.9).abs() < 1e-6);

        let [r, _, b] = temperature_multipliers(5500.0);
        assert!(r < 1.0 && b > 1.0);
    }

    #[test]
    fn test_temperature_clamps() {
        let mut image = Raster::filled(1, 1, Srgb::new(0.95, 0.5, 0.5)).unwrap();
        apply_color_temperature(&mut image, 9500.0);
        let p = image.get(0, 0);
        assert_eq!(p.r, 1.0);
        assert!((p.b - 0.35).abs() < 1e-5);
    }

    #[test]
    fn test_cross_process_warms_and_stays_in_range() {
        let bytes: Vec<u8> = (0..16u8).flat_map(|i| [i * 16, 128, 255 - i * 16]).collect();
        let mut image = Raster::<Srgb>::from_rgb8(4, 4, &bytes).unwrap();
        let before = image.clone();
        apply_cross_process(&mut image);
        assert_ne!(image, before);
        for p in image.pixels() {
            assert!(p.channels().iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_leak_spot_falloff() {
        let spot = LeakSpot {
            x: 0.0,
            y: 0.0,
            radius: 10.0,
            color: Srgb::WHITE,
        };
        assert_eq!(spot.falloff(0.0, 0.0), 1.0);
        assert!((spot.falloff(5.0, 0.0) - 0.5).abs() < 1e-6);
        assert_eq!(spot.falloff(20.0, 0.0), 0.0);
    }

    #[test]
    fn test_light_leak_brightens_near_spot() {
        let mut image = Raster::filled(8, 8, Srgb::new(0.2, 0.2, 0.2)).unwrap();
        let spot = LeakSpot {
            x: 0.0,
            y: 0.0,
            radius: 4.0,
            color: Srgb::from_u8(255, 128, 0),
        };
        apply_light_leak(&mut image, &[spot], 0.5);
        assert!(image.get(0, 0).r > 0.2);
        assert!(image.get(0, 0).r > image.get(0, 0).b);
        // Outside every spot only the saturation boost applies to a gray
        assert!((image.get(7, 7).r - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_random_spots_follow_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let spots = random_leak_spots(&mut rng, 40, 20);
            assert!((1..=3).contains(&spots.len()));
            for s in spots {
                assert!((-20.0..=40.0).contains(&s.x));
                assert!((-10.0..=20.0).contains(&s.y));
                assert!((10.0..=60.0).contains(&s.radius));
                assert!(s.color.to_bytes()[0] >= 200);
                assert!(s.color.to_bytes()[2] <= 100);
            }
        }
    }

    #[test]
    fn test_random_leak_is_seeded() {
        let base = Raster::filled(6, 4, Srgb::new(0.3, 0.3, 0.3)).unwrap();
        let mut a = base.clone();
        let mut b = base.clone();
        apply_random_light_leak(&mut a, &mut StdRng::seed_from_u64(99));
        apply_random_light_leak(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
