//! Gradient (Perlin) noise over a random lattice.

use std::f32::consts::{SQRT_2, TAU};

use rand::Rng;

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Unit gradients at the corners of a `cells_x` x `cells_y` grid.
#[derive(Debug, Clone)]
pub struct GradientLattice {
    cells_x: usize,
    cells_y: usize,
    /// `(cells_x + 1) * (cells_y + 1)` gradients, row-major.
    gradients: Vec<[f32; 2]>,
}

impl GradientLattice {
    /// Random gradient directions drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, cells_x: usize, cells_y: usize) -> Self {
        let cells_x = cells_x.max(1);
        let cells_y = cells_y.max(1);
        let gradients = (0..(cells_x + 1) * (cells_y + 1))
            .map(|_| {
                let angle = rng.gen::<f32>() * TAU;
                [angle.cos(), angle.sin()]
            })
            .collect();
        Self {
            cells_x,
            cells_y,
            gradients,
        }
    }

    #[inline]
    fn gradient(&self, ix: usize, iy: usize) -> [f32; 2] {
        self.gradients[iy * (self.cells_x + 1) + ix]
    }

    /// Noise at lattice coordinates `(x, y)`, with `0 <= x <= cells_x` and
    /// `0 <= y <= cells_y`. Roughly in `[-1, 1]`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let ix = (x.floor() as usize).min(self.cells_x - 1);
        let iy = (y.floor() as usize).min(self.cells_y - 1);
        let fx = x - ix as f32;
        let fy = y - iy as f32;

        let dot = |gx: usize, gy: usize, dx: f32, dy: f32| {
            let [gx, gy] = self.gradient(gx, gy);
            gx * dx + gy * dy
        };
        let n00 = dot(ix, iy, fx, fy);
        let n10 = dot(ix + 1, iy, fx - 1.0, fy);
        let n01 = dot(ix, iy + 1, fx, fy - 1.0);
        let n11 = dot(ix + 1, iy + 1, fx - 1.0, fy - 1.0);

        let u = fade(fx);
        let v = fade(fy);
        SQRT_2 * lerp(lerp(n00, n10, u), lerp(n01, n11, u), v)
    }

    /// Sample the lattice stretched over a `width` x `height` pixel grid.
    pub fn render(&self, width: usize, height: usize) -> Vec<f32> {
        let sx = self.cells_x as f32 / width as f32;
        let sy = self.cells_y as f32 / height as f32;
        let mut out = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                out.push(self.sample(x as f32 * sx, y as f32 * sy));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_at_lattice_points() {
        let lattice = GradientLattice::random(&mut StdRng::seed_from_u64(1), 4, 4);
        for y in 0..=4 {
            for x in 0..=4 {
                assert!(lattice.sample(x as f32, y as f32).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_bounded_and_not_flat() {
        let lattice = GradientLattice::random(&mut StdRng::seed_from_u64(2), 6, 6);
        let field = lattice.render(64, 48);
        assert_eq!(field.len(), 64 * 48);
        assert!(field.iter().all(|v| v.abs() <= SQRT_2 + 1e-5));
        let min = field.iter().cloned().fold(f32::MAX, f32::min);
        let max = field.iter().cloned().fold(f32::MIN, f32::max);
        assert!(max - min > 0.1);
    }

    #[test]
    fn test_seeded_lattice_repeats() {
        let a = GradientLattice::random(&mut StdRng::seed_from_u64(3), 4, 4).render(16, 16);
        let b = GradientLattice::random(&mut StdRng::seed_from_u64(3), 4, 4).render(16, 16);
        assert_eq!(a, b);
    }
}
