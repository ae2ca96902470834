//! Separable Gaussian blur with reflected borders.

use rayon::prelude::*;

use crate::color::Rgb;
use crate::raster::Raster;

/// Normalised 1D Gaussian kernel with half-width `ceil(3 * sigma)`.
pub(crate) fn kernel(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil().max(1.0) as isize;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// `sigma` limited to the image diagonal. Past that the kernel only grows
/// while the result stays a near-uniform mean of the frame.
pub(crate) fn bounded_sigma(sigma: f32, width: usize, height: usize) -> f32 {
    let diagonal = (width as f32).hypot(height as f32).max(1.0);
    sigma.min(diagonal)
}

/// Mirror an out-of-range index back into `0..len` (`d c b a | a b c d`).
#[inline]
pub(crate) fn reflect(index: isize, len: usize) -> usize {
    let n = len as isize;
    let m = index.rem_euclid(2 * n);
    if m < n {
        m as usize
    } else {
        (2 * n - 1 - m) as usize
    }
}

/// Blur `N`-channel samples laid out row-major.
fn separable<const N: usize>(
    data: &[[f32; N]],
    width: usize,
    height: usize,
    sigma: f32,
) -> Vec<[f32; N]> {
    let weights = kernel(bounded_sigma(sigma, width, height));
    let radius = (weights.len() / 2) as isize;

    let mut horizontal = vec![[0.0f32; N]; data.len()];
    horizontal
        .par_chunks_mut(width)
        .zip(data.par_chunks(width))
        .for_each(|(out_row, in_row)| {
            for (x, out) in out_row.iter_mut().enumerate() {
                let mut acc = [0.0f32; N];
                for (k, w) in weights.iter().enumerate() {
                    let sx = reflect(x as isize + k as isize - radius, width);
                    for c in 0..N {
                        acc[c] += w * in_row[sx][c];
                    }
                }
                *out = acc;
            }
        });

    let mut vertical = vec![[0.0f32; N]; data.len()];
    vertical
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (k, w) in weights.iter().enumerate() {
                let sy = reflect(y as isize + k as isize - radius, height);
                let src = &horizontal[sy * width..(sy + 1) * width];
                for (out, sample) in out_row.iter_mut().zip(src) {
                    for c in 0..N {
                        out[c] += w * sample[c];
                    }
                }
            }
        });
    vertical
}

/// Blur a single-channel plane. Returns the input unchanged for `sigma <= 0`.
pub fn blur_plane(plane: &[f32], width: usize, height: usize, sigma: f32) -> Vec<f32> {
    if !(sigma > 0.0) {
        return plane.to_vec();
    }
    let wrapped: Vec<[f32; 1]> = plane.iter().map(|&v| [v]).collect();
    separable(&wrapped, width, height, sigma)
        .into_iter()
        .map(|[v]| v)
        .collect()
}

/// Isotropic Gaussian blur of every channel. No-op for `sigma <= 0`.
pub fn blur<P: Rgb>(image: &mut Raster<P>, sigma: f32) {
    if !(sigma > 0.0) {
        return;
    }
    let samples: Vec<[f32; 3]> = image.pixels().iter().map(|p| p.channels()).collect();
    let blurred = separable(&samples, image.width(), image.height(), sigma);
    for (pixel, channels) in image.pixels_mut().iter_mut().zip(blurred) {
        *pixel = P::from_channels(channels);
    }
}
