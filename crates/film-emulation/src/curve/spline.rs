//! Natural cubic spline through sparse control points.

use super::CurveError;

/// A smooth 1D mapping built from `(x, y)` control points.
///
/// Between control points the curve is a natural cubic spline (second
/// derivative zero at both ends), so two points give a straight line and
/// points on the diagonal give an exact identity. Outside `[x_first, x_last]`
/// the curve is flat: it returns the first or last `y` instead of
/// extrapolating the cubic.
///
/// # Example
///
/// ```
/// use film_emulation::ToneCurve;
///
/// let curve = ToneCurve::new(&[0.0, 0.5, 1.0], &[0.0, 0.6, 1.0]).unwrap();
/// assert!((curve.evaluate(0.5) - 0.6).abs() < 1e-6);
/// assert_eq!(curve.evaluate(-3.0), 0.0);
/// assert_eq!(curve.evaluate(7.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToneCurve {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative of the spline at each control point.
    second: Vec<f64>,
}

impl ToneCurve {
    /// Build a curve from parallel `x` and `y` lists.
    ///
    /// Requires at least two points, finite coordinates and strictly
    /// increasing `x`.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, CurveError> {
        if xs.len() != ys.len() {
            return Err(CurveError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(CurveError::TooFewPoints { count: xs.len() });
        }
        for (index, (x, y)) in xs.iter().zip(ys).enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
        }
        for index in 1..xs.len() {
            if xs[index] <= xs[index - 1] {
                return Err(CurveError::NonIncreasing { index });
            }
        }

        let second = natural_second_derivatives(xs, ys);
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            second,
        })
    }

    /// The diagonal `y = x` over `[0, 1]`.
    pub fn identity() -> Self {
        Self {
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
            second: vec![0.0, 0.0],
        }
    }

    /// Control-point x values.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Control-point y values.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// True when every control point lies on the diagonal.
    ///
    /// The points must also span `[0, 1]`: a diagonal curve over a narrower
    /// domain still clamps samples outside it.
    pub fn is_identity(&self) -> bool {
        let last = self.xs.len() - 1;
        self.xs[0] <= 0.0
            && self.xs[last] >= 1.0
            && self.xs.iter().zip(&self.ys).all(|(x, y)| x == y)
    }

    /// Evaluate the curve at `x`. NaN maps to the first `y`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if !(x > self.xs[0]) {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }

        // First index with xs[i] > x; x is strictly inside so 1 <= hi <= last
        let hi = self.xs.partition_point(|&xi| xi <= x);
        let lo = hi - 1;

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;
        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.second[lo] + (b * b * b - b) * self.second[hi]) * h * h
                / 6.0
    }

    /// Evaluate at every position in `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Replace every sample in `values` with the curve's output for it.
    pub fn apply_in_place(&self, values: &mut [f32]) {
        for v in values {
            *v = self.evaluate(*v as f64) as f32;
        }
    }
}

/// Solve the tridiagonal system for a natural spline (Thomas algorithm).
fn natural_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut second = vec![0.0; n];
    if n < 3 {
        return second;
    }

    // Forward sweep over the interior points 1..n-1
    let mut diag = vec![0.0; n];
    let mut rhs = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = xs[i] - xs[i - 1];
        let h1 = xs[i + 1] - xs[i];
        let d = 6.0 * ((ys[i + 1] - ys[i]) / h1 - (ys[i] - ys[i - 1]) / h0);
        let main = 2.0 * (h0 + h1);
        if i == 1 {
            diag[i] = main;
            rhs[i] = d;
        } else {
            let m = h0 / diag[i - 1];
            diag[i] = main - m * h0;
            rhs[i] = d - m * rhs[i - 1];
        }
    }

    // Back substitution; second[n-1] stays 0
    for i in (1..n - 1).rev() {
        let h1 = xs[i + 1] - xs[i];
        second[i] = (rhs[i] - h1 * second[i + 1]) / diag[i];
    }
    second
}
