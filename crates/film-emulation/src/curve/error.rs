//! Errors raised while building curves from control points.

/// Why a set of control points cannot form a curve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Fewer control points than the curve kind needs.
    #[error("curve needs at least 2 control points, got {count}")]
    TooFewPoints { count: usize },

    /// `x` and `y` lists differ in length.
    #[error("curve has {x} x values but {y} y values")]
    LengthMismatch { x: usize, y: usize },

    /// `x[index]` is not greater than `x[index - 1]`.
    #[error("curve x values must be strictly increasing (point {index})")]
    NonIncreasing { index: usize },

    /// A coordinate is NaN or infinite.
    #[error("curve point {index} is not a finite number")]
    NonFinite { index: usize },

    /// A coordinate lies outside the domain the curve is defined on.
    #[error("curve point {index} value {value} lies outside the curve domain")]
    OutOfDomain { index: usize, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CurveError::TooFewPoints { count: 1 }.to_string(),
            "curve needs at least 2 control points, got 1"
        );
        assert_eq!(
            CurveError::LengthMismatch { x: 3, y: 2 }.to_string(),
            "curve has 3 x values but 2 y values"
        );
        assert_eq!(
            CurveError::NonIncreasing { index: 2 }.to_string(),
            "curve x values must be strictly increasing (point 2)"
        );
        assert_eq!(
            CurveError::OutOfDomain {
                index: 0,
                value: 400.0
            }
            .to_string(),
            "curve point 0 value 400 lies outside the curve domain"
        );
    }
}
