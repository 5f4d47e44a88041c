//! Shared numerical primitives.

use crate::errors::ResponseError;

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// How far an arccos argument may drift outside `[-1, 1]` before it is
/// treated as inconsistent input rather than rounding noise.
pub const ACOS_TOLERANCE: Scalar = 1.0e-9;

/// Clamps `x` into `[-1, 1]`.
#[inline]
#[must_use]
pub fn clamp_unit(x: Scalar) -> Scalar {
    x.clamp(-1.0, 1.0)
}

/// Arccos in degrees of a cosine-like ratio (power factor).
///
/// Values within [`ACOS_TOLERANCE`] of the unit interval are clamped; anything
/// further out (or NaN) is a domain error.
pub fn acos_deg(x: Scalar) -> Result<Scalar, ResponseError> {
    if x.is_nan() || x.abs() > 1.0 + ACOS_TOLERANCE {
        return Err(ResponseError::Domain(format!(
            "arccos argument {x} outside [-1, 1]"
        )));
    }
    Ok(clamp_unit(x).acos().to_degrees())
}

/// True when two non-negative magnitudes agree to within a relative tolerance.
///
/// Non-finite inputs never compare equal.
#[inline]
#[must_use]
pub fn nearly_equal(a: Scalar, b: Scalar, max_relative: Scalar) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= max_relative * scale
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn acos_clamps_rounding_overshoot() {
        let angle = acos_deg(1.0 + 1.0e-12).unwrap();
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn acos_rejects_inconsistent_ratio() {
        assert!(matches!(acos_deg(1.5), Err(ResponseError::Domain(_))));
        assert!(matches!(acos_deg(Scalar::NAN), Err(ResponseError::Domain(_))));
    }

    #[test]
    fn acos_half_is_sixty_degrees() {
        assert_abs_diff_eq!(acos_deg(0.5).unwrap(), 60.0, epsilon = 1.0e-12);
    }

    #[test]
    fn nearly_equal_is_relative() {
        assert!(nearly_equal(1.0e6, 1.0e6 + 1.0e-5, 1.0e-9));
        assert!(!nearly_equal(1.0, 1.001, 1.0e-9));
    }

    #[test]
    fn nearly_equal_rejects_infinite_magnitudes() {
        assert!(!nearly_equal(Scalar::INFINITY, 1.0, 1.0e-9));
        assert!(!nearly_equal(1.0, Scalar::INFINITY, 1.0e-9));
        assert!(!nearly_equal(Scalar::INFINITY, Scalar::INFINITY, 1.0e-9));
        assert!(!nearly_equal(Scalar::NAN, Scalar::NAN, 1.0e-9));
    }
}
