//! Frequency conversions and closed-form resonance helpers.
//!
//! All quantities are base SI: hertz, henries, farads. Unit-label scaling
//! (e.g. `mH` → 1e-3) lives in [`crate::units`] and happens before any of
//! these are called.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Returns the angular frequency ω = 2πf (rad/s) corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Ideal LC resonance frequency f₀ = 1 / (2π√(LC)) in hertz.
///
/// Independent of any series or shunt resistance; the same point is used for
/// both topologies.
#[inline]
#[must_use]
pub fn resonance_frequency(inductance_h: Scalar, capacitance_f: Scalar) -> Scalar {
    1.0 / (2.0 * PI * (inductance_h * capacitance_f).sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_of_one_hertz() {
        assert_relative_eq!(angular_frequency(1.0), 2.0 * PI, max_relative = 1.0e-15);
    }

    #[test]
    fn resonance_matches_reference() {
        // 10 mH, 100 µF
        let f0 = resonance_frequency(0.01, 100.0e-6);
        assert_relative_eq!(f0, 159.154_943_091_895_3, max_relative = 1.0e-9);
    }
}
