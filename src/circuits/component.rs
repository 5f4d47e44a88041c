use num_complex::Complex;

use crate::constants::angular_frequency;
use crate::errors::ResponseError;
use crate::math::Scalar;
use crate::units::{Farad, Henry, Impedance, Quantity};

/// Trait implemented by all circuit components that can provide a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> Result<Complex<Scalar>, ResponseError>;

    /// Human-readable identifier (e.g. `R1`).
    fn name(&self) -> &str;
}

/// Lumped resistor model.
#[derive(Debug, Clone)]
pub struct Resistor {
    name: String,
    resistance: Impedance<Scalar>,
}

impl Resistor {
    /// Creates a resistor.
    #[must_use]
    pub fn new(name: impl Into<String>, resistance_ohms: Scalar) -> Self {
        Self {
            name: name.into(),
            resistance: Impedance::new(resistance_ohms),
        }
    }

    /// Resistance magnitude in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistance.value()
    }
}

impl Component for Resistor {
    fn impedance(&self, _omega: Scalar) -> Result<Complex<Scalar>, ResponseError> {
        Ok(Complex::new(self.resistance(), 0.0))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped capacitor model (ideal).
#[derive(Debug, Clone)]
pub struct Capacitor {
    name: String,
    capacitance: Quantity<Scalar, Farad>,
}

impl Capacitor {
    /// Creates a capacitor.
    #[must_use]
    pub fn new(name: impl Into<String>, capacitance_f: Scalar) -> Self {
        Self {
            name: name.into(),
            capacitance: Quantity::new(capacitance_f),
        }
    }

    /// Returns the capacitance magnitude in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance.value()
    }

    /// Capacitive reactance X_C = 1 / (2πfC) in ohms.
    ///
    /// Undefined at DC; a zero frequency is a domain error.
    pub fn reactance(&self, hz: Scalar) -> Result<Scalar, ResponseError> {
        if hz == 0.0 {
            return Err(ResponseError::Domain(format!(
                "capacitive reactance of {} is undefined at 0 Hz",
                self.name
            )));
        }
        Ok(1.0 / (angular_frequency(hz) * self.capacitance()))
    }
}

impl Component for Capacitor {
    fn impedance(&self, omega: Scalar) -> Result<Complex<Scalar>, ResponseError> {
        if omega == 0.0 {
            return Err(ResponseError::Domain(format!(
                "capacitor {} has no finite impedance at DC",
                self.name
            )));
        }
        Ok(Complex::new(0.0, -1.0 / (omega * self.capacitance())))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Lumped inductor model (ideal).
#[derive(Debug, Clone)]
pub struct Inductor {
    name: String,
    inductance: Quantity<Scalar, Henry>,
}

impl Inductor {
    /// Creates an inductor.
    #[must_use]
    pub fn new(name: impl Into<String>, inductance_h: Scalar) -> Self {
        Self {
            name: name.into(),
            inductance: Quantity::new(inductance_h),
        }
    }

    /// Returns the inductance magnitude in henries.
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductance.value()
    }

    /// Inductive reactance X_L = 2πfL in ohms.
    #[must_use]
    pub fn reactance(&self, hz: Scalar) -> Scalar {
        angular_frequency(hz) * self.inductance()
    }
}

impl Component for Inductor {
    fn impedance(&self, omega: Scalar) -> Result<Complex<Scalar>, ResponseError> {
        Ok(Complex::new(0.0, omega * self.inductance()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn resistor_impedance_is_real() {
        let r = Resistor::new("R1", 100.0);
        let z = r.impedance(1.0).unwrap();
        assert_relative_eq!(z.re, 100.0);
        assert_relative_eq!(z.im, 0.0);
    }

    #[test]
    fn capacitor_impedance_is_reactive() {
        let c = Capacitor::new("C1", 1e-6);
        let omega = 1.0e3;
        let z = c.impedance(omega).unwrap();
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert!(z.im < 0.0);
    }

    #[test]
    fn reactances_at_one_kilohertz() {
        let l = Inductor::new("L1", 0.01);
        let c = Capacitor::new("C1", 100.0e-6);
        assert_relative_eq!(l.reactance(1000.0), 62.831_853_071_795_86, max_relative = 1.0e-12);
        assert_relative_eq!(c.reactance(1000.0).unwrap(), 1.591_549_430_918_953_4, max_relative = 1.0e-12);
    }

    #[test]
    fn capacitor_rejects_dc() {
        let c = Capacitor::new("C1", 1e-6);
        assert!(matches!(c.reactance(0.0), Err(ResponseError::Domain(_))));
        assert!(matches!(c.impedance(0.0), Err(ResponseError::Domain(_))));
    }
}
