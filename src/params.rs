//! Circuit parameters consumed by the response engine.

use serde::{Deserialize, Serialize};

use crate::circuits::network::ConnectionKind;
use crate::errors::ResponseError;
use crate::math::Scalar;

/// Immutable description of a single-loop RLC circuit and the frequencies of interest.
///
/// Every field is in base SI units. Construct it by value and call
/// [`CircuitParameters::validate`] (the engine does so on every call).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParameters {
    /// Series or parallel connection of R, L and C across the source.
    pub topology: ConnectionKind,
    /// Inductance in henries.
    pub inductance_h: Scalar,
    /// Capacitance in farads.
    pub capacitance_f: Scalar,
    /// Resistance in ohms.
    pub resistance_ohms: Scalar,
    /// Source voltage magnitude in volts.
    pub source_voltage: Scalar,
    /// Lower sweep bound in hertz.
    pub sweep_min_hz: Scalar,
    /// Upper sweep bound in hertz.
    pub sweep_max_hz: Scalar,
    /// Single frequency for point diagnostics, in hertz. Need not lie inside the sweep.
    pub probe_frequency_hz: Scalar,
}

impl CircuitParameters {
    /// Checks the value invariants.
    ///
    /// A probe frequency of exactly zero is accepted here; the capacitive
    /// reactance rejects it at evaluation time instead.
    pub fn validate(&self) -> Result<(), ResponseError> {
        positive("inductance", self.inductance_h)?;
        positive("capacitance", self.capacitance_f)?;
        positive("resistance", self.resistance_ohms)?;
        positive("source voltage", self.source_voltage)?;
        positive("sweep minimum", self.sweep_min_hz)?;
        positive("sweep maximum", self.sweep_max_hz)?;
        if self.sweep_min_hz >= self.sweep_max_hz {
            return Err(ResponseError::InvalidArgument(format!(
                "sweep minimum {} Hz must be below sweep maximum {} Hz",
                self.sweep_min_hz, self.sweep_max_hz
            )));
        }
        if !self.probe_frequency_hz.is_finite() || self.probe_frequency_hz < 0.0 {
            return Err(ResponseError::InvalidArgument(format!(
                "probe frequency must be a non-negative finite number, got {}",
                self.probe_frequency_hz
            )));
        }
        Ok(())
    }

    /// Returns a copy probing a different frequency.
    #[must_use]
    pub fn with_probe(mut self, probe_frequency_hz: Scalar) -> Self {
        self.probe_frequency_hz = probe_frequency_hz;
        self
    }

    /// Returns a copy with a different topology.
    #[must_use]
    pub fn with_topology(mut self, topology: ConnectionKind) -> Self {
        self.topology = topology;
        self
    }
}

fn positive(what: &str, value: Scalar) -> Result<(), ResponseError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ResponseError::InvalidArgument(format!(
            "{what} must be a positive finite number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CircuitParameters {
        CircuitParameters {
            topology: ConnectionKind::Series,
            inductance_h: 0.01,
            capacitance_f: 100.0e-6,
            resistance_ohms: 10.0,
            source_voltage: 10.0,
            sweep_min_hz: 1.0e3,
            sweep_max_hz: 10.0e3,
            probe_frequency_hz: 1.0e3,
        }
    }

    #[test]
    fn reference_is_valid() {
        assert_eq!(reference().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_components() {
        let mut p = reference();
        p.resistance_ohms = 0.0;
        assert!(matches!(p.validate(), Err(ResponseError::InvalidArgument(_))));

        let mut p = reference();
        p.capacitance_f = -1.0e-6;
        assert!(matches!(p.validate(), Err(ResponseError::InvalidArgument(_))));

        let mut p = reference();
        p.source_voltage = Scalar::NAN;
        assert!(matches!(p.validate(), Err(ResponseError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_empty_sweep_range() {
        let mut p = reference();
        p.sweep_max_hz = p.sweep_min_hz;
        assert!(matches!(p.validate(), Err(ResponseError::InvalidArgument(_))));
    }

    #[test]
    fn zero_probe_passes_validation() {
        assert_eq!(reference().with_probe(0.0).validate(), Ok(()));
        assert!(reference().with_probe(-5.0).validate().is_err());
    }
}
