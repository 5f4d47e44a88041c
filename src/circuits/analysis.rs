//! Point diagnostics of a series or parallel RLC circuit at one frequency.
//!
//! Everything here is a pure function of [`CircuitParameters`]: no state, no
//! logging, no I/O. Errors surface as [`ResponseError`] and are never
//! papered over with defaults.

use serde::{Deserialize, Serialize};

use crate::circuits::component::{Capacitor, Inductor, Resistor};
use crate::circuits::network::{ConnectionKind, Network};
use crate::constants::angular_frequency;
use crate::errors::ResponseError;
use crate::math::{acos_deg, nearly_equal, Scalar};
use crate::params::CircuitParameters;

/// Relative tolerance under which X_L and X_C are considered equal.
pub const REACTANCE_MATCH_TOLERANCE: Scalar = 1.0e-9;

/// Which quantity trails the other in phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LagDirection {
    /// Net inductive behaviour: the current trails the source voltage.
    CurrentLagsVoltage,
    /// Net capacitive behaviour: the source voltage trails the current.
    VoltageLagsCurrent,
    /// Reactances cancel; the phase angle is reported as zero.
    Resonant,
}

/// Per-element magnitudes. Series circuits share a current, so the element
/// voltages are reported; parallel circuits share a voltage, so the branch
/// currents are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementMagnitudes {
    /// Voltage across each element of a series loop (V).
    SeriesVoltages {
        /// V_R = I·R
        resistor: Scalar,
        /// V_L = I·X_L
        inductor: Scalar,
        /// V_C = I·X_C
        capacitor: Scalar,
    },
    /// Current through each branch of a parallel circuit (A).
    ParallelCurrents {
        /// I_R = V/R
        resistor: Scalar,
        /// I_L = V/X_L
        inductor: Scalar,
        /// I_C = V/X_C
        capacitor: Scalar,
    },
}

/// Diagnostics at the probe frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDiagnostics {
    /// Topology the values were computed for.
    pub topology: ConnectionKind,
    /// Probe frequency (Hz).
    pub frequency_hz: Scalar,
    /// X_L at the probe (Ω).
    pub inductive_reactance: Scalar,
    /// X_C at the probe (Ω).
    pub capacitive_reactance: Scalar,
    /// Impedance magnitude seen by the source (Ω).
    pub impedance: Scalar,
    /// Source current magnitude (A).
    pub current: Scalar,
    /// Element voltages (series) or branch currents (parallel).
    pub elements: ElementMagnitudes,
    /// Power factor in [0, 1].
    pub power_factor: Scalar,
    /// Phase-lag angle in degrees, in [0, 90].
    pub phase_deg: Scalar,
    /// Lag direction tag.
    pub lag: LagDirection,
}

/// Reactances and impedance magnitude of the circuit at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OperatingPoint {
    pub inductive_reactance: Scalar,
    pub capacitive_reactance: Scalar,
    pub impedance: Scalar,
}

/// The reactive elements of a circuit together with the network they form.
pub(crate) struct RlcCircuit {
    inductor: Inductor,
    capacitor: Capacitor,
    network: Network,
}

impl RlcCircuit {
    pub(crate) fn new(params: &CircuitParameters) -> Self {
        let inductor = Inductor::new("L", params.inductance_h);
        let capacitor = Capacitor::new("C", params.capacitance_f);
        let network = Network::rlc(
            params.topology,
            Resistor::new("R", params.resistance_ohms),
            inductor.clone(),
            capacitor.clone(),
        );
        Self {
            inductor,
            capacitor,
            network,
        }
    }

    /// Evaluates X_L, X_C and |Z| at `hz`.
    ///
    /// Series: |Z| = √(R² + (X_L − X_C)²). Parallel: |Z| = 1/|Y| with
    /// |Y| = √((1/R)² + (1/X_L − 1/X_C)²).
    pub(crate) fn operating_point(&self, hz: Scalar) -> Result<OperatingPoint, ResponseError> {
        let inductive_reactance = self.inductor.reactance(hz);
        let capacitive_reactance = self.capacitor.reactance(hz)?;
        let impedance = self.network.impedance(angular_frequency(hz))?.norm();
        Ok(OperatingPoint {
            inductive_reactance,
            capacitive_reactance,
            impedance,
        })
    }
}

/// Maps the ordering of X_L and X_C to a lag tag.
///
/// The parallel convention mirrors the series one: a parallel circuit with
/// X_C < X_L reports `VoltageLagsCurrent`, where a series circuit with the
/// same ordering reports `CurrentLagsVoltage`.
#[must_use]
pub fn lag_direction(
    topology: ConnectionKind,
    inductive_reactance: Scalar,
    capacitive_reactance: Scalar,
) -> LagDirection {
    if nearly_equal(
        inductive_reactance,
        capacitive_reactance,
        REACTANCE_MATCH_TOLERANCE,
    ) {
        return LagDirection::Resonant;
    }
    let inductive_dominant = inductive_reactance > capacitive_reactance;
    match (topology, inductive_dominant) {
        (ConnectionKind::Series, true) | (ConnectionKind::Parallel, false) => {
            LagDirection::CurrentLagsVoltage
        }
        (ConnectionKind::Series, false) | (ConnectionKind::Parallel, true) => {
            LagDirection::VoltageLagsCurrent
        }
    }
}

/// Computes diagnostics at `params.probe_frequency_hz`.
///
/// # Errors
///
/// `InvalidArgument` when `params` violates its invariants; `Domain` for a
/// zero probe frequency, zero admittance, or a power factor that leaves
/// [-1, 1] beyond rounding.
pub fn evaluate_at(params: &CircuitParameters) -> Result<PointDiagnostics, ResponseError> {
    params.validate()?;
    let hz = params.probe_frequency_hz;
    let op = RlcCircuit::new(params).operating_point(hz)?;
    let (xl, xc, z) = (op.inductive_reactance, op.capacitive_reactance, op.impedance);
    let r = params.resistance_ohms;
    let v = params.source_voltage;

    let (current, elements, power_factor) = match params.topology {
        ConnectionKind::Series => {
            let i = v / z;
            let elements = ElementMagnitudes::SeriesVoltages {
                resistor: i * r,
                inductor: i * xl,
                capacitor: i * xc,
            };
            (i, elements, r / z)
        }
        ConnectionKind::Parallel => {
            let (i_r, i_l, i_c) = (v / r, v / xl, v / xc);
            let i_s = (i_r * i_r + (i_l - i_c) * (i_l - i_c)).sqrt();
            let elements = ElementMagnitudes::ParallelCurrents {
                resistor: i_r,
                inductor: i_l,
                capacitor: i_c,
            };
            (i_s, elements, z / r)
        }
    };

    let lag = lag_direction(params.topology, xl, xc);
    let phase_deg = match lag {
        LagDirection::Resonant => 0.0,
        _ => acos_deg(power_factor)?,
    };

    Ok(PointDiagnostics {
        topology: params.topology,
        frequency_hz: hz,
        inductive_reactance: xl,
        capacitive_reactance: xc,
        impedance: z,
        current,
        elements,
        power_factor,
        phase_deg,
        lag,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::resonance_frequency;

    fn series_reference() -> CircuitParameters {
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
    fn series_reference_point() {
        let d = evaluate_at(&series_reference()).unwrap();
        assert_relative_eq!(d.inductive_reactance, 62.831_853, max_relative = 1.0e-6);
        assert_relative_eq!(d.capacitive_reactance, 1.591_549, max_relative = 1.0e-6);
        assert_relative_eq!(d.impedance, 62.051_388, max_relative = 1.0e-6);
        assert_relative_eq!(d.current, 0.161_156_7, max_relative = 1.0e-6);
        assert_relative_eq!(d.phase_deg, 80.725_955_6, max_relative = 1.0e-8);
        assert_eq!(d.lag, LagDirection::CurrentLagsVoltage);
        assert_relative_eq!(d.power_factor, 10.0 / d.impedance);
        assert!(d.phase_deg > 0.0 && d.phase_deg < 90.0);
    }

    #[test]
    fn series_element_voltages_follow_current() {
        let d = evaluate_at(&series_reference()).unwrap();
        let ElementMagnitudes::SeriesVoltages {
            resistor,
            inductor,
            capacitor,
        } = d.elements
        else {
            panic!("series circuit reported branch currents");
        };
        assert_relative_eq!(resistor, d.current * 10.0);
        assert_relative_eq!(inductor, d.current * d.inductive_reactance);
        assert_relative_eq!(capacitor, d.current * d.capacitive_reactance);
    }

    #[test]
    fn parallel_reference_point() {
        let p = series_reference().with_topology(ConnectionKind::Parallel);
        let d = evaluate_at(&p).unwrap();
        assert_relative_eq!(d.impedance, 1.611_567_5, max_relative = 1.0e-6);
        assert_relative_eq!(d.current, 6.205_138_8, max_relative = 1.0e-6);
        assert_relative_eq!(d.current * d.impedance, 10.0, max_relative = 1.0e-12);
        // X_L > X_C, so the parallel circuit is capacitive.
        assert_eq!(d.lag, LagDirection::VoltageLagsCurrent);
        assert!(matches!(d.elements, ElementMagnitudes::ParallelCurrents { .. }));
    }

    #[test]
    fn series_at_resonance_is_resonant() {
        let f0 = resonance_frequency(0.01, 100.0e-6);
        let d = evaluate_at(&series_reference().with_probe(f0)).unwrap();
        assert_eq!(d.lag, LagDirection::Resonant);
        assert_eq!(d.phase_deg, 0.0);
        assert_relative_eq!(d.impedance, 10.0, max_relative = 1.0e-9);
        assert_relative_eq!(d.power_factor, 1.0, max_relative = 1.0e-9);
    }

    #[test]
    fn parallel_at_resonance_is_resonant() {
        let f0 = resonance_frequency(0.01, 100.0e-6);
        let p = series_reference()
            .with_topology(ConnectionKind::Parallel)
            .with_probe(f0);
        let d = evaluate_at(&p).unwrap();
        assert_eq!(d.lag, LagDirection::Resonant);
        assert_eq!(d.phase_deg, 0.0);
        assert_relative_eq!(d.impedance, 10.0, max_relative = 1.0e-9);
        assert_relative_eq!(d.power_factor, 1.0, max_relative = 1.0e-9);
        assert_relative_eq!(d.current, 1.0, max_relative = 1.0e-9);
    }

    #[test]
    fn overflowing_capacitive_reactance_is_not_resonant() {
        let mut p = series_reference().with_probe(1.0e-300);
        p.capacitance_f = 1.0e-20;
        let d = evaluate_at(&p).unwrap();
        assert!(d.capacitive_reactance.is_infinite());
        assert_eq!(d.lag, LagDirection::VoltageLagsCurrent);
        assert_eq!(d.power_factor, 0.0);
        assert_relative_eq!(d.phase_deg, 90.0);
        assert_eq!(d.current, 0.0);
    }

    #[test]
    fn lag_tag_mirrors_between_topologies() {
        use ConnectionKind::{Parallel, Series};
        assert_eq!(lag_direction(Series, 5.0, 1.0), LagDirection::CurrentLagsVoltage);
        assert_eq!(lag_direction(Series, 1.0, 5.0), LagDirection::VoltageLagsCurrent);
        assert_eq!(lag_direction(Parallel, 5.0, 1.0), LagDirection::VoltageLagsCurrent);
        assert_eq!(lag_direction(Parallel, 1.0, 5.0), LagDirection::CurrentLagsVoltage);
        assert_eq!(lag_direction(Parallel, 3.0, 3.0), LagDirection::Resonant);
    }

    #[test]
    fn zero_probe_is_domain_error() {
        let err = evaluate_at(&series_reference().with_probe(0.0)).unwrap_err();
        assert!(matches!(err, ResponseError::Domain(_)));
    }
}
