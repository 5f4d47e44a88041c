//! Frequency sweeps of the RLC circuit and derived resonance metrics.

use serde::{Deserialize, Serialize};

use crate::circuits::analysis::RlcCircuit;
use crate::circuits::network::ConnectionKind;
use crate::constants::{angular_frequency, resonance_frequency};
use crate::errors::ResponseError;
use crate::math::Scalar;
use crate::params::CircuitParameters;

/// Generates `n` linearly spaced samples in [start, stop].
///
/// The final sample is exactly `stop`.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            let mut v: Vec<Scalar> = (0..n).map(|i| start + step * i as Scalar).collect();
            v[n - 1] = stop;
            v
        }
    }
}

/// One row of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    /// Sample frequency (Hz).
    pub frequency_hz: Scalar,
    /// X_L (Ω).
    pub inductive_reactance: Scalar,
    /// X_C (Ω).
    pub capacitive_reactance: Scalar,
    /// Impedance magnitude (Ω).
    pub impedance: Scalar,
    /// Source current magnitude V/|Z| (A).
    pub current: Scalar,
}

/// Sharpness of a series resonance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonanceMetrics {
    /// Q = 2πf₀L / R.
    pub quality_factor: Scalar,
    /// Half-power bandwidth f₀ / Q (Hz).
    pub bandwidth_hz: Scalar,
    /// f₀ − BW/2 (Hz).
    pub lower_half_power_hz: Scalar,
    /// f₀ + BW/2 (Hz).
    pub upper_half_power_hz: Scalar,
}

impl ResonanceMetrics {
    /// Series-loop metrics for resonance `f0_hz`.
    #[must_use]
    pub fn series(f0_hz: Scalar, inductance_h: Scalar, resistance_ohms: Scalar) -> Self {
        let quality_factor = angular_frequency(f0_hz) * inductance_h / resistance_ohms;
        let bandwidth_hz = f0_hz / quality_factor;
        Self {
            quality_factor,
            bandwidth_hz,
            lower_half_power_hz: f0_hz - 0.5 * bandwidth_hz,
            upper_half_power_hz: f0_hz + 0.5 * bandwidth_hz,
        }
    }
}

/// Response of the circuit across a linear frequency sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepCurve {
    /// Topology the curve was computed for.
    pub topology: ConnectionKind,
    /// Samples in ascending frequency order.
    pub samples: Vec<SweepSample>,
    /// Ideal LC resonance 1/(2π√(LC)), independent of R and topology (Hz).
    pub resonance_frequency_hz: Scalar,
    /// Q, bandwidth and half-power frequencies.
    ///
    /// Always `None` for parallel circuits: no parallel Q is defined, and none
    /// is approximated.
    pub resonance: Option<ResonanceMetrics>,
}

impl SweepCurve {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the curve holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample frequencies in order.
    pub fn frequencies(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.samples.iter().map(|s| s.frequency_hz)
    }

    /// Largest impedance magnitude on the curve.
    #[must_use]
    pub fn peak_impedance(&self) -> Option<Scalar> {
        self.samples
            .iter()
            .map(|s| s.impedance)
            .fold(None, |acc, z| Some(acc.map_or(z, |m: Scalar| m.max(z))))
    }
}

/// Sweeps `params` over `sample_count` linearly spaced frequencies in
/// `[sweep_min_hz, sweep_max_hz]`, both endpoints included.
///
/// # Errors
///
/// `InvalidArgument` when `sample_count < 2` or `params` is invalid;
/// `Domain` if any sample hits a formula outside its domain.
pub fn sweep(params: &CircuitParameters, sample_count: usize) -> Result<SweepCurve, ResponseError> {
    if sample_count < 2 {
        return Err(ResponseError::InvalidArgument(format!(
            "a sweep needs at least 2 samples, got {sample_count}"
        )));
    }
    params.validate()?;

    let circuit = RlcCircuit::new(params);
    let samples = linspace(params.sweep_min_hz, params.sweep_max_hz, sample_count)
        .into_iter()
        .map(|hz| -> Result<SweepSample, ResponseError> {
            let op = circuit.operating_point(hz)?;
            Ok(SweepSample {
                frequency_hz: hz,
                inductive_reactance: op.inductive_reactance,
                capacitive_reactance: op.capacitive_reactance,
                impedance: op.impedance,
                current: params.source_voltage / op.impedance,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let f0 = resonance_frequency(params.inductance_h, params.capacitance_f);
    let resonance = match params.topology {
        ConnectionKind::Series => Some(ResonanceMetrics::series(
            f0,
            params.inductance_h,
            params.resistance_ohms,
        )),
        ConnectionKind::Parallel => None,
    };

    Ok(SweepCurve {
        topology: params.topology,
        samples,
        resonance_frequency_hz: f0,
        resonance,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn params(topology: ConnectionKind) -> CircuitParameters {
        CircuitParameters {
            topology,
            inductance_h: 0.01,
            capacitance_f: 100.0e-6,
            resistance_ohms: 10.0,
            source_voltage: 10.0,
            sweep_min_hz: 10.0,
            sweep_max_hz: 1000.0,
            probe_frequency_hz: 100.0,
        }
    }

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_pins_endpoint() {
        let v = linspace(0.1, 0.7, 7);
        assert_eq!(v.first().copied(), Some(0.1));
        assert_eq!(v.last().copied(), Some(0.7));
    }

    #[test]
    fn sweep_covers_range_uniformly() {
        let curve = sweep(&params(ConnectionKind::Series), 100).unwrap();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve.samples[0].frequency_hz, 10.0);
        assert_eq!(curve.samples[99].frequency_hz, 1000.0);
        let step = 990.0 / 99.0;
        for pair in curve.samples.windows(2) {
            assert_relative_eq!(pair[1].frequency_hz - pair[0].frequency_hz, step, max_relative = 1.0e-9);
        }
    }

    #[test]
    fn series_metrics_match_closed_form() {
        let curve = sweep(&params(ConnectionKind::Series), 10).unwrap();
        assert_relative_eq!(curve.resonance_frequency_hz, 159.154_943_09, max_relative = 1.0e-9);
        let m = curve.resonance.unwrap();
        // R = √(L/C) gives Q = 1.
        assert_relative_eq!(m.quality_factor, 1.0, max_relative = 1.0e-12);
        assert_relative_eq!(m.bandwidth_hz, curve.resonance_frequency_hz, max_relative = 1.0e-12);
        assert_relative_eq!(m.lower_half_power_hz, 0.5 * curve.resonance_frequency_hz, max_relative = 1.0e-12);
        assert_relative_eq!(m.upper_half_power_hz, 1.5 * curve.resonance_frequency_hz, max_relative = 1.0e-12);
    }

    #[test]
    fn parallel_has_no_q() {
        let curve = sweep(&params(ConnectionKind::Parallel), 10).unwrap();
        assert!(curve.resonance.is_none());
        assert_relative_eq!(curve.resonance_frequency_hz, 159.154_943_09, max_relative = 1.0e-9);
    }

    #[test]
    fn current_is_voltage_over_impedance() {
        for topology in [ConnectionKind::Series, ConnectionKind::Parallel] {
            let curve = sweep(&params(topology), 25).unwrap();
            for s in &curve.samples {
                assert_relative_eq!(s.current * s.impedance, 10.0, max_relative = 1.0e-12);
            }
        }
    }

    #[test]
    fn rejects_too_few_samples() {
        let p = params(ConnectionKind::Series);
        assert!(matches!(sweep(&p, 1), Err(ResponseError::InvalidArgument(_))));
        assert!(matches!(sweep(&p, 0), Err(ResponseError::InvalidArgument(_))));
    }

    #[test]
    fn peak_impedance_of_parallel_is_near_resonance() {
        let mut p = params(ConnectionKind::Parallel);
        p.sweep_min_hz = 100.0;
        p.sweep_max_hz = 220.0;
        let curve = sweep(&p, 121).unwrap();
        let peak = curve.peak_impedance().unwrap();
        // A parallel tank approaches R at resonance.
        assert!(peak <= 10.0 + 1.0e-9);
        assert!(peak > 9.9);
    }
}
