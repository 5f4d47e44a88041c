use rlc_response::circuits::network::ConnectionKind;
use rlc_response::params::CircuitParameters;
use rlc_response::sweep::sweep;

fn main() -> Result<(), rlc_response::errors::ResponseError> {
    // Series RLC: 50 Ω, 1 µH, 1 nF, swept 1 MHz .. 10 MHz.
    let params = CircuitParameters {
        topology: ConnectionKind::Series,
        resistance_ohms: 50.0,
        inductance_h: 1e-6,
        capacitance_f: 1e-9,
        source_voltage: 1.0,
        sweep_min_hz: 1.0e6,
        sweep_max_hz: 1.0e7,
        probe_frequency_hz: 5.0e6,
    };

    let curve = sweep(&params, 10)?;

    println!("f(Hz), X_L(ohm), X_C(ohm), |Z|(ohm), I(A)");
    for s in &curve.samples {
        println!(
            "{:.6e}, {:.6e}, {:.6e}, {:.6e}, {:.6e}",
            s.frequency_hz, s.inductive_reactance, s.capacitive_reactance, s.impedance, s.current
        );
    }
    println!("f0 = {:.6e} Hz", curve.resonance_frequency_hz);
    if let Some(m) = curve.resonance {
        println!("Q = {:.3}, BW = {:.6e} Hz", m.quality_factor, m.bandwidth_hz);
    }
    Ok(())
}
