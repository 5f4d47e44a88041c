//! CSV export of sweep curves and chart series.

use std::io::{self, Write};

use crate::report::ChartModel;
use crate::sweep::SweepCurve;

/// Writes every sample of `curve` as one CSV row.
pub fn write_sweep_csv<W: Write>(mut w: W, curve: &SweepCurve) -> io::Result<()> {
    writeln!(
        w,
        "frequency_hz,inductive_reactance_ohm,capacitive_reactance_ohm,impedance_ohm,current_a"
    )?;
    for s in &curve.samples {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            s.frequency_hz, s.inductive_reactance, s.capacitive_reactance, s.impedance, s.current
        )?;
    }
    w.flush()
}

/// Writes the visible chart series, one column each, keyed by frequency in
/// the chart's display unit.
///
/// A series shorter than the frequency axis leaves its trailing cells empty.
pub fn write_chart_csv<W: Write>(mut w: W, chart: &ChartModel) -> io::Result<()> {
    write!(w, "frequency_{}", chart.frequency_unit.label().to_lowercase())?;
    for s in &chart.series {
        write!(w, ",{}", s.kind.column())?;
    }
    writeln!(w)?;

    let mut columns: Vec<_> = chart.series.iter().map(|s| s.y.iter()).collect();
    for x in &chart.x {
        write!(w, "{x:.16e}")?;
        for column in &mut columns {
            match column.next() {
                Some(y) => write!(w, ",{y:.16e}")?,
                None => write!(w, ",")?,
            }
        }
        writeln!(w)?;
    }
    w.flush()
}
