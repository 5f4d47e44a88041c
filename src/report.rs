//! Presentation adapter: turns engine output into table rows and a chart model.
//!
//! Nothing here draws. A front end (terminal, GUI, plotting script) reads the
//! rows and series and renders them however it likes.

use serde::{Deserialize, Serialize};

use crate::circuits::analysis::{ElementMagnitudes, LagDirection, PointDiagnostics};
use crate::math::Scalar;
use crate::sweep::{SweepCurve, SweepSample};
use crate::units::FrequencyUnit;

/// Axis scaling, chosen independently for X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    /// Linear axis.
    Linear,
    /// Base-10 logarithmic axis.
    Log,
}

/// Which curves and markers the user wants on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesVisibility {
    /// Inductive reactance curve.
    pub inductive: bool,
    /// Capacitive reactance curve.
    pub capacitive: bool,
    /// Impedance curve, resonance marker, half-power markers and probe point.
    pub resonance: bool,
    /// Current curve on the secondary axis.
    pub current: bool,
}

impl Default for SeriesVisibility {
    fn default() -> Self {
        Self {
            inductive: true,
            capacitive: true,
            resonance: true,
            current: true,
        }
    }
}

/// A quantity/value row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Quantity label.
    pub quantity: String,
    /// Formatted value with unit.
    pub value: String,
}

impl TableRow {
    fn new(quantity: &str, value: String) -> Self {
        Self {
            quantity: quantity.to_string(),
            value,
        }
    }
}

/// The two diagnostics tables shown next to the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsTables {
    /// Element voltages (series) or branch currents (parallel), then total current.
    pub elements: Vec<TableRow>,
    /// Impedance, power factor and phase lag.
    pub summary: Vec<TableRow>,
}

/// Builds the diagnostics tables for one probe point.
#[must_use]
pub fn diagnostics_tables(point: &PointDiagnostics) -> DiagnosticsTables {
    let elements = match point.elements {
        ElementMagnitudes::SeriesVoltages {
            resistor,
            inductor,
            capacitor,
        } => vec![
            TableRow::new("Resistor_v", format!("{resistor:.2} V")),
            TableRow::new("Inductor_v", format!("{inductor:.2} V")),
            TableRow::new("Capacitor_v", format!("{capacitor:.2} V")),
            TableRow::new("Current", format!("{:.2} A", point.current)),
        ],
        ElementMagnitudes::ParallelCurrents {
            resistor,
            inductor,
            capacitor,
        } => vec![
            TableRow::new("Resistor_i", format!("{resistor:.2} A")),
            TableRow::new("Inductor_i", format!("{inductor:.2} A")),
            TableRow::new("Capacitor_i", format!("{capacitor:.2} A")),
            TableRow::new("Current_total", format!("{:.2} A", point.current)),
        ],
    };

    let lag = match point.lag {
        LagDirection::CurrentLagsVoltage => {
            TableRow::new("I Lag V", format!("{:.2} deg", point.phase_deg))
        }
        LagDirection::VoltageLagsCurrent => {
            TableRow::new("V Lag I", format!("{:.2} deg", point.phase_deg))
        }
        LagDirection::Resonant => TableRow::new("Resonance", "0.00 deg".to_string()),
    };

    DiagnosticsTables {
        elements,
        summary: vec![
            TableRow::new("Impedance", format!("{:.2} ohm", point.impedance)),
            TableRow::new("Power Factor", format!("{:.2}", point.power_factor)),
            lag,
        ],
    }
}

/// Which y-axis a series is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left axis, ohms.
    Primary,
    /// Right axis, amperes.
    Secondary,
}

/// Kind of curve, used as a stable column key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// X_L(f)
    InductiveReactance,
    /// X_C(f)
    CapacitiveReactance,
    /// |Z|(f)
    Impedance,
    /// I(f)
    Current,
}

impl SeriesKind {
    /// Column name used in exports.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::InductiveReactance => "inductive_reactance_ohm",
            Self::CapacitiveReactance => "capacitive_reactance_ohm",
            Self::Impedance => "impedance_ohm",
            Self::Current => "current_a",
        }
    }
}

/// A plotted curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// What the curve is.
    pub kind: SeriesKind,
    /// Legend label.
    pub label: String,
    /// Axis the curve belongs to.
    pub axis: Axis,
    /// Y values, aligned with [`ChartModel::x`].
    pub y: Vec<Scalar>,
}

/// A vertical line at a given frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Legend label.
    pub label: String,
    /// Position in display units.
    pub x: Scalar,
}

/// Everything a front end needs to draw the response chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    /// Frequency unit the x values are expressed in.
    pub frequency_unit: FrequencyUnit,
    /// X axis scale.
    pub x_scale: AxisScale,
    /// Y axis scale.
    pub y_scale: AxisScale,
    /// Sample frequencies in display units.
    pub x: Vec<Scalar>,
    /// Visible curves.
    pub series: Vec<ChartSeries>,
    /// Resonance and half-power markers.
    pub markers: Vec<Marker>,
    /// Quality factor annotation (series topology only).
    pub quality_factor: Option<Scalar>,
    /// Probe frequency (display units) and its impedance.
    pub probe: Option<(Scalar, Scalar)>,
}

/// Inputs describing how to present a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Visible curves.
    pub visibility: SeriesVisibility,
    /// X axis scale.
    pub x_scale: AxisScale,
    /// Y axis scale.
    pub y_scale: AxisScale,
    /// Frequency unit for the x axis and markers.
    pub frequency_unit: FrequencyUnit,
    /// Inductance as the user entered it, e.g. `10 mH`.
    pub inductance_label: String,
    /// Capacitance as the user entered it, e.g. `100 uF`.
    pub capacitance_label: String,
}

impl ChartModel {
    /// Builds the chart from a sweep and the probe diagnostics.
    #[must_use]
    pub fn build(curve: &SweepCurve, probe: &PointDiagnostics, options: &ChartOptions) -> Self {
        let unit = options.frequency_unit;
        let vis = options.visibility;

        let mut series = Vec::new();
        if vis.inductive {
            series.push(ChartSeries {
                kind: SeriesKind::InductiveReactance,
                label: format!("Inductive Reactance (L={})", options.inductance_label),
                axis: Axis::Primary,
                y: column(curve, |s| s.inductive_reactance),
            });
        }
        if vis.capacitive {
            series.push(ChartSeries {
                kind: SeriesKind::CapacitiveReactance,
                label: format!("Capacitive Reactance (C={})", options.capacitance_label),
                axis: Axis::Primary,
                y: column(curve, |s| s.capacitive_reactance),
            });
        }

        let mut markers = Vec::new();
        let mut quality_factor = None;
        let mut probe_point = None;
        if vis.resonance {
            series.push(ChartSeries {
                kind: SeriesKind::Impedance,
                label: "Impedance Z".to_string(),
                axis: Axis::Primary,
                y: column(curve, |s| s.impedance),
            });
            let f0 = unit.si_to_unit(curve.resonance_frequency_hz);
            markers.push(Marker {
                label: format!("Resonance Frequency {f0:.2} {unit}"),
                x: f0,
            });
            if let Some(m) = curve.resonance {
                let fl = unit.si_to_unit(m.lower_half_power_hz);
                let fh = unit.si_to_unit(m.upper_half_power_hz);
                markers.push(Marker {
                    label: format!("FL: {fl:.2} {unit}"),
                    x: fl,
                });
                markers.push(Marker {
                    label: format!("FH: {fh:.2} {unit}"),
                    x: fh,
                });
                quality_factor = Some(m.quality_factor);
            }
            probe_point = Some((unit.si_to_unit(probe.frequency_hz), probe.impedance));
        }
        if vis.current {
            series.push(ChartSeries {
                kind: SeriesKind::Current,
                label: "Current (I)".to_string(),
                axis: Axis::Secondary,
                y: column(curve, |s| s.current),
            });
        }

        Self {
            frequency_unit: unit,
            x_scale: options.x_scale,
            y_scale: options.y_scale,
            x: curve.frequencies().map(|f| unit.si_to_unit(f)).collect(),
            series,
            markers,
            quality_factor,
            probe: probe_point,
        }
    }

    /// Finds a visible series by kind.
    #[must_use]
    pub fn series(&self, kind: SeriesKind) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

fn column(curve: &SweepCurve, f: impl Fn(&SweepSample) -> Scalar) -> Vec<Scalar> {
    curve.samples.iter().map(f).collect()
}
