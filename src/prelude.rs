//! Convenience re-exports for evaluating RLC circuits.

pub use crate::circuits::{
    analysis::{evaluate_at, lag_direction, ElementMagnitudes, LagDirection, PointDiagnostics},
    component::{Capacitor, Component, Inductor, Resistor},
    network::{ConnectionKind, Network},
};
pub use crate::constants::{angular_frequency, resonance_frequency};
pub use crate::errors::{ResponseError, RlcError};
pub use crate::io::{write_chart_csv, write_sweep_csv};
pub use crate::math::Scalar;
pub use crate::params::CircuitParameters;
pub use crate::report::{
    diagnostics_tables, AxisScale, ChartModel, ChartOptions, DiagnosticsTables, SeriesVisibility,
};
pub use crate::settings::{FormSettings, SettingsError, SettingsStore};
pub use crate::sweep::{linspace, sweep, ResonanceMetrics, SweepCurve, SweepSample};
pub use crate::units::{CapacitanceUnit, FrequencyUnit, InductanceUnit, UnitError};
