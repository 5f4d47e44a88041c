//! Settings store: the last-used form values, persisted as a flat JSON document.
//!
//! The document holds raw form input (magnitudes plus unit labels) and the
//! chart toggles. Any key missing from the file falls back to its default, so
//! older or hand-edited files keep loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::circuits::network::ConnectionKind;
use crate::params::CircuitParameters;
use crate::report::{AxisScale, ChartOptions, SeriesVisibility};
use crate::units::{CapacitanceUnit, FrequencyUnit, InductanceUnit, UnitError};

/// File name used when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "saved_values.json";

/// Errors raised while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading or writing the document failed.
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    /// The document is not valid JSON for this schema.
    #[error("malformed settings document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw form values, exactly as the user entered them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// `Series` or `Parallel`.
    pub circuit: ConnectionKind,
    /// Inductance magnitude in `inductance_unit`.
    pub inductance: f64,
    /// One of `uH`, `mH`, `H`.
    pub inductance_unit: String,
    /// Capacitance magnitude in `capacitance_unit`.
    pub capacitance: f64,
    /// One of `pF`, `nF`, `uF`, `mF`, `F`.
    pub capacitance_unit: String,
    /// Lower sweep bound in `frequency_unit`.
    pub frequency_min: f64,
    /// Upper sweep bound in `frequency_unit`.
    pub frequency_max: f64,
    /// One of `Hz`, `kHz`, `MHz`; also applies to `input_frequency`.
    pub frequency_unit: String,
    /// Resistance in ohms.
    pub resistance: f64,
    /// Source voltage in volts.
    pub input_voltage: f64,
    /// Probe frequency in `frequency_unit`.
    pub input_frequency: f64,
    /// X axis scale.
    pub x_scale: AxisScale,
    /// Y axis scale.
    pub y_scale: AxisScale,
    /// Show inductive reactance.
    pub inductive_var: bool,
    /// Show capacitive reactance.
    pub capacitive_var: bool,
    /// Show impedance and resonance markers.
    pub resonance_var: bool,
    /// Show current.
    pub current_var: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            circuit: ConnectionKind::Series,
            inductance: 10.0,
            inductance_unit: "mH".to_string(),
            capacitance: 100.0,
            capacitance_unit: "uF".to_string(),
            frequency_min: 1.0,
            frequency_max: 10.0,
            frequency_unit: "kHz".to_string(),
            resistance: 10.0,
            input_voltage: 10.0,
            input_frequency: 1.0,
            x_scale: AxisScale::Log,
            y_scale: AxisScale::Log,
            inductive_var: true,
            capacitive_var: true,
            resonance_var: true,
            current_var: true,
        }
    }
}

impl FormSettings {
    /// Resolves the frequency unit label.
    pub fn frequency_unit(&self) -> Result<FrequencyUnit, UnitError> {
        self.frequency_unit.parse()
    }

    /// Converts the form values to SI circuit parameters.
    ///
    /// Only unit labels are checked here; value ranges are the engine's job.
    pub fn to_parameters(&self) -> Result<CircuitParameters, UnitError> {
        let l_unit: InductanceUnit = self.inductance_unit.parse()?;
        let c_unit: CapacitanceUnit = self.capacitance_unit.parse()?;
        let f_unit = self.frequency_unit()?;
        Ok(CircuitParameters {
            topology: self.circuit,
            inductance_h: l_unit.to_si(self.inductance),
            capacitance_f: c_unit.to_si(self.capacitance),
            resistance_ohms: self.resistance,
            source_voltage: self.input_voltage,
            sweep_min_hz: f_unit.to_si(self.frequency_min),
            sweep_max_hz: f_unit.to_si(self.frequency_max),
            probe_frequency_hz: f_unit.to_si(self.input_frequency),
        })
    }

    /// Chart toggles.
    #[must_use]
    pub fn visibility(&self) -> SeriesVisibility {
        SeriesVisibility {
            inductive: self.inductive_var,
            capacitive: self.capacitive_var,
            resonance: self.resonance_var,
            current: self.current_var,
        }
    }

    /// Presentation options derived from the form.
    pub fn chart_options(&self) -> Result<ChartOptions, UnitError> {
        Ok(ChartOptions {
            visibility: self.visibility(),
            x_scale: self.x_scale,
            y_scale: self.y_scale,
            frequency_unit: self.frequency_unit()?,
            inductance_label: format!("{} {}", self.inductance, self.inductance_unit),
            capacitance_label: format!("{} {}", self.capacitance, self.capacitance_unit),
        })
    }
}

/// Loads and saves [`FormSettings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, or returns the defaults when the file does not exist.
    pub fn load(&self) -> Result<FormSettings, SettingsError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no saved settings, using defaults");
            return Ok(FormSettings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), "loaded settings");
        Ok(settings)
    }

    /// Writes the document, replacing any previous contents.
    pub fn save(&self, settings: &FormSettings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}
