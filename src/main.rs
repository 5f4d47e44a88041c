use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rlc_response::circuits::analysis::evaluate_at;
use rlc_response::circuits::network::ConnectionKind;
use rlc_response::errors::Result;
use rlc_response::io::write_chart_csv;
use rlc_response::report::{diagnostics_tables, AxisScale, ChartModel, TableRow};
use rlc_response::settings::{FormSettings, SettingsStore, DEFAULT_SETTINGS_FILE};
use rlc_response::units::{CapacitanceUnit, FrequencyUnit, InductanceUnit};
use rlc_response::sweep::sweep;

#[derive(Clone, Copy, ValueEnum)]
enum Topology {
    Series,
    Parallel,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scale {
    Linear,
    Log,
}

impl From<Scale> for AxisScale {
    fn from(s: Scale) -> Self {
        match s {
            Scale::Linear => Self::Linear,
            Scale::Log => Self::Log,
        }
    }
}

/// Series/parallel RLC frequency response
#[derive(Parser)]
#[command(name = "rlc-response", version)]
struct Cli {
    /// Settings document holding the last-used form values
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Number of sweep samples
    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// Write the visible chart series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Do not persist the form values after the run
    #[arg(long)]
    no_save: bool,

    #[arg(long, value_enum)]
    circuit: Option<Topology>,
    /// Inductance in --inductance-unit
    #[arg(long)]
    inductance: Option<f64>,
    #[arg(long)]
    inductance_unit: Option<InductanceUnit>,
    /// Capacitance in --capacitance-unit
    #[arg(long)]
    capacitance: Option<f64>,
    #[arg(long)]
    capacitance_unit: Option<CapacitanceUnit>,
    /// Resistance in ohms
    #[arg(long)]
    resistance: Option<f64>,
    /// Source voltage in volts
    #[arg(long)]
    voltage: Option<f64>,
    /// Probe frequency in --frequency-unit
    #[arg(long)]
    frequency: Option<f64>,
    /// Sweep start in --frequency-unit
    #[arg(long)]
    f_min: Option<f64>,
    /// Sweep stop in --frequency-unit
    #[arg(long)]
    f_max: Option<f64>,
    #[arg(long)]
    frequency_unit: Option<FrequencyUnit>,
    #[arg(long, value_enum)]
    x_scale: Option<Scale>,
    #[arg(long, value_enum)]
    y_scale: Option<Scale>,
}

impl Cli {
    fn apply(&self, form: &mut FormSettings) {
        if let Some(t) = self.circuit {
            form.circuit = match t {
                Topology::Series => ConnectionKind::Series,
                Topology::Parallel => ConnectionKind::Parallel,
            };
        }
        if let Some(v) = self.inductance {
            form.inductance = v;
        }
        if let Some(u) = self.inductance_unit {
            form.inductance_unit = u.label().to_string();
        }
        if let Some(v) = self.capacitance {
            form.capacitance = v;
        }
        if let Some(u) = self.capacitance_unit {
            form.capacitance_unit = u.label().to_string();
        }
        if let Some(v) = self.resistance {
            form.resistance = v;
        }
        if let Some(v) = self.voltage {
            form.input_voltage = v;
        }
        if let Some(v) = self.frequency {
            form.input_frequency = v;
        }
        if let Some(v) = self.f_min {
            form.frequency_min = v;
        }
        if let Some(v) = self.f_max {
            form.frequency_max = v;
        }
        if let Some(u) = self.frequency_unit {
            form.frequency_unit = u.label().to_string();
        }
        if let Some(s) = self.x_scale {
            form.x_scale = s.into();
        }
        if let Some(s) = self.y_scale {
            form.y_scale = s.into();
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let store = SettingsStore::new(&cli.settings);
    let mut form = store.load()?;
    cli.apply(&mut form);
    let params = form.to_parameters()?;
    if !cli.no_save {
        store.save(&form)?;
    }

    let _span = tracing::info_span!("evaluate", topology = %params.topology, samples = cli.samples).entered();
    let point = evaluate_at(&params)?;
    let curve = sweep(&params, cli.samples)?;
    let chart = ChartModel::build(&curve, &point, &form.chart_options()?);

    let mut out = io::stdout().lock();
    let tables = diagnostics_tables(&point);
    write_table(&mut out, &tables.elements)?;
    writeln!(out)?;
    write_table(&mut out, &tables.summary)?;
    writeln!(out)?;
    for m in &chart.markers {
        writeln!(out, "{}", m.label)?;
    }
    if let Some(q) = chart.quality_factor {
        writeln!(out, "Q: {q:.2}")?;
    }
    if let Some((f, z)) = chart.probe {
        writeln!(out, "Probe: {f:.2} {} -> {z:.2} ohm", chart.frequency_unit)?;
    }

    if let Some(path) = &cli.csv {
        let mut file = BufWriter::new(File::create(path)?);
        write_chart_csv(&mut file, &chart)?;
        file.flush()?;
        tracing::info!(path = %path.display(), rows = chart.x.len(), "wrote chart csv");
    }
    Ok(())
}

fn write_table<W: Write>(w: &mut W, rows: &[TableRow]) -> io::Result<()> {
    writeln!(w, "{:<16}{}", "Quantity", "Value")?;
    for row in rows {
        writeln!(w, "{:<16}{}", row.quantity, row.value)?;
    }
    Ok(())
}
