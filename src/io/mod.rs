//! I/O helpers for exporting response data.

pub mod csv;

pub use self::csv::{write_chart_csv, write_sweep_csv};
