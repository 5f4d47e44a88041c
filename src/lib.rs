#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Frequency conversions and resonance helpers.
pub mod constants;
/// Strongly typed unit helpers and form unit labels.
pub mod units;
/// Shared numerical utilities.
pub mod math;
/// Circuit components, networks, and point analysis.
pub mod circuits;
/// Circuit parameters consumed by the engine.
pub mod params;
/// Frequency sweeps and resonance metrics.
pub mod sweep;
/// Table and chart models for front ends.
pub mod report;
/// Persisted form settings.
pub mod settings;
/// CSV export.
pub mod io;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use circuits::analysis::evaluate_at;
pub use sweep::sweep;
