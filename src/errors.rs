//! Error types shared between submodules.

use thiserror::Error;

use crate::settings::SettingsError;
use crate::units::UnitError;

/// Failures reported by the response engine.
///
/// The engine never recovers from these; the caller decides what to show.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResponseError {
    /// Malformed or out-of-range input (non-positive component values, an
    /// empty sweep range, fewer than two samples).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A formula input fell outside its mathematical domain at evaluation
    /// time (zero frequency, zero admittance, arccos argument out of range).
    #[error("domain error: {0}")]
    Domain(String),
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum RlcError {
    /// Wraps engine errors.
    #[error(transparent)]
    Response(#[from] ResponseError),
    /// Wraps settings store errors.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Raised when a unit label cannot be resolved.
    #[error(transparent)]
    Unit(#[from] UnitError),
    /// Raised when writing exports fails.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying [`RlcError`].
pub type Result<T> = std::result::Result<T, RlcError>;
