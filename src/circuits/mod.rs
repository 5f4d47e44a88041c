//! Lumped RLC circuit primitives and their frequency-domain analysis.

/// Point diagnostics at a single frequency.
pub mod analysis;
/// Lumped component definitions and traits.
pub mod component;
/// Series/parallel network composition.
pub mod network;

pub use analysis::{evaluate_at, ElementMagnitudes, LagDirection, PointDiagnostics};
pub use component::{Capacitor, Component, Inductor, Resistor};
pub use network::{ConnectionKind, Network};
