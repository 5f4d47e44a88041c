use std::fmt;
use std::sync::Arc;

use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::errors::ResponseError;
use crate::math::Scalar;

use super::component::{Capacitor, Component, Inductor, Resistor};

/// Connection topology for a collection of components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionKind {
    /// Series connection (impedances add linearly).
    Series,
    /// Parallel connection (admittances add linearly).
    Parallel,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Series => f.write_str("Series"),
            Self::Parallel => f.write_str("Parallel"),
        }
    }
}

/// Simple aggregate network that groups components with a shared connection style.
pub struct Network {
    name: String,
    connection: ConnectionKind,
    members: Vec<Arc<dyn Component + Send + Sync>>,
}

impl Network {
    /// Creates a new, empty network.
    #[must_use]
    pub fn new(name: impl Into<String>, connection: ConnectionKind) -> Self {
        Self {
            name: name.into(),
            connection,
            members: Vec::new(),
        }
    }

    /// Builds a single-loop R, L, C network.
    #[must_use]
    pub fn rlc(
        connection: ConnectionKind,
        resistor: Resistor,
        inductor: Inductor,
        capacitor: Capacitor,
    ) -> Self {
        let name = match connection {
            ConnectionKind::Series => "series_rlc",
            ConnectionKind::Parallel => "parallel_rlc",
        };
        let mut net = Self::new(name, connection);
        net.add_component(resistor);
        net.add_component(inductor);
        net.add_component(capacitor);
        net
    }

    /// Adds a component to the network.
    pub fn add_component<C>(&mut self, component: C)
    where
        C: Component + Send + Sync + 'static,
    {
        self.members.push(Arc::new(component));
    }

    /// Returns the aggregate impedance for the network at `omega` (rad/s).
    ///
    /// A parallel network fails when a member is a short or when the summed
    /// admittance vanishes.
    pub fn impedance(&self, omega: Scalar) -> Result<Complex<Scalar>, ResponseError> {
        match self.connection {
            ConnectionKind::Series => {
                let mut total = Complex::<Scalar>::default();
                for component in &self.members {
                    total += component.impedance(omega)?;
                }
                Ok(total)
            }
            ConnectionKind::Parallel => {
                let y = self.admittance(omega)?;
                if y.norm() == 0.0 {
                    return Err(ResponseError::Domain(format!(
                        "network {} has zero admittance at {omega} rad/s",
                        self.name
                    )));
                }
                Ok(y.inv())
            }
        }
    }

    /// Returns the summed admittance of the members at `omega` (rad/s).
    ///
    /// Only meaningful for parallel networks.
    pub fn admittance(&self, omega: Scalar) -> Result<Complex<Scalar>, ResponseError> {
        let mut admittance = Complex::<Scalar>::default();
        for component in &self.members {
            let z = component.impedance(omega)?;
            if z.norm() == 0.0 {
                return Err(ResponseError::Domain(format!(
                    "{} is a short circuit at {omega} rad/s",
                    component.name()
                )));
            }
            admittance += z.inv();
        }
        Ok(admittance)
    }
}

impl Network {
    /// Returns the name of the network.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the connection topology.
    #[must_use]
    pub fn connection_kind(&self) -> ConnectionKind {
        self.connection
    }

    /// Returns the number of components in the network.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("name", &self.name)
            .field("connection", &self.connection)
            .field("members", &self.members.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuits::component::{Capacitor, Inductor, Resistor};

    #[test]
    fn series_network_adds_impedances() {
        let mut network = Network::new("series", ConnectionKind::Series);
        network.add_component(Resistor::new("R1", 100.0));
        network.add_component(Resistor::new("R2", 50.0));
        let z = network.impedance(1.0).unwrap();
        assert_relative_eq!(z.re, 150.0);
    }

    #[test]
    fn parallel_network_combines_admittance() {
        let mut network = Network::new("parallel", ConnectionKind::Parallel);
        network.add_component(Resistor::new("R1", 100.0));
        network.add_component(Resistor::new("R2", 100.0));
        let z = network.impedance(1.0).unwrap();
        assert_relative_eq!(z.re, 50.0);
    }

    #[test]
    fn parallel_short_is_domain_error() {
        let mut network = Network::new("parallel", ConnectionKind::Parallel);
        network.add_component(Resistor::new("R1", 100.0));
        network.add_component(Inductor::new("L1", 1.0e-3));
        assert!(matches!(network.impedance(0.0), Err(ResponseError::Domain(_))));
    }

    #[test]
    fn empty_parallel_network_has_no_admittance() {
        let network = Network::new("open", ConnectionKind::Parallel);
        assert!(network.is_empty());
        assert!(matches!(network.impedance(1.0), Err(ResponseError::Domain(_))));
    }

    #[test]
    fn parallel_rlc_tank_is_resistive_at_resonance() {
        let network = Network::rlc(
            ConnectionKind::Parallel,
            Resistor::new("R", 10.0),
            Inductor::new("L", 0.01),
            Capacitor::new("C", 100.0e-6),
        );
        let omega0 = 1.0 / (0.01_f64 * 100.0e-6).sqrt();
        let z = network.impedance(omega0).unwrap();
        assert_relative_eq!(z.norm(), 10.0, max_relative = 1.0e-9);
        assert_eq!(network.name(), "parallel_rlc");
    }

    #[test]
    fn series_lc_cancels_at_resonance() {
        let network = Network::rlc(
            ConnectionKind::Series,
            Resistor::new("R", 10.0),
            Inductor::new("L", 0.01),
            Capacitor::new("C", 100.0e-6),
        );
        let omega0 = 1.0 / (0.01_f64 * 100.0e-6).sqrt();
        let z = network.impedance(omega0).unwrap();
        assert_relative_eq!(z.re, 10.0);
        assert!(z.im.abs() < 1.0e-9);
        assert_eq!(network.len(), 3);
    }
}
