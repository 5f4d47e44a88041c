//! Strongly typed quantities and the unit labels accepted at the form boundary.
//!
//! The engine only ever sees base SI values; a label such as `"mH"` is turned
//! into its multiplier here, before a [`crate::params::CircuitParameters`] is
//! built.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

use crate::math::Scalar;

/// Marker for resistance / impedance in ohms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ohm;
/// Marker for inductance in henries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Henry;
/// Marker for capacitance in farads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farad;

/// A value tagged with its SI unit at the type level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U> {
    value: T,
    _unit: PhantomData<U>,
}

impl<T: Copy, U> Quantity<T, U> {
    /// Wraps a raw SI value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Returns the raw SI value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

/// Resistance or impedance magnitude in ohms.
pub type Impedance<T> = Quantity<T, Ohm>;

/// Raised when a unit label is not one the form offers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Unknown label for the given quantity.
    #[error("unknown {quantity} unit `{label}`")]
    Unknown {
        /// Quantity being parsed (`frequency`, `inductance`, `capacitance`).
        quantity: &'static str,
        /// Offending label.
        label: String,
    },
}

macro_rules! unit_labels {
    (
        $(#[$meta:meta])*
        $name:ident, $quantity:literal {
            $($variant:ident => $label:literal, $mult:expr;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $label, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every label in the order the form lists them.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Multiplier converting a value in this unit to base SI.
            #[must_use]
            pub const fn multiplier(self) -> Scalar {
                match self {
                    $(Self::$variant => $mult,)+
                }
            }

            /// Label as shown to the user.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Converts `value` expressed in this unit to base SI.
            #[must_use]
            pub fn to_si(self, value: Scalar) -> Scalar {
                value * self.multiplier()
            }

            /// Converts a base SI value into this unit.
            #[must_use]
            pub fn si_to_unit(self, value: Scalar) -> Scalar {
                value / self.multiplier()
            }
        }

        impl FromStr for $name {
            type Err = UnitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    other => Err(UnitError::Unknown {
                        quantity: $quantity,
                        label: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

unit_labels! {
    /// Frequency labels.
    FrequencyUnit, "frequency" {
        Hz => "Hz", 1.0;
        KHz => "kHz", 1.0e3;
        MHz => "MHz", 1.0e6;
    }
}

unit_labels! {
    /// Inductance labels.
    InductanceUnit, "inductance" {
        MicroHenry => "uH", 1.0e-6;
        MilliHenry => "mH", 1.0e-3;
        Henry => "H", 1.0;
    }
}

unit_labels! {
    /// Capacitance labels.
    CapacitanceUnit, "capacitance" {
        PicoFarad => "pF", 1.0e-12;
        NanoFarad => "nF", 1.0e-9;
        MicroFarad => "uF", 1.0e-6;
        MilliFarad => "mF", 1.0e-3;
        Farad => "F", 1.0;
    }
}
