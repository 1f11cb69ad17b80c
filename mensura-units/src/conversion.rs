//! Conversion transforms between a unit and its family's canonical unit

use serde::{Deserialize, Serialize};

/// A pair of pure functions mapping a value in some unit to and from the
/// family's canonical unit.
///
/// The set of transforms is closed: a declared unit is either the canonical
/// unit itself, a pure rescaling of it, or an affine mapping (units with a
/// shifted zero point, like Celsius and Fahrenheit). Keeping the transforms
/// as data rather than stored closures makes the round-trip inverse explicit
/// for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConversionPair {
    /// The canonical unit: both directions are the identity.
    Identity,
    /// `value_si = value * factor`
    Scale { factor: f64 },
    /// `value_si = value * factor + offset`
    Affine { factor: f64, offset: f64 },
}

impl ConversionPair {
    /// The canonical transform.
    pub const IDENTITY: ConversionPair = ConversionPair::Identity;

    /// Pure rescaling: one of this unit equals `factor` canonical units.
    pub const fn scale(factor: f64) -> Self {
        ConversionPair::Scale { factor }
    }

    /// Rescaling with a zero-point offset.
    pub const fn affine(factor: f64, offset: f64) -> Self {
        ConversionPair::Affine { factor, offset }
    }

    /// Convert a value expressed in this unit to the canonical unit.
    pub fn to_si(&self, value: f64) -> f64 {
        match *self {
            ConversionPair::Identity => value,
            ConversionPair::Scale { factor } => value * factor,
            ConversionPair::Affine { factor, offset } => value * factor + offset,
        }
    }

    /// Convert a canonical-unit value to this unit. Inverse of [`Self::to_si`].
    pub fn from_si(&self, value_si: f64) -> f64 {
        match *self {
            ConversionPair::Identity => value_si,
            ConversionPair::Scale { factor } => value_si / factor,
            ConversionPair::Affine { factor, offset } => (value_si - offset) / factor,
        }
    }

    /// True only for the canonical transform, not for `Scale { factor: 1.0 }`.
    pub fn is_identity(&self) -> bool {
        matches!(self, ConversionPair::Identity)
    }
}
