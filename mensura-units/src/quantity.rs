//! Quantity type - a scalar paired with the unit it was created through

use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Unit, UnitFamily};

/// A physical quantity: a scalar stored in canonical-unit terms plus the
/// unit it was created or last read through.
///
/// A quantity is a snapshot; it is never mutated after construction.
pub struct Quantity<F> {
    si_value: f64,
    unit: Unit<F>,
}

impl<F> Quantity<F> {
    /// Build a quantity from a scalar expressed in `unit`. The value is
    /// converted to canonical form and stored that way.
    pub fn new(value: f64, unit: Unit<F>) -> Self {
        Quantity {
            si_value: unit.to_si(value),
            unit,
        }
    }

    /// The stored value in the family's canonical unit.
    pub fn si_value(&self) -> f64 {
        self.si_value
    }

    /// The unit this quantity was created through.
    pub fn unit(&self) -> Unit<F> {
        self.unit
    }

    /// The scalar read back through the quantity's own unit.
    pub fn value(&self) -> f64 {
        self.unit.from_si(self.si_value)
    }

    /// The scalar expressed in another unit of the same family.
    pub fn value_in(&self, unit: Unit<F>) -> f64 {
        unit.from_si(self.si_value)
    }
}

impl<F> Clone for Quantity<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Quantity<F> {}

impl<F> fmt::Debug for Quantity<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("si_value", &self.si_value)
            .field("unit", &self.unit)
            .finish()
    }
}

impl<F> fmt::Display for Quantity<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit.symbol() {
            Some(symbol) => write!(f, "{} {}", self.value(), symbol),
            None => write!(f, "{}", self.value()),
        }
    }
}

impl<F> PartialEq for Quantity<F> {
    fn eq(&self, other: &Self) -> bool {
        // Compare canonical values; the unit is presentation only.
        self.si_value == other.si_value
    }
}

impl<F: UnitFamily> Serialize for Quantity<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("unit", &self.unit)?;
        state.end()
    }
}

impl<'de, F: UnitFamily> Deserialize<'de> for Quantity<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            value: f64,
            unit: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        let unit = Unit::<F>::parse(&raw.unit).map_err(D::Error::custom)?;
        Ok(unit.quantity(raw.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::momentum::{self, Momentum};
    use approx::assert_relative_eq;

    #[test]
    fn test_construction_stores_canonical_value() {
        let q = momentum::KILONEWTON_SECOND.quantity(2.0);
        assert_eq!(q.si_value(), 2000.0);
        assert_eq!(q.unit(), momentum::KILONEWTON_SECOND);
    }

    #[test]
    fn test_value_reads_through_own_unit() {
        let q = momentum::KILONEWTON_SECOND.quantity(2.0);
        assert_relative_eq!(q.value(), 2.0);
    }

    #[test]
    fn test_value_in_other_unit() {
        let q = momentum::NEWTON_SECOND.quantity(500.0);
        assert_relative_eq!(q.value_in(momentum::KILONEWTON_SECOND), 0.5);
    }

    #[test]
    fn test_equality_is_canonical() {
        let a = momentum::KILONEWTON_SECOND.quantity(1.0);
        let b = momentum::NEWTON_SECOND.quantity(1000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let q = momentum::NEWTON_SECOND.quantity(5.0);
        assert_eq!(q.to_string(), "5 N⋅s");
    }

    #[test]
    fn test_serde_round_trip() {
        let q = momentum::FOOT_POUND.quantity(3.0);
        let json = serde_json::to_string(&q).unwrap();
        let back: Quantity<Momentum> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), momentum::FOOT_POUND);
        assert_relative_eq!(back.value(), 3.0);
    }
}
