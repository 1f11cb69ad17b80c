//! Unit definitions with symbol-based identity

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Mul;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ConversionPair, Quantity};

/// Hash written for a default-constructed unit with no symbol.
const ABSENT_SYMBOL_HASH: u64 = 0;

/// A quantity family: the static set of declared unit variants for one
/// physical quantity, with a single canonical unit among them.
pub trait UnitFamily: Sized + 'static {
    /// Family name, used in error messages and format-cache keys.
    const NAME: &'static str;

    /// The canonical unit: the one variant whose conversions are the identity.
    const SI_UNIT: Unit<Self>;

    /// Every declared variant, canonical unit included. Parsing matches
    /// symbols against this set exactly.
    const VARIANTS: &'static [Unit<Self>];
}

/// A named unit of measure within the family `F`.
///
/// Immutable value type pairing a display symbol with the conversion to and
/// from the family's canonical unit. Identity is the symbol alone: two units
/// with equal symbols compare equal even if their conversions were built
/// independently. Conversions are behavior attached to that identity and are
/// assumed consistent for a given symbol across the process.
///
/// A default-constructed unit has no symbol; such degraded instances compare
/// equal to each other and hash to a fixed sentinel instead of failing.
pub struct Unit<F> {
    symbol: Option<&'static str>,
    conversion: ConversionPair,
    _family: PhantomData<F>,
}

impl<F> Unit<F> {
    /// Declare a unit variant. All fields are fixed for the instance's
    /// lifetime; declared constants live for the whole process.
    pub const fn new(symbol: &'static str, conversion: ConversionPair) -> Self {
        Unit {
            symbol: Some(symbol),
            conversion,
            _family: PhantomData,
        }
    }

    /// The display/parse token, absent on a default-constructed unit.
    pub fn symbol(&self) -> Option<&'static str> {
        self.symbol
    }

    /// The transform pairing this unit with the canonical unit.
    pub fn conversion(&self) -> ConversionPair {
        self.conversion
    }

    /// Convert a value expressed in this unit to the canonical unit.
    pub fn to_si(&self, value: f64) -> f64 {
        self.conversion.to_si(value)
    }

    /// Convert a canonical-unit value to this unit.
    pub fn from_si(&self, value_si: f64) -> f64 {
        self.conversion.from_si(value_si)
    }

    /// Build a quantity from a scalar expressed in this unit. The scalar is
    /// converted to canonical form for storage.
    pub fn quantity(&self, value: f64) -> Quantity<F> {
        Quantity::new(value, *self)
    }

    /// Read a quantity's canonical value out through this unit.
    pub fn scalar_value(&self, quantity: &Quantity<F>) -> f64 {
        self.from_si(quantity.si_value())
    }
}

impl<F: UnitFamily> Unit<F> {
    /// The family's canonical unit constant.
    pub fn si_unit(&self) -> Unit<F> {
        F::SI_UNIT
    }

    /// True for the family's canonical variant.
    pub fn is_si_unit(&self) -> bool {
        self.conversion.is_identity()
    }
}

impl<F> Clone for Unit<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Unit<F> {}

impl<F> Default for Unit<F> {
    fn default() -> Self {
        Unit {
            symbol: None,
            conversion: ConversionPair::Identity,
            _family: PhantomData,
        }
    }
}

impl<F> fmt::Debug for Unit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("symbol", &self.symbol)
            .field("conversion", &self.conversion)
            .finish()
    }
}

impl<F> fmt::Display for Unit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol.unwrap_or(""))
    }
}

impl<F> PartialEq for Unit<F> {
    fn eq(&self, other: &Self) -> bool {
        // Symbol-only, case-sensitive. Conversions deliberately play no part.
        match (self.symbol, other.symbol) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<F> Eq for Unit<F> {}

impl<F> Hash for Unit<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.symbol {
            Some(symbol) => symbol.hash(state),
            None => state.write_u64(ABSENT_SYMBOL_HASH),
        }
    }
}

/// `5.0 * NEWTON_SECOND` is sugar over [`Unit::quantity`].
impl<F> Mul<Unit<F>> for f64 {
    type Output = Quantity<F>;

    fn mul(self, unit: Unit<F>) -> Quantity<F> {
        unit.quantity(self)
    }
}

impl<F> Serialize for Unit<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol.unwrap_or(""))
    }
}

impl<'de, F: UnitFamily> Deserialize<'de> for Unit<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Unit::<F>::parse(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::momentum::{self, Momentum};
    use crate::families::torque;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(unit: &Unit<Momentum>) -> u64 {
        let mut hasher = DefaultHasher::new();
        unit.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_canonical_unit_is_identity() {
        assert_eq!(momentum::NEWTON_SECOND.to_si(5.0), 5.0);
        assert_eq!(momentum::NEWTON_SECOND.from_si(5.0), 5.0);
        assert!(momentum::NEWTON_SECOND.is_si_unit());
    }

    #[test]
    fn test_derived_unit_scenario() {
        assert_eq!(torque::NEWTON_CENTIMETER.from_si(100.0), 1.0);
        assert_eq!(torque::NEWTON_CENTIMETER.to_si(1.0), 100.0);
    }

    #[test]
    fn test_si_unit_constant() {
        assert_eq!(momentum::FOOT_POUND.si_unit(), momentum::NEWTON_SECOND);
        assert!(!momentum::FOOT_POUND.is_si_unit());
    }

    #[test]
    fn test_symbol_only_equality() {
        // Independently constructed pairs with different conversions still
        // compare equal when the symbols agree.
        let a: Unit<Momentum> = Unit::new("X⋅s", ConversionPair::scale(2.0));
        let b: Unit<Momentum> = Unit::new("X⋅s", ConversionPair::scale(3.0));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c: Unit<Momentum> = Unit::new("Y⋅s", ConversionPair::scale(2.0));
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let lower: Unit<Momentum> = Unit::new("n⋅s", ConversionPair::IDENTITY);
        assert_ne!(lower, momentum::NEWTON_SECOND);
    }

    #[test]
    fn test_default_unit_sentinel() {
        let a = Unit::<Momentum>::default();
        let b = Unit::<Momentum>::default();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, momentum::NEWTON_SECOND);
        assert_ne!(hash_of(&a), hash_of(&momentum::NEWTON_SECOND));
        assert_eq!(a.symbol(), None);
    }

    #[test]
    fn test_quantity_round_trip() {
        let q = momentum::NEWTON_SECOND.quantity(3.0);
        assert_eq!(momentum::NEWTON_SECOND.scalar_value(&q), 3.0);
    }

    #[test]
    fn test_scalar_times_unit_sugar() {
        let via_mul = 3.0 * momentum::NEWTON_SECOND;
        let via_ctor = momentum::NEWTON_SECOND.quantity(3.0);
        assert_eq!(via_mul, via_ctor);
    }

    #[test]
    fn test_display_is_bare_symbol() {
        assert_eq!(momentum::NEWTON_SECOND.to_string(), "N⋅s");
        assert_eq!(Unit::<Momentum>::default().to_string(), "");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&momentum::FOOT_POUND).unwrap();
        assert_eq!(json, "\"ft-lb\"");
        let back: Unit<Momentum> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, momentum::FOOT_POUND);
    }

    #[test]
    fn test_serde_rejects_unknown_symbol() {
        let result: Result<Unit<Momentum>, _> = serde_json::from_str("\"bogus\"");
        assert!(result.is_err());
    }
}
