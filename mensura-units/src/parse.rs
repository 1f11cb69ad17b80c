//! Symbol parsing - resolve text to a declared unit variant

use std::str::FromStr;

use crate::{Unit, UnitFamily};

/// Raised by strict parsing when the input matches no declared symbol of the
/// family after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {family} unit: {text:?}")]
pub struct InvalidUnit {
    family: &'static str,
    text: String,
}

impl InvalidUnit {
    /// Name of the family the lookup ran against.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The offending input, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<F: UnitFamily> Unit<F> {
    /// Resolve a symbol to its declared unit constant.
    ///
    /// Matching is exact string equality after trimming leading and trailing
    /// whitespace; no fuzzy or case-insensitive lookup.
    pub fn parse(text: &str) -> Result<Unit<F>, InvalidUnit> {
        let trimmed = text.trim();
        F::VARIANTS
            .iter()
            .find(|unit| unit.symbol() == Some(trimmed))
            .copied()
            .ok_or_else(|| InvalidUnit {
                family: F::NAME,
                text: text.to_string(),
            })
    }

    /// Non-strict variant: reports failure without raising an error.
    pub fn try_parse(text: &str) -> Option<Unit<F>> {
        Self::parse(text).ok()
    }
}

impl<F: UnitFamily> FromStr for Unit<F> {
    type Err = InvalidUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::momentum::{self, Momentum};
    use crate::families::temperature::{self, Temperature};

    #[test]
    fn test_parse_every_declared_symbol() {
        for unit in Momentum::VARIANTS {
            let symbol = unit.symbol().unwrap();
            assert_eq!(Unit::<Momentum>::parse(symbol).unwrap(), *unit);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            Unit::<Momentum>::parse("  N⋅s \t").unwrap(),
            momentum::NEWTON_SECOND
        );
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let err = Unit::<Momentum>::parse("not-a-real-symbol").unwrap_err();
        assert_eq!(err.family(), "momentum");
        assert_eq!(err.text(), "not-a-real-symbol");
    }

    #[test]
    fn test_parse_is_exact_match_only() {
        // No case folding, no partial matches.
        assert!(Unit::<Momentum>::parse("n⋅s").is_err());
        assert!(Unit::<Momentum>::parse("N⋅").is_err());
        assert!(Unit::<Momentum>::parse("").is_err());
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(
            Unit::<Momentum>::try_parse("ft-lb"),
            Some(momentum::FOOT_POUND)
        );
        assert_eq!(Unit::<Momentum>::try_parse("not-a-real-symbol"), None);
    }

    #[test]
    fn test_from_str() {
        let unit: Unit<Temperature> = "°C".parse().unwrap();
        assert_eq!(unit, temperature::DEGREE_CELSIUS);
    }

    #[test]
    fn test_error_display() {
        let err = Unit::<Momentum>::parse("xyz").unwrap_err();
        assert_eq!(err.to_string(), "unknown momentum unit: \"xyz\"");
    }
}
