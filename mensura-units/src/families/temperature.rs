//! Temperature units, canonical in kelvin
//!
//! Celsius and Fahrenheit are affine: they rescale and shift the zero point,
//! so they exercise the offset arm of [`ConversionPair`].

use crate::{ConversionPair, Unit, UnitFamily};

/// Marker for the temperature family.
#[derive(Debug)]
pub enum Temperature {}

/// Canonical temperature unit.
pub const KELVIN: Unit<Temperature> = Unit::new("K", ConversionPair::IDENTITY);
pub const DEGREE_CELSIUS: Unit<Temperature> =
    Unit::new("°C", ConversionPair::affine(1.0, 273.15));
pub const DEGREE_FAHRENHEIT: Unit<Temperature> =
    Unit::new("°F", ConversionPair::affine(5.0 / 9.0, 459.67 * 5.0 / 9.0));

impl UnitFamily for Temperature {
    const NAME: &'static str = "temperature";
    const SI_UNIT: Unit<Temperature> = KELVIN;
    const VARIANTS: &'static [Unit<Temperature>] = &[KELVIN, DEGREE_CELSIUS, DEGREE_FAHRENHEIT];
}
