//! Torque units, canonical in newton-meters

use crate::{ConversionPair, Unit, UnitFamily};

/// Marker for the torque family.
#[derive(Debug)]
pub enum Torque {}

/// Canonical torque unit.
pub const NEWTON_METER: Unit<Torque> = Unit::new("N⋅m", ConversionPair::IDENTITY);
pub const NEWTON_CENTIMETER: Unit<Torque> = Unit::new("N⋅cm", ConversionPair::scale(100.0));
pub const POUND_FORCE_FOOT: Unit<Torque> =
    Unit::new("lbf⋅ft", ConversionPair::scale(1.355_817_948_331_400_4));

impl UnitFamily for Torque {
    const NAME: &'static str = "torque";
    const SI_UNIT: Unit<Torque> = NEWTON_METER;
    const VARIANTS: &'static [Unit<Torque>] =
        &[NEWTON_METER, NEWTON_CENTIMETER, POUND_FORCE_FOOT];
}
