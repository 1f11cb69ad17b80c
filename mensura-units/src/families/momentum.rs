//! Momentum units, canonical in newton-seconds

use crate::{ConversionPair, Unit, UnitFamily};

/// Marker for the momentum family.
#[derive(Debug)]
pub enum Momentum {}

/// Canonical momentum unit.
pub const NEWTON_SECOND: Unit<Momentum> = Unit::new("N⋅s", ConversionPair::IDENTITY);
/// Same magnitude as the canonical unit, declared under its own symbol.
pub const KILOGRAM_METER_PER_SECOND: Unit<Momentum> =
    Unit::new("kg⋅m/s", ConversionPair::scale(1.0));
pub const KILONEWTON_SECOND: Unit<Momentum> = Unit::new("kN⋅s", ConversionPair::scale(1_000.0));
pub const MILLINEWTON_SECOND: Unit<Momentum> = Unit::new("mN⋅s", ConversionPair::scale(0.001));
pub const DYNE_SECOND: Unit<Momentum> = Unit::new("dyn⋅s", ConversionPair::scale(1e-5));
/// Equal in magnitude to the dyne-second.
pub const GRAM_CENTIMETER_PER_SECOND: Unit<Momentum> =
    Unit::new("g⋅cm/s", ConversionPair::scale(1e-5));
pub const FOOT_POUND: Unit<Momentum> = Unit::new("ft-lb", ConversionPair::scale(0.138_254_954_376));
pub const SLUG_FOOT_PER_SECOND: Unit<Momentum> =
    Unit::new("slug⋅ft/s", ConversionPair::scale(4.448_221_615_260_5));
/// Equal in magnitude to the slug-foot-per-second.
pub const POUND_FORCE_SECOND: Unit<Momentum> =
    Unit::new("lbf⋅s", ConversionPair::scale(4.448_221_615_260_5));

impl UnitFamily for Momentum {
    const NAME: &'static str = "momentum";
    const SI_UNIT: Unit<Momentum> = NEWTON_SECOND;
    const VARIANTS: &'static [Unit<Momentum>] = &[
        NEWTON_SECOND,
        KILOGRAM_METER_PER_SECOND,
        KILONEWTON_SECOND,
        MILLINEWTON_SECOND,
        DYNE_SECOND,
        GRAM_CENTIMETER_PER_SECOND,
        FOOT_POUND,
        SLUG_FOOT_PER_SECOND,
        POUND_FORCE_SECOND,
    ];
}
