//! Mensura Units - unit-of-measure definitions
//!
//! Each physical quantity is modelled as a *family* of statically declared
//! unit constants. Every family has exactly one canonical (SI/reference)
//! unit; all other variants convert through it with a pure, invertible
//! transform. A unit's identity is its display symbol, nothing else.
//!
//! Families:
//! - Momentum (N⋅s, kg⋅m/s, ft-lb, etc.)
//! - Torque (N⋅m, N⋅cm, lbf⋅ft)
//! - Temperature (K, °C, °F)
//!
//! Typical flow: pick a declared constant (or parse one from text), build a
//! [`Quantity`] from a raw scalar, read the scalar back through any unit of
//! the same family, and render symbols through the cached formatter.

mod conversion;
mod format;
mod parse;
mod pool;
mod quantity;
mod unit;

pub mod families;

pub use conversion::ConversionPair;
pub use format::SymbolFormat;
pub use parse::InvalidUnit;
pub use quantity::Quantity;
pub use unit::{Unit, UnitFamily};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConversionPair, InvalidUnit, Quantity, SymbolFormat, Unit, UnitFamily};
}
