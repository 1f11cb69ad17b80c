//! Statically declared unit families
//!
//! Each family is a module of `const` unit declarations plus a
//! [`UnitFamily`](crate::UnitFamily) impl on its marker type. Constants are
//! compile-time values; nothing here is reassigned after load.

pub mod momentum;
pub mod temperature;
pub mod torque;
