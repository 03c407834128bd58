//! Misura Units - Recipe Unit Conversion
//!
//! Provides the unit registry and conversion arithmetic for recipe
//! measurements. Units are partitioned into two categories:
//! - Mass (mg, g, kg, oz, lb) — base unit: gram
//! - Volume (ml, L, tsp, tbsp, fl oz, cup, pt, qt, gal) — base unit: milliliter
//!
//! Conversion is only defined within a category; converting across
//! categories would require ingredient density, which is out of scope.
//! The registry is immutable and built once at first use.

mod category;
mod unit;
mod registry;
mod convert;

pub use category::Category;
pub use unit::{Unit, ConversionError};
pub use registry::{UnitRegistry, UNITS};
pub use convert::{convert, Conversion};
