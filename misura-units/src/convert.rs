//! The conversion function

use serde::Serialize;
use crate::{ConversionError, UNITS};

/// Outcome of a successful conversion.
///
/// `ratio` is the per-unit exchange ratio (how many target units one source
/// unit equals), kept alongside the value so callers can render the
/// "1 source ≈ r target" line without recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub ratio: f64,
}

/// Convert a non-negative amount from one unit to another.
///
/// Both ids must exist in [`UNITS`]; an unknown id is a programming error
/// and panics. A category mismatch is the one runtime error and is returned
/// as a discriminated outcome so callers cannot mistake a garbage number
/// for a real answer.
///
/// The amount is assumed already validated: finite and >= 0. No rounding is
/// applied; display precision is a presentation concern.
pub fn convert(amount: f64, from: &str, to: &str) -> Result<Conversion, ConversionError> {
    debug_assert!(amount.is_finite(), "amount must be finite");
    debug_assert!(amount >= 0.0, "amount must be non-negative");

    let from = &UNITS[from];
    let to = &UNITS[to];

    if !from.is_compatible(to) {
        return Err(ConversionError::IncompatibleCategories {
            from: from.id,
            to: to.id,
            from_category: from.category,
            to_category: to.category,
        });
    }

    let ratio = from.ratio_to_base / to.ratio_to_base;
    Ok(Conversion { value: amount * ratio, ratio })
}
