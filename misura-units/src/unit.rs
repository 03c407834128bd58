//! Unit metadata with conversion ratios

use std::fmt;
use serde::Serialize;
use crate::Category;

/// A known unit with its conversion ratio to the category base unit
/// (gram for mass, milliliter for volume).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Stable identifier (e.g., "cup_us", "gram")
    pub id: &'static str,
    /// Display name (e.g., "US cup", "gram")
    pub name: &'static str,
    /// Short symbol (e.g., "cup", "g")
    pub symbol: &'static str,
    /// The category this unit measures
    pub category: Category,
    /// How many base units one of this unit equals
    pub ratio_to_base: f64,
}

impl Unit {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        category: Category,
        ratio_to_base: f64,
    ) -> Self {
        Unit { id, name, symbol, category, ratio_to_base }
    }

    /// Check if this is the category's base unit (ratio exactly 1)
    pub fn is_base(&self) -> bool {
        self.ratio_to_base == 1.0
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert an amount of this unit into base units
    pub fn to_base(&self, amount: f64) -> f64 {
        amount * self.ratio_to_base
    }

    /// Convert an amount of base units into this unit
    pub fn from_base(&self, base_amount: f64) -> f64 {
        base_amount / self.ratio_to_base
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Source and target units measure different categories
    IncompatibleCategories {
        from: &'static str,
        to: &'static str,
        from_category: Category,
        to_category: Category,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::IncompatibleCategories { from, to, from_category, to_category } => {
                write!(f, "cannot convert {} ({}) to {} ({}): incompatible categories",
                    from, from_category, to, to_category)
            }
        }
    }
}

impl std::error::Error for ConversionError {}
