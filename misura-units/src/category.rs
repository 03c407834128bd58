//! Measurement categories

use std::fmt;
use serde::{Serialize, Deserialize};

/// Physical category of a unit. Units in different categories are never
/// directly comparable; converting across them needs ingredient density,
/// which this crate does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mass,
    Volume,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 2] = [Category::Mass, Category::Volume];

    /// Identifier of the reference unit ratios are expressed against.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Mass => "gram",
            Category::Volume => "milliliter",
        }
    }

    /// Human-readable label for selector group headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mass => "Mass",
            Category::Volume => "Volume",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Mass => write!(f, "mass"),
            Category::Volume => write!(f, "volume"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Category::Mass.to_string(), "mass");
        assert_eq!(Category::Volume.to_string(), "volume");
    }

    #[test]
    fn test_base_units() {
        assert_eq!(Category::Mass.base_unit(), "gram");
        assert_eq!(Category::Volume.base_unit(), "milliliter");
    }

    #[test]
    fn test_all_is_disjoint() {
        assert_eq!(Category::ALL.len(), 2);
        assert_ne!(Category::ALL[0], Category::ALL[1]);
    }
}
