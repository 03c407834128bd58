//! Converter selection state
//!
//! Tracks the amount text and the two unit selectors, keeping them on the
//! same category: changing one selector retargets the other when their
//! categories diverge, so the pair can never be left incompatible.

use misura_units::{convert, Conversion, ConversionError, Unit, UNITS};
use thiserror::Error;

use crate::input::{parse_amount, AmountError};

/// Why a reading could not be produced
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadingError {
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// A computed conversion together with its inputs, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub amount: f64,
    pub from: &'static Unit,
    pub to: &'static Unit,
    pub conversion: Conversion,
}

/// State of the converter widget: amount text plus from/to selections.
///
/// Unit ids must come from the registry; an unknown id is a programming
/// error and panics, as for registry indexing.
#[derive(Debug, Clone)]
pub struct ConverterTool {
    amount: String,
    from: &'static str,
    to: &'static str,
}

impl ConverterTool {
    /// Fresh converter: 1 US cup to milliliters.
    pub fn new() -> Self {
        ConverterTool {
            amount: "1".to_string(),
            from: "cup_us",
            to: "milliliter",
        }
    }

    pub fn amount_text(&self) -> &str {
        &self.amount
    }

    pub fn from(&self) -> &'static Unit {
        &UNITS[self.from]
    }

    pub fn to(&self) -> &'static Unit {
        &UNITS[self.to]
    }

    /// Replace the raw amount text. Validation happens in [`reading`].
    ///
    /// [`reading`]: ConverterTool::reading
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = text.into();
    }

    /// Select the source unit. If the target no longer matches its
    /// category, retarget it to the first other unit of the new category.
    pub fn set_from(&mut self, id: &str) {
        let from = &UNITS[id];
        self.from = from.id;

        if from.category != self.to().category {
            self.to = default_other(from.id, from.category);
        }
    }

    /// Select the target unit, retargeting the source symmetrically.
    pub fn set_to(&mut self, id: &str) {
        let to = &UNITS[id];

        if to.category != self.from().category {
            self.from = default_other(to.id, to.category);
        }
        self.to = to.id;
    }

    /// Exchange the two selections. Only valid for a same-category pair,
    /// which the setters guarantee.
    pub fn swap(&mut self) {
        if self.from().category == self.to().category {
            std::mem::swap(&mut self.from, &mut self.to);
        }
    }

    /// Validate the amount and compute the conversion.
    pub fn reading(&self) -> Result<Reading, ReadingError> {
        let amount = parse_amount(&self.amount)?;
        let conversion = convert(amount, self.from, self.to)?;
        Ok(Reading {
            amount,
            from: self.from(),
            to: self.to(),
            conversion,
        })
    }
}

impl Default for ConverterTool {
    fn default() -> Self {
        Self::new()
    }
}

/// First unit of the category other than `taken`, or the category's first
/// unit when it is the only one.
fn default_other(taken: &str, category: misura_units::Category) -> &'static str {
    let ids = UNITS.by_category(category);
    ids.iter()
        .copied()
        .find(|id| *id != taken)
        .or_else(|| ids.first().copied())
        .expect("category has no units")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_reading() {
        let tool = ConverterTool::new();
        let reading = tool.reading().unwrap();
        assert_eq!(reading.amount, 1.0);
        assert_eq!(reading.from.id, "cup_us");
        assert_eq!(reading.to.id, "milliliter");
        assert_relative_eq!(reading.conversion.value, 236.588, max_relative = 1e-5);
    }

    #[test]
    fn test_set_from_retargets_to() {
        let mut tool = ConverterTool::new();
        // cup_us -> milliliter; switching source to a mass unit must pull
        // the target into the mass category
        tool.set_from("gram");
        assert_eq!(tool.from().id, "gram");
        assert_eq!(tool.to().category, misura_units::Category::Mass);
        assert_ne!(tool.to().id, "gram");
    }

    #[test]
    fn test_set_to_retargets_from() {
        let mut tool = ConverterTool::new();
        tool.set_to("kilogram");
        assert_eq!(tool.to().id, "kilogram");
        assert_eq!(tool.from().category, misura_units::Category::Mass);
        assert_ne!(tool.from().id, "kilogram");
    }

    #[test]
    fn test_set_within_category_keeps_other_selector() {
        let mut tool = ConverterTool::new();
        tool.set_from("liter");
        assert_eq!(tool.from().id, "liter");
        assert_eq!(tool.to().id, "milliliter");
    }

    #[test]
    fn test_selection_never_incompatible() {
        let mut tool = ConverterTool::new();
        for id in UNITS.ids() {
            tool.set_from(id);
            assert_eq!(tool.from().category, tool.to().category);
            tool.set_to(id);
            assert_eq!(tool.from().category, tool.to().category);
        }
    }

    #[test]
    fn test_swap() {
        let mut tool = ConverterTool::new();
        tool.swap();
        assert_eq!(tool.from().id, "milliliter");
        assert_eq!(tool.to().id, "cup_us");

        let before = tool.reading().unwrap();
        tool.swap();
        let after = tool.reading().unwrap();
        assert_relative_eq!(before.conversion.ratio * after.conversion.ratio, 1.0);
    }

    #[test]
    fn test_invalid_amount_reported() {
        let mut tool = ConverterTool::new();
        tool.set_amount("three cups");
        assert!(matches!(
            tool.reading(),
            Err(ReadingError::Amount(AmountError::NotANumber(_)))
        ));

        tool.set_amount("-2");
        assert!(matches!(
            tool.reading(),
            Err(ReadingError::Amount(AmountError::Negative(_)))
        ));
    }

    #[test]
    fn test_accepts_aliases() {
        let mut tool = ConverterTool::new();
        tool.set_from("g");
        assert_eq!(tool.from().id, "gram");
    }
}
