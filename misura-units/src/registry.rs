//! Unit definitions - the recipe units, organized by category

use std::collections::HashMap;
use std::ops::Index;
use std::sync::LazyLock;
use crate::{Category, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units.
///
/// Built once, never mutated. The set of valid identifiers is closed and
/// known at build time, so indexing with an unknown id panics; use [`get`]
/// for untrusted input.
///
/// [`get`]: UnitRegistry::get
pub struct UnitRegistry {
    units: HashMap<&'static str, Unit>,
    aliases: HashMap<&'static str, &'static str>,
    order: HashMap<Category, Vec<&'static str>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
            order: HashMap::new(),
        };
        registry.register_mass_units();
        registry.register_volume_units();
        registry
    }

    /// Get a unit by id or alias
    pub fn get(&self, id: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(id) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(id) {
            return self.units.get(canonical);
        }
        None
    }

    /// Unit ids in a category, in display order
    pub fn by_category(&self, category: Category) -> &[&'static str] {
        self.order.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories in display order
    pub fn categories(&self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter()
    }

    /// All unit ids, grouped by category in display order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories().flat_map(|c| self.by_category(c).iter().copied())
    }

    fn register(&mut self, unit: Unit) {
        self.order.entry(unit.category).or_default().push(unit.id);
        self.units.insert(unit.id, unit);
    }

    fn alias(&mut self, alias: &'static str, id: &'static str) {
        self.aliases.insert(alias, id);
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::new("milligram", "milligram", "mg", Category::Mass, 0.001));
        self.register(Unit::new("gram", "gram", "g", Category::Mass, 1.0));
        self.register(Unit::new("kilogram", "kilogram", "kg", Category::Mass, 1000.0));
        self.register(Unit::new("ounce", "ounce", "oz", Category::Mass, 28.349523125));
        self.register(Unit::new("pound", "pound", "lb", Category::Mass, 453.59237));

        self.alias("mg", "milligram");
        self.alias("milligrams", "milligram");
        self.alias("g", "gram");
        self.alias("grams", "gram");
        self.alias("kg", "kilogram");
        self.alias("kilograms", "kilogram");
        self.alias("oz", "ounce");
        self.alias("ounces", "ounce");
        self.alias("lb", "pound");
        self.alias("lbs", "pound");
        self.alias("pounds", "pound");
    }

    fn register_volume_units(&mut self) {
        self.register(Unit::new("milliliter", "milliliter", "ml", Category::Volume, 1.0));
        self.register(Unit::new("liter", "liter", "L", Category::Volume, 1000.0));
        self.register(Unit::new("teaspoon_us", "US teaspoon", "tsp", Category::Volume, 4.92892159375));
        self.register(Unit::new("tablespoon_us", "US tablespoon", "tbsp", Category::Volume, 14.78676478125));
        self.register(Unit::new("fluid_ounce_us", "US fluid ounce", "fl oz", Category::Volume, 29.5735295625));
        self.register(Unit::new("cup_us", "US cup", "cup", Category::Volume, 236.5882365));
        self.register(Unit::new("pint_us", "US pint", "pt", Category::Volume, 473.176473));
        self.register(Unit::new("quart_us", "US quart", "qt", Category::Volume, 946.352946));
        self.register(Unit::new("gallon_us", "US gallon", "gal", Category::Volume, 3785.411784));
        self.register(Unit::new("teaspoon_metric", "metric teaspoon", "tsp (metric)", Category::Volume, 5.0));
        self.register(Unit::new("tablespoon_metric", "metric tablespoon", "tbsp (metric)", Category::Volume, 15.0));
        self.register(Unit::new("cup_metric", "metric cup", "cup (metric)", Category::Volume, 250.0));

        self.alias("ml", "milliliter");
        self.alias("milliliters", "milliliter");
        self.alias("l", "liter");
        self.alias("L", "liter");
        self.alias("liters", "liter");
        self.alias("litre", "liter");
        self.alias("litres", "liter");
        self.alias("tsp", "teaspoon_us");
        self.alias("teaspoon", "teaspoon_us");
        self.alias("teaspoons", "teaspoon_us");
        self.alias("tbsp", "tablespoon_us");
        self.alias("tablespoon", "tablespoon_us");
        self.alias("tablespoons", "tablespoon_us");
        self.alias("floz", "fluid_ounce_us");
        self.alias("fluid ounce", "fluid_ounce_us");
        self.alias("cup", "cup_us");
        self.alias("cups", "cup_us");
        self.alias("pt", "pint_us");
        self.alias("pint", "pint_us");
        self.alias("pints", "pint_us");
        self.alias("qt", "quart_us");
        self.alias("quart", "quart_us");
        self.alias("quarts", "quart_us");
        self.alias("gal", "gallon_us");
        self.alias("gallon", "gallon_us");
        self.alias("gallons", "gallon_us");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<&str> for UnitRegistry {
    type Output = Unit;

    fn index(&self, id: &str) -> &Unit {
        self.get(id).unwrap_or_else(|| panic!("unknown unit id: {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_registry() {
        let reg = UnitRegistry::new();

        assert!(reg.get("gram").is_some());
        assert!(reg.get("cup_us").is_some());
        assert!(reg.get("milliliter").is_some());

        // Alias lookup
        assert!(reg.get("g").is_some());
        assert!(reg.get("cups").is_some());
        assert!(reg.get("ml").is_some());

        // Unknown unit
        assert!(reg.get("furlong").is_none());
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.get("cups").unwrap().id, "cup_us");
        assert_eq!(reg.get("lbs").unwrap().id, "pound");
    }

    #[test]
    fn test_index_known_unit() {
        assert_eq!(UNITS["gram"].ratio_to_base, 1.0);
        assert_eq!(UNITS["kilogram"].ratio_to_base, 1000.0);
    }

    #[test]
    #[should_panic(expected = "unknown unit id")]
    fn test_index_unknown_unit_panics() {
        let _ = UNITS["furlong"];
    }

    #[test]
    fn test_by_category_order_is_stable() {
        let reg = UnitRegistry::new();

        let mass = reg.by_category(Category::Mass);
        assert_eq!(mass[0], "milligram");
        assert_eq!(mass[1], "gram");
        assert_eq!(mass.last(), Some(&"pound"));

        let volume = reg.by_category(Category::Volume);
        assert_eq!(volume[0], "milliliter");
        assert!(volume.contains(&"cup_us"));
    }

    #[test]
    fn test_categories_are_disjoint() {
        let reg = UnitRegistry::new();
        for id in reg.by_category(Category::Mass).iter().copied() {
            assert_eq!(reg[id].category, Category::Mass);
            assert!(!reg.by_category(Category::Volume).contains(&id));
        }
        for id in reg.by_category(Category::Volume).iter().copied() {
            assert_eq!(reg[id].category, Category::Volume);
        }
    }

    #[test]
    fn test_ratios_positive_finite() {
        let reg = UnitRegistry::new();
        for id in reg.ids() {
            let unit = &reg[id];
            assert!(unit.ratio_to_base.is_finite(), "{id} ratio not finite");
            assert!(unit.ratio_to_base > 0.0, "{id} ratio not positive");
        }
    }

    #[test]
    fn test_base_units_have_ratio_one() {
        let reg = UnitRegistry::new();
        for category in reg.categories() {
            let base = &reg[category.base_unit()];
            assert_eq!(base.category, category);
            assert!(base.is_base());
        }
    }
}
