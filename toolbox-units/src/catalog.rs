//! Unit catalog - static unit tables per category
//!
//! Tables are declared in display order; that order is what `to_all` and
//! `supported_units` report. Synonyms such as `liter`/`litre` are separate
//! entries with the same scale, never aliases.

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::Category;

/// How a unit maps onto its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// base = value * factor
    Factor(f64),
    /// base = (value - offset) * num / den
    ///
    /// The ratio is kept as two terms so `9/5` is applied as written
    /// rather than through a rounded `5/9` factor.
    Affine { num: f64, den: f64, offset: f64 },
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Full unit name (e.g., "kilometer")
    pub name: &'static str,
    /// Compact label (e.g., "km")
    pub symbol: &'static str,
    pub category: Category,
    pub scale: Scale,
}

impl UnitDef {
    /// Create a unit with proportional conversion
    pub const fn linear(name: &'static str, symbol: &'static str, category: Category, factor: f64) -> Self {
        UnitDef { name, symbol, category, scale: Scale::Factor(factor) }
    }

    /// Create a unit with offset (temperature)
    pub const fn affine(
        name: &'static str,
        symbol: &'static str,
        category: Category,
        num: f64,
        den: f64,
        offset: f64,
    ) -> Self {
        UnitDef { name, symbol, category, scale: Scale::Affine { num, den, offset } }
    }

    /// Convert a value in this unit to the category base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Factor(factor) => value * factor,
            Scale::Affine { num, den, offset } => (value - offset) * num / den,
        }
    }

    /// Convert a value in the category base unit to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        match self.scale {
            Scale::Factor(factor) => base / factor,
            Scale::Affine { num, den, offset } => base * den / num + offset,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        match self.scale {
            Scale::Factor(factor) => factor == 1.0,
            Scale::Affine { num, den, offset } => num == den && offset == 0.0,
        }
    }
}

use Category::*;

const KIB: f64 = 1024.0;

static TIME_UNITS: [UnitDef; 13] = [
    UnitDef::linear("nanosecond", "ns", Time, 1e-9),
    UnitDef::linear("microsecond", "μs", Time, 1e-6),
    UnitDef::linear("millisecond", "ms", Time, 1e-3),
    UnitDef::linear("second", "s", Time, 1.0),
    UnitDef::linear("minute", "min", Time, 60.0),
    UnitDef::linear("hour", "h", Time, 3_600.0),
    UnitDef::linear("day", "d", Time, 86_400.0),
    UnitDef::linear("week", "wk", Time, 604_800.0),
    UnitDef::linear("month", "mo", Time, 2_629_746.0), // average Gregorian month
    UnitDef::linear("year", "yr", Time, 31_556_952.0), // average Gregorian year
    UnitDef::linear("decade", "dec", Time, 315_569_520.0),
    UnitDef::linear("century", "c", Time, 3_155_695_200.0),
    UnitDef::linear("millennium", "ka", Time, 31_556_952_000.0),
];

static LENGTH_UNITS: [UnitDef; 13] = [
    UnitDef::linear("nanometer", "nm", Length, 1e-9),
    UnitDef::linear("micrometer", "μm", Length, 1e-6),
    UnitDef::linear("millimeter", "mm", Length, 1e-3),
    UnitDef::linear("centimeter", "cm", Length, 1e-2),
    UnitDef::linear("decimeter", "dm", Length, 0.1),
    UnitDef::linear("meter", "m", Length, 1.0),
    UnitDef::linear("metre", "m", Length, 1.0),
    UnitDef::linear("kilometer", "km", Length, 1_000.0),
    UnitDef::linear("inch", "in", Length, 0.0254),
    UnitDef::linear("foot", "ft", Length, 0.3048),
    UnitDef::linear("yard", "yd", Length, 0.9144),
    UnitDef::linear("mile", "mi", Length, 1_609.344),
    UnitDef::linear("nautical mile", "nmi", Length, 1_852.0),
];

static MASS_UNITS: [UnitDef; 9] = [
    UnitDef::linear("microgram", "μg", Mass, 1e-9),
    UnitDef::linear("milligram", "mg", Mass, 1e-6),
    UnitDef::linear("gram", "g", Mass, 1e-3),
    UnitDef::linear("kilogram", "kg", Mass, 1.0),
    UnitDef::linear("tonne", "t", Mass, 1_000.0),
    UnitDef::linear("ounce", "oz", Mass, 0.028349523125),
    UnitDef::linear("pound", "lb", Mass, 0.45359237),
    UnitDef::linear("stone", "st", Mass, 6.35029318),
    UnitDef::linear("short ton", "tn", Mass, 907.18474),
];

static AREA_UNITS: [UnitDef; 10] = [
    UnitDef::linear("square millimeter", "mm²", Area, 1e-6),
    UnitDef::linear("square centimeter", "cm²", Area, 1e-4),
    UnitDef::linear("square meter", "m²", Area, 1.0),
    UnitDef::linear("hectare", "ha", Area, 10_000.0),
    UnitDef::linear("square kilometer", "km²", Area, 1_000_000.0),
    UnitDef::linear("square inch", "in²", Area, 0.00064516),
    UnitDef::linear("square foot", "ft²", Area, 0.09290304),
    UnitDef::linear("square yard", "yd²", Area, 0.83612736),
    UnitDef::linear("acre", "ac", Area, 4_046.8564224),
    UnitDef::linear("square mile", "mi²", Area, 2_589_988.110336),
];

// US customary for the fluid measures
static VOLUME_UNITS: [UnitDef; 16] = [
    UnitDef::linear("milliliter", "mL", Volume, 1e-6),
    UnitDef::linear("centiliter", "cL", Volume, 1e-5),
    UnitDef::linear("deciliter", "dL", Volume, 1e-4),
    UnitDef::linear("liter", "L", Volume, 1e-3),
    UnitDef::linear("litre", "L", Volume, 1e-3),
    UnitDef::linear("cubic centimeter", "cm³", Volume, 1e-6),
    UnitDef::linear("cubic meter", "m³", Volume, 1.0),
    UnitDef::linear("teaspoon", "tsp", Volume, 0.00000492892159375),
    UnitDef::linear("tablespoon", "tbsp", Volume, 0.00001478676478125),
    UnitDef::linear("fluid ounce", "fl oz", Volume, 0.0000295735295625),
    UnitDef::linear("cup", "cup", Volume, 0.0002365882365),
    UnitDef::linear("pint", "pt", Volume, 0.000473176473),
    UnitDef::linear("quart", "qt", Volume, 0.000946352946),
    UnitDef::linear("gallon", "gal", Volume, 0.003785411784),
    UnitDef::linear("cubic inch", "in³", Volume, 0.000016387064),
    UnitDef::linear("cubic foot", "ft³", Volume, 0.028316846592),
];

// Binary multiples: a kilobyte is 1024 bytes
static DATA_UNITS: [UnitDef; 7] = [
    UnitDef::linear("bit", "b", Data, 0.125),
    UnitDef::linear("byte", "B", Data, 1.0),
    UnitDef::linear("kilobyte", "KB", Data, KIB),
    UnitDef::linear("megabyte", "MB", Data, KIB * KIB),
    UnitDef::linear("gigabyte", "GB", Data, KIB * KIB * KIB),
    UnitDef::linear("terabyte", "TB", Data, KIB * KIB * KIB * KIB),
    UnitDef::linear("petabyte", "PB", Data, KIB * KIB * KIB * KIB * KIB),
];

// Celsius is the pivot: C = (value - offset) * factor
static TEMPERATURE_UNITS: [UnitDef; 3] = [
    UnitDef::affine("celsius", "°C", Temperature, 1.0, 1.0, 0.0),
    UnitDef::affine("fahrenheit", "°F", Temperature, 5.0, 9.0, 32.0),
    UnitDef::affine("kelvin", "K", Temperature, 1.0, 1.0, 273.15),
];

/// Global index from unit name to catalog entry
static INDEX: LazyLock<HashMap<&'static str, &'static UnitDef>> = LazyLock::new(|| {
    Category::ALL
        .into_iter()
        .flat_map(units)
        .map(|unit| (unit.name, unit))
        .collect()
});

/// All units of a category, in declaration order
pub fn units(category: Category) -> &'static [UnitDef] {
    match category {
        Time => &TIME_UNITS,
        Length => &LENGTH_UNITS,
        Mass => &MASS_UNITS,
        Area => &AREA_UNITS,
        Volume => &VOLUME_UNITS,
        Data => &DATA_UNITS,
        Temperature => &TEMPERATURE_UNITS,
    }
}

/// The base unit entry of a category
pub fn base(category: Category) -> &'static UnitDef {
    match category {
        Time => &TIME_UNITS[3],
        Length => &LENGTH_UNITS[5],
        Mass => &MASS_UNITS[3],
        Area => &AREA_UNITS[2],
        Volume => &VOLUME_UNITS[6],
        Data => &DATA_UNITS[1],
        Temperature => &TEMPERATURE_UNITS[0],
    }
}

/// Look up a unit by exact, case-sensitive name
pub fn lookup(name: &str) -> Option<&'static UnitDef> {
    INDEX.get(name).copied()
}

/// Look up a unit only if it belongs to `category`
pub fn lookup_in(category: Category, name: &str) -> Option<&'static UnitDef> {
    lookup(name).filter(|unit| unit.category == category)
}

/// Infer the category a unit name belongs to
pub fn category_of(name: &str) -> Option<Category> {
    lookup(name).map(|unit| unit.category)
}

/// Compact label for a unit name
pub fn symbol(name: &str) -> Option<&'static str> {
    lookup(name).map(|unit| unit.symbol)
}

/// Unit names of one category, or of every category when `None`
pub fn supported_units(category: Option<Category>) -> Vec<&'static str> {
    match category {
        Some(category) => units(category).iter().map(|u| u.name).collect(),
        None => Category::ALL
            .into_iter()
            .flat_map(units)
            .map(|u| u.name)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup() {
        let km = lookup("kilometer").unwrap();
        assert_eq!(km.category, Length);
        assert_eq!(km.symbol, "km");
        assert_eq!(km.to_base(1.5), 1500.0);

        assert!(lookup("Kilometer").is_none());
        assert!(lookup("km").is_none());
        assert!(lookup("unknown_xyz").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let all = supported_units(None);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(INDEX.len(), all.len());
    }

    #[test]
    fn test_exactly_one_base_per_category() {
        for category in Category::ALL {
            let bases: Vec<_> = units(category).iter().filter(|u| u.is_base()).collect();
            assert_eq!(bases.len(), 1 + synonyms_of_base(category), "{}", category);
            assert!(base(category).is_base());
            assert_eq!(base(category).name, category.base_unit());
            assert_eq!(base(category).category, category);
        }
    }

    fn synonyms_of_base(category: Category) -> usize {
        // "metre" shares the meter's factor
        if category == Length { 1 } else { 0 }
    }

    #[test]
    fn test_factors_are_positive() {
        for unit in supported_units(None).into_iter().filter_map(lookup) {
            match unit.scale {
                Scale::Factor(f) => assert!(f > 0.0, "{}", unit.name),
                Scale::Affine { num, den, .. } => assert!(num > 0.0 && den > 0.0, "{}", unit.name),
            }
        }
    }

    #[test]
    fn test_synonyms_share_scale() {
        assert_eq!(lookup("liter").unwrap().scale, lookup("litre").unwrap().scale);
        assert_eq!(lookup("meter").unwrap().scale, lookup("metre").unwrap().scale);
    }

    #[test]
    fn test_temperature_affine() {
        let f = lookup("fahrenheit").unwrap();
        assert!((f.to_base(212.0) - 100.0).abs() < 1e-9);
        assert!((f.from_base(100.0) - 212.0).abs() < 1e-9);
        // C * 9 / 5 + 32 and (F - 32) * 5 / 9, operation for operation
        assert_eq!(f.from_base(36.6), 36.6 * 9.0 / 5.0 + 32.0);
        assert_eq!(f.from_base(36.6), 97.88000000000001);
        assert_eq!(f.to_base(451.0), (451.0 - 32.0) * 5.0 / 9.0);
        assert_eq!(f.to_base(451.0), 232.77777777777777);

        let k = lookup("kelvin").unwrap();
        assert_eq!(k.from_base(0.0), 273.15);
        assert!((k.to_base(273.15)).abs() < 1e-9);
    }

    #[test]
    fn test_supported_units_order() {
        let temps = supported_units(Some(Temperature));
        assert_eq!(temps, vec!["celsius", "fahrenheit", "kelvin"]);

        let all = supported_units(None);
        assert_eq!(all.first(), Some(&"nanosecond"));
        assert_eq!(all.last(), Some(&"kelvin"));
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("gigabyte"), Some(Data));
        assert_eq!(category_of("acre"), Some(Area));
        assert_eq!(category_of("parsec"), None);
        assert_eq!(symbol("megabyte"), Some("MB"));
    }
}
