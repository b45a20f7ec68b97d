//! Typed converters - a value in a unit of one known category

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;
use toolbox_core::{ConvertError, Numeric};
use crate::catalog::{self, UnitDef};
use crate::format::{render, FormatOptions};
use crate::{Category, Converter};

/// Marker for the category a `Quantity` belongs to
pub trait Kind: Copy + fmt::Debug + 'static {
    const CATEGORY: Category;
}

macro_rules! kinds {
    ($($kind:ident => $category:ident, $alias:ident;)*) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $kind;

            impl Kind for $kind {
                const CATEGORY: Category = Category::$category;
            }

            pub type $alias = Quantity<$kind>;
        )*
    };
}

kinds! {
    TimeKind => Time, Time;
    LengthKind => Length, Length;
    MassKind => Mass, Mass;
    AreaKind => Area, Area;
    VolumeKind => Volume, Volume;
    DataKind => Data, Data;
    TemperatureKind => Temperature, Temperature;
}

/// A value in a unit of category `K`.
///
/// The unit is resolved against the catalog once, at construction.
#[derive(Debug, Clone, Copy)]
pub struct Quantity<K: Kind> {
    value: f64,
    unit: &'static UnitDef,
    kind: PhantomData<K>,
}

impl<K: Kind> Quantity<K> {
    /// Create a quantity; the unit must belong to `K`'s category.
    /// Non-numeric values become NaN.
    pub fn new(value: impl Numeric, unit: &str) -> Result<Self, ConvertError> {
        let def = catalog::lookup(unit).ok_or_else(|| ConvertError::UnknownUnit(unit.to_string()))?;
        if def.category != K::CATEGORY {
            return Err(ConvertError::UnitNotInCategory {
                unit: unit.to_string(),
                category: K::CATEGORY.to_string(),
            });
        }
        Ok(Self::from_def(value.to_numeric(), def))
    }

    /// Create a quantity in the category base unit
    pub fn in_base(value: impl Numeric) -> Self {
        Self::from_def(value.to_numeric(), catalog::base(K::CATEGORY))
    }

    pub(crate) fn from_def(value: f64, unit: &'static UnitDef) -> Self {
        Quantity { value, unit, kind: PhantomData }
    }

    pub fn category(&self) -> Category {
        K::CATEGORY
    }

    pub fn unit_def(&self) -> &'static UnitDef {
        self.unit
    }

    /// Value expressed in the category base unit (Celsius for temperature)
    pub fn to_base(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Value expressed in `target`.
    ///
    /// A target outside this category yields NaN.
    pub fn to(&self, target: &str) -> f64 {
        match self.target(target) {
            Some(def) => self.to_def(def),
            None => {
                tracing::debug!(unit = target, category = K::CATEGORY.name(), "unknown conversion target");
                f64::NAN
            }
        }
    }

    /// Value expressed in `target`, rejecting targets outside this category
    pub fn try_to(&self, target: &str) -> Result<f64, ConvertError> {
        self.resolve(target).map(|def| self.to_def(def))
    }

    /// This quantity re-expressed in `target`
    pub fn in_unit(&self, target: &str) -> Result<Self, ConvertError> {
        self.resolve(target).map(|def| Self::from_def(self.to_def(def), def))
    }

    /// Value in every unit of the category, in catalog order
    pub fn to_all(&self) -> Conversions {
        Conversions {
            entries: catalog::units(K::CATEGORY)
                .iter()
                .map(|def| (def.name, self.to_def(def)))
                .collect(),
        }
    }

    /// Convert to `target` and render it according to `options`
    pub fn format_to(&self, target: &str, options: &FormatOptions) -> String {
        let symbol = self.target(target).map(|def| def.symbol);
        render(self.to(target), target, symbol, options)
    }

    /// `format_to`, rejecting targets outside this category
    pub fn try_format_to(&self, target: &str, options: &FormatOptions) -> Result<String, ConvertError> {
        let def = self.resolve(target)?;
        Ok(render(self.to_def(def), def.name, Some(def.symbol), options))
    }

    /// Re-express in the unit that reads best (values of roughly 1 to 1000).
    /// Temperatures are returned unchanged.
    pub fn simplify(&self) -> Self {
        if K::CATEGORY.is_affine() || !self.value.is_finite() {
            return *self;
        }

        let mut best = *self;
        let mut best_score = score_value(self.value);
        for def in catalog::units(K::CATEGORY) {
            let candidate = self.to_def(def);
            let score = score_value(candidate);
            if score > best_score {
                best_score = score;
                best = Self::from_def(candidate, def);
            }
        }
        best
    }

    /// Compare after converting both sides to the base unit
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.to_base().partial_cmp(&other.to_base())
    }

    fn target(&self, name: &str) -> Option<&'static UnitDef> {
        catalog::lookup_in(K::CATEGORY, name)
    }

    fn resolve(&self, name: &str) -> Result<&'static UnitDef, ConvertError> {
        match catalog::lookup(name) {
            Some(def) if def.category == K::CATEGORY => Ok(def),
            Some(_) => Err(ConvertError::UnitNotInCategory {
                unit: name.to_string(),
                category: K::CATEGORY.to_string(),
            }),
            None => Err(ConvertError::UnknownUnit(name.to_string())),
        }
    }

    fn to_def(&self, def: &UnitDef) -> f64 {
        // Same unit: hand back the value untouched so identity is exact
        if def.name == self.unit.name {
            return self.value;
        }
        def.from_base(self.to_base())
    }
}

/// Score a value based on how "nice" it is for display (1-1000 is ideal)
fn score_value(v: f64) -> f64 {
    let abs_val = v.abs();
    if abs_val == 0.0 {
        return 1.0;
    }

    if (1.0..=1000.0).contains(&abs_val) {
        100.0 - (abs_val.log10() - 1.5).abs() * 10.0
    } else if (0.001..1.0).contains(&abs_val) {
        50.0 - abs_val.log10().abs() * 5.0
    } else if abs_val > 1000.0 && abs_val <= 1_000_000.0 {
        50.0 - (abs_val.log10() - 3.0) * 5.0
    } else {
        10.0
    }
}

impl<K: Kind> Converter for Quantity<K> {
    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> Option<&str> {
        Some(self.unit.name)
    }

    fn with_value(&self, value: f64) -> Self {
        Self::from_def(value, self.unit)
    }
}

impl<K: Kind> Numeric for Quantity<K> {
    fn to_numeric(&self) -> f64 {
        self.value
    }
}

impl<K: Kind> fmt::Display for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl<K: Kind> Serialize for Quantity<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

/// Result of `to_all`: one value per unit, in catalog order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conversions {
    entries: Vec<(&'static str, f64)>,
}

impl Conversions {
    /// Value for a unit name
    pub fn get(&self, unit: &str) -> Option<f64> {
        self.entries.iter().find(|(name, _)| *name == unit).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unit names, in catalog order
    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for Conversions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ============ named shortcuts ============

impl Time {
    pub fn to_milliseconds(&self) -> f64 { self.to("millisecond") }
    pub fn to_seconds(&self) -> f64 { self.to("second") }
    pub fn to_minutes(&self) -> f64 { self.to("minute") }
    pub fn to_hours(&self) -> f64 { self.to("hour") }
    pub fn to_days(&self) -> f64 { self.to("day") }
    pub fn to_weeks(&self) -> f64 { self.to("week") }
    pub fn to_months(&self) -> f64 { self.to("month") }
    pub fn to_years(&self) -> f64 { self.to("year") }
}

impl Length {
    pub fn to_millimeters(&self) -> f64 { self.to("millimeter") }
    pub fn to_centimeters(&self) -> f64 { self.to("centimeter") }
    pub fn to_meters(&self) -> f64 { self.to("meter") }
    pub fn to_kilometers(&self) -> f64 { self.to("kilometer") }
    pub fn to_inches(&self) -> f64 { self.to("inch") }
    pub fn to_feet(&self) -> f64 { self.to("foot") }
    pub fn to_yards(&self) -> f64 { self.to("yard") }
    pub fn to_miles(&self) -> f64 { self.to("mile") }
}

impl Mass {
    pub fn to_milligrams(&self) -> f64 { self.to("milligram") }
    pub fn to_grams(&self) -> f64 { self.to("gram") }
    pub fn to_kilograms(&self) -> f64 { self.to("kilogram") }
    pub fn to_tonnes(&self) -> f64 { self.to("tonne") }
    pub fn to_ounces(&self) -> f64 { self.to("ounce") }
    pub fn to_pounds(&self) -> f64 { self.to("pound") }
    pub fn to_stones(&self) -> f64 { self.to("stone") }
}

impl Area {
    pub fn to_square_meters(&self) -> f64 { self.to("square meter") }
    pub fn to_square_kilometers(&self) -> f64 { self.to("square kilometer") }
    pub fn to_square_feet(&self) -> f64 { self.to("square foot") }
    pub fn to_hectares(&self) -> f64 { self.to("hectare") }
    pub fn to_acres(&self) -> f64 { self.to("acre") }
}

impl Volume {
    pub fn to_milliliters(&self) -> f64 { self.to("milliliter") }
    pub fn to_liters(&self) -> f64 { self.to("liter") }
    pub fn to_cubic_meters(&self) -> f64 { self.to("cubic meter") }
    pub fn to_cups(&self) -> f64 { self.to("cup") }
    pub fn to_gallons(&self) -> f64 { self.to("gallon") }
}

impl Data {
    pub fn to_bits(&self) -> f64 { self.to("bit") }
    pub fn to_bytes(&self) -> f64 { self.to("byte") }
    pub fn to_kilobytes(&self) -> f64 { self.to("kilobyte") }
    pub fn to_megabytes(&self) -> f64 { self.to("megabyte") }
    pub fn to_gigabytes(&self) -> f64 { self.to("gigabyte") }
    pub fn to_terabytes(&self) -> f64 { self.to("terabyte") }
}

impl Temperature {
    pub fn to_celsius(&self) -> f64 { self.to("celsius") }
    pub fn to_fahrenheit(&self) -> f64 { self.to("fahrenheit") }
    pub fn to_kelvin(&self) -> f64 { self.to("kelvin") }
}
