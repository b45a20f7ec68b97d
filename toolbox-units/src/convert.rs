//! Converter factory
//!
//! `convert` infers the category from the unit name once and returns the
//! matching typed converter wrapped in `Converted`. Unknown units are not
//! an error: they fall back to an untyped `Measure` carrying the tag as-is.

use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Serializer};
use toolbox_core::{ConvertError, Numeric};
use crate::catalog;
use crate::format::{render, FormatOptions};
use crate::quantity::{Area, Conversions, Data, Length, Mass, Temperature, Time, Volume};
use crate::{Category, Converter, Measure, Quantity};

/// Converter returned by the factory: one typed variant per category,
/// or `Untyped` when the unit is missing or unknown.
#[derive(Debug, Clone)]
pub enum Converted {
    Time(Time),
    Length(Length),
    Mass(Mass),
    Area(Area),
    Volume(Volume),
    Data(Data),
    Temperature(Temperature),
    Untyped(Measure),
}

/// Build a converter for `value` in `unit`.
///
/// ```
/// use toolbox_units::{convert, Converter};
///
/// assert_eq!(convert(1500, "meter").to("kilometer"), 1.5);
/// assert_eq!(convert(5, "not-a-real-unit").unit_name(), "not-a-real-unit");
/// assert_eq!(convert(5, None).to_string(), "5");
/// ```
pub fn convert<'a>(value: impl Numeric, unit: impl Into<Option<&'a str>>) -> Converted {
    let value = value.to_numeric();
    let unit = unit.into().filter(|u| !u.is_empty());

    let Some(name) = unit else {
        return Converted::Untyped(Measure::untagged(value));
    };

    match catalog::lookup(name) {
        Some(def) => {
            tracing::trace!(unit = name, category = def.category.name(), "dispatching converter");
            match def.category {
                Category::Time => Converted::Time(Quantity::from_def(value, def)),
                Category::Length => Converted::Length(Quantity::from_def(value, def)),
                Category::Mass => Converted::Mass(Quantity::from_def(value, def)),
                Category::Area => Converted::Area(Quantity::from_def(value, def)),
                Category::Volume => Converted::Volume(Quantity::from_def(value, def)),
                Category::Data => Converted::Data(Quantity::from_def(value, def)),
                Category::Temperature => Converted::Temperature(Quantity::from_def(value, def)),
            }
        }
        None => {
            tracing::debug!(unit = name, "unknown unit, falling back to untyped converter");
            Converted::Untyped(Measure::new(value, Some(name)))
        }
    }
}

/// `convert`, rejecting non-numeric values and unknown units
pub fn try_convert<'a>(value: impl Numeric, unit: impl Into<Option<&'a str>>) -> Result<Converted, ConvertError> {
    let value = value.try_numeric()?;
    match unit.into().filter(|u| !u.is_empty()) {
        Some(name) if catalog::lookup(name).is_none() => Err(ConvertError::UnknownUnit(name.to_string())),
        unit => Ok(convert(value, unit)),
    }
}

/// Apply the same expression to whichever converter is inside
macro_rules! each {
    ($self:expr, $q:ident => $body:expr) => {
        match $self {
            Converted::Time($q) => $body,
            Converted::Length($q) => $body,
            Converted::Mass($q) => $body,
            Converted::Area($q) => $body,
            Converted::Volume($q) => $body,
            Converted::Data($q) => $body,
            Converted::Temperature($q) => $body,
            Converted::Untyped($q) => $body,
        }
    };
}

/// Like `each!`, but rewraps the result in the same variant
macro_rules! map_each {
    ($self:expr, $q:ident => $body:expr) => {
        match $self {
            Converted::Time($q) => Converted::Time($body),
            Converted::Length($q) => Converted::Length($body),
            Converted::Mass($q) => Converted::Mass($body),
            Converted::Area($q) => Converted::Area($body),
            Converted::Volume($q) => Converted::Volume($body),
            Converted::Data($q) => Converted::Data($body),
            Converted::Temperature($q) => Converted::Temperature($body),
            Converted::Untyped($q) => Converted::Untyped($body),
        }
    };
}

/// Same as `each!` for the typed variants; `$untyped` for `Untyped`
macro_rules! each_typed {
    ($self:expr, $q:ident => $body:expr, $untyped:expr) => {
        match $self {
            Converted::Time($q) => $body,
            Converted::Length($q) => $body,
            Converted::Mass($q) => $body,
            Converted::Area($q) => $body,
            Converted::Volume($q) => $body,
            Converted::Data($q) => $body,
            Converted::Temperature($q) => $body,
            Converted::Untyped(_) => $untyped,
        }
    };
}

impl Converted {
    /// Category the unit was inferred to belong to
    pub fn category(&self) -> Option<Category> {
        each_typed!(self, q => Some(q.category()), None)
    }

    pub fn is_typed(&self) -> bool {
        self.category().is_some()
    }

    /// Value expressed in `target`; NaN when the target is not a unit of
    /// this converter's category or the converter is untyped
    pub fn to(&self, target: &str) -> f64 {
        each_typed!(self, q => q.to(target), f64::NAN)
    }

    /// Value expressed in `target`, rejecting targets it cannot reach
    pub fn try_to(&self, target: &str) -> Result<f64, ConvertError> {
        each_typed!(
            self,
            q => q.try_to(target),
            Err(ConvertError::UnknownUnit(target.to_string()))
        )
    }

    /// Value in every unit of the category; empty when untyped
    pub fn to_all(&self) -> Conversions {
        each_typed!(self, q => q.to_all(), Conversions::default())
    }

    /// Convert to `target` and render it according to `options`
    pub fn format_to(&self, target: &str, options: &FormatOptions) -> String {
        each_typed!(
            self,
            q => q.format_to(target, options),
            render(f64::NAN, target, catalog::symbol(target), options)
        )
    }

    /// Re-express in the unit that reads best; untyped values are unchanged
    pub fn simplify(&self) -> Converted {
        match self {
            Converted::Time(q) => Converted::Time(q.simplify()),
            Converted::Length(q) => Converted::Length(q.simplify()),
            Converted::Mass(q) => Converted::Mass(q.simplify()),
            Converted::Area(q) => Converted::Area(q.simplify()),
            Converted::Volume(q) => Converted::Volume(q.simplify()),
            Converted::Data(q) => Converted::Data(q.simplify()),
            Converted::Temperature(q) => Converted::Temperature(q.simplify()),
            Converted::Untyped(m) => Converted::Untyped(m.clone()),
        }
    }

    /// Compare after converting both sides to their base unit.
    ///
    /// Errors when the two converters are of different categories or when
    /// either value is NaN. Untyped converters compare by raw value, and
    /// only with each other.
    pub fn compare(&self, other: &Converted) -> Result<Ordering, ConvertError> {
        let (lhs, rhs) = match (self.category(), other.category()) {
            (Some(a), Some(b)) if a == b => (self.base_value(), other.base_value()),
            (None, None) => (self.value(), other.value()),
            _ => {
                return Err(ConvertError::IncompatibleCategories {
                    from: self.kind_name(),
                    to: other.kind_name(),
                })
            }
        };
        lhs.partial_cmp(&rhs).ok_or_else(|| {
            ConvertError::InvalidValue(format!("cannot order {} and {}", self, other))
        })
    }

    fn base_value(&self) -> f64 {
        each_typed!(self, q => q.to_base(), self.value())
    }

    fn kind_name(&self) -> String {
        match self.category() {
            Some(category) => format!("{} ({})", self.unit_name(), category),
            None => format!("{} (untyped)", self.unit_name()),
        }
    }
}

impl Converter for Converted {
    fn value(&self) -> f64 {
        each!(self, q => q.value())
    }

    fn unit(&self) -> Option<&str> {
        each!(self, q => q.unit())
    }

    fn with_value(&self, value: f64) -> Self {
        map_each!(self, q => q.with_value(value))
    }
}

impl Numeric for Converted {
    fn to_numeric(&self) -> f64 {
        self.value()
    }
}

impl fmt::Display for Converted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Serialize for Converted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

macro_rules! from_variant {
    ($($variant:ident($ty:ty)),*) => {
        $(
            impl From<$ty> for Converted {
                fn from(q: $ty) -> Self {
                    Converted::$variant(q)
                }
            }
        )*
    };
}

from_variant!(
    Time(Time),
    Length(Length),
    Mass(Mass),
    Area(Area),
    Volume(Volume),
    Data(Data),
    Temperature(Temperature),
    Untyped(Measure)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_category() {
        assert!(matches!(convert(1, "second"), Converted::Time(_)));
        assert!(matches!(convert(1, "metre"), Converted::Length(_)));
        assert!(matches!(convert(1, "ounce"), Converted::Mass(_)));
        assert!(matches!(convert(1, "acre"), Converted::Area(_)));
        assert!(matches!(convert(1, "litre"), Converted::Volume(_)));
        assert!(matches!(convert(1, "gigabyte"), Converted::Data(_)));
        assert!(matches!(convert(1, "kelvin"), Converted::Temperature(_)));
        assert!(matches!(convert(1, None), Converted::Untyped(_)));
        assert!(matches!(convert(1, ""), Converted::Untyped(_)));
    }

    #[test]
    fn test_every_catalog_unit_dispatches() {
        for name in catalog::supported_units(None) {
            let c = convert(1, name);
            assert_eq!(c.category(), catalog::category_of(name), "{}", name);
            assert_eq!(c.unit_name(), name);
        }
    }

    #[test]
    fn test_end_to_end_examples() {
        assert_eq!(convert(1500, "meter").to("kilometer"), 1.5);
        assert!((convert(98.6, "fahrenheit").to("celsius") - 37.0).abs() < 0.1);
        assert_eq!(
            convert(2, "hour").format_to("minute", &FormatOptions::default()),
            "120 minutes"
        );
        assert_eq!(
            convert(1, "gigabyte").format_to("megabyte", &FormatOptions::compact()),
            "1024MB"
        );
    }

    #[test]
    fn test_unknown_unit_falls_back() {
        let c = convert(5, "not-a-real-unit");
        assert!(!c.is_typed());
        assert_eq!(c.unit_name(), "not-a-real-unit");
        assert_eq!(c.add(3).value(), 8.0);
        assert_eq!(c.add(3).unit_name(), "not-a-real-unit");
        assert!(c.to("meter").is_nan());
        assert!(c.to_all().is_empty());
        assert_eq!(c.try_to("meter"), Err(ConvertError::UnknownUnit("meter".to_string())));
        assert_eq!(
            convert(1, None).try_to("kilometer"),
            Err(ConvertError::UnknownUnit("kilometer".to_string()))
        );
        assert_eq!(c.to_string(), "5 not-a-real-units");
    }

    #[test]
    fn test_dispatch_under_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(convert(1, "hour").is_typed());
            assert!(!convert(1, "widget").is_typed());
            assert!(convert(1, "hour").to("widget").is_nan());
        });
    }

    #[test]
    fn test_untagged() {
        let c = convert(7, None);
        assert_eq!(c.unit_name(), "unknown");
        assert_eq!(c.unit(), None);
        assert_eq!(c.multiply(2).to_string(), "14");
        assert_eq!(c.to_object().unit, "unknown");
    }

    #[test]
    fn test_numeric_string_and_nan() {
        assert_eq!(convert("1500", "meter").to("kilometer"), 1.5);
        match convert("2", "mile") {
            Converted::Length(miles) => assert!((miles.to_kilometers() - 3.218688).abs() < 1e-9),
            other => panic!("expected a length, got {:?}", other),
        }
        let bad = convert("abc", "meter");
        assert!(bad.value().is_nan());
        assert!(bad.to("kilometer").is_nan());
        assert_eq!(bad.to_string(), "NaN meters");
    }

    #[test]
    fn test_try_convert() {
        assert!(try_convert(1, "meter").is_ok());
        assert!(try_convert(1, None).is_ok());
        assert_eq!(
            try_convert(1, "furlong").unwrap_err(),
            ConvertError::UnknownUnit("furlong".to_string())
        );
        assert_eq!(try_convert("abc", "meter").unwrap_err().code(), "INVALID_VALUE");
    }

    #[test]
    fn test_immutability() {
        let original = convert(10, "kilogram");
        let _ = original.add(1);
        let _ = original.subtract(1);
        let _ = original.multiply(3);
        let _ = original.divide(2);
        let _ = original.round(0);
        let _ = original.abs();
        assert_eq!(original.value(), 10.0);
        assert_eq!(original.unit_name(), "kilogram");
    }

    #[test]
    fn test_transforms_keep_variant() {
        assert!(matches!(convert(3, "mile").multiply(2), Converted::Length(_)));
        assert!(matches!(convert(3, "celsius").round(1), Converted::Temperature(_)));
    }

    #[test]
    fn test_pluralization_boundary() {
        assert_eq!(convert(1, "meter").to_string(), "1 meter");
        assert_eq!(convert(-1, "meter").to_string(), "-1 meter");
        assert_eq!(convert(0, "meter").to_string(), "0 meters");
        assert_eq!(convert(2, "foot").to_string(), "2 feet");
        assert_eq!(convert(3, "millennium").to_string(), "3 millennia");
        assert_eq!(convert(20, "celsius").to_string(), "20 celsius");
    }

    #[test]
    fn test_compare() {
        let mile = convert(1, "mile");
        let meters = convert(2000, "meter");
        assert_eq!(mile.compare(&meters), Ok(Ordering::Less));
        assert!(mile.gt(0.5));

        let err = mile.compare(&convert(1, "kilogram")).unwrap_err();
        assert_eq!(err.code(), "INCOMPATIBLE");

        assert!(convert(f64::NAN, "meter").compare(&meters).is_err());
        assert_eq!(convert(2, None).compare(&convert(1, "widget")), Ok(Ordering::Greater));
    }

    #[test]
    fn test_simplify() {
        let c = convert(90_000, "second").simplify();
        assert_eq!(c.unit_name(), "hour");
        assert_eq!(c.value(), 25.0);
        assert_eq!(convert(5, "widget").simplify().unit_name(), "widget");
    }

    #[test]
    fn test_to_json() {
        let c = convert(1.5, "kilometer");
        assert_eq!(c.to_json(), serde_json::json!({"value": 1.5, "unit": "kilometer"}));
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"value":1.5,"unit":"kilometer"}"#);
    }

    #[test]
    fn test_supported_units() {
        let c = convert(1, None);
        assert_eq!(c.supported_units(Some(Category::Temperature)), vec!["celsius", "fahrenheit", "kelvin"]);
        assert_eq!(c.supported_units(None).len(), catalog::supported_units(None).len());
    }

    #[test]
    fn test_from_typed() {
        let length = Length::new(3, "foot").unwrap();
        let c: Converted = length.into();
        assert_eq!(c.category(), Some(Category::Length));
        assert!((c.to("meter") - 0.9144).abs() < 1e-12);
    }
}
