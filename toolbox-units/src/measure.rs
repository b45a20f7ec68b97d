//! Untyped converter - a value with an optional, unchecked unit tag

use std::fmt;
use serde::{Serialize, Serializer};
use toolbox_core::{ConvertError, Numeric};
use crate::Converter;

/// A number with an optional unit tag that no category claims.
///
/// Arithmetic works as usual; formatting uses the tag verbatim.
#[derive(Debug, Clone, Default)]
pub struct Measure {
    value: f64,
    unit: Option<String>,
}

impl Measure {
    /// Create a measure; non-numeric input becomes NaN
    pub fn new(value: impl Numeric, unit: Option<&str>) -> Self {
        Measure {
            value: value.to_numeric(),
            unit: unit.filter(|u| !u.is_empty()).map(str::to_string),
        }
    }

    /// Create a measure without a unit
    pub fn untagged(value: impl Numeric) -> Self {
        Measure::new(value, None)
    }

    /// Create a measure, rejecting non-numeric input
    pub fn try_new(value: impl Numeric, unit: Option<&str>) -> Result<Self, ConvertError> {
        let value = value.try_numeric()?;
        Ok(Measure::new(value, unit))
    }
}

impl Converter for Measure {
    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    fn with_value(&self, value: f64) -> Self {
        Measure {
            value,
            unit: self.unit.clone(),
        }
    }
}

impl Numeric for Measure {
    fn to_numeric(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_object().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged() {
        let m = Measure::untagged(42);
        assert_eq!(m.value(), 42.0);
        assert_eq!(m.unit(), None);
        assert_eq!(m.unit_name(), "unknown");
        assert_eq!(m.to_string(), "42");
    }

    #[test]
    fn test_numeric_string() {
        let m = Measure::new("2.5", Some("furlong"));
        assert_eq!(m.value(), 2.5);
        assert_eq!(m.to_string(), "2.5 furlongs");
    }

    #[test]
    fn test_invalid_value_is_nan() {
        let m = Measure::untagged("twelve");
        assert!(m.value().is_nan());
        assert!(m.add(3).value().is_nan());
        assert!(Measure::try_new("twelve", None).is_err());
    }

    #[test]
    fn test_arithmetic_is_immutable() {
        let m = Measure::new(10, Some("widget"));
        let sum = m.add(5);
        let diff = m.subtract("4");
        let product = m.multiply(3);
        let quotient = m.divide(4);

        assert_eq!(m.value(), 10.0);
        assert_eq!(m.unit_name(), "widget");
        assert_eq!(sum.value(), 15.0);
        assert_eq!(diff.value(), 6.0);
        assert_eq!(product.value(), 30.0);
        assert_eq!(quotient.value(), 2.5);
        assert_eq!(sum.unit_name(), "widget");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Measure::untagged(1).divide(0).value(), f64::INFINITY);
        assert_eq!(Measure::untagged(-1).divide(0).value(), f64::NEG_INFINITY);
        assert!(Measure::untagged(0).divide(0).value().is_nan());
    }

    #[test]
    fn test_round_and_abs() {
        let m = Measure::untagged(-3.14159);
        assert_eq!(m.round(2).value(), -3.14);
        assert_eq!(m.abs().value(), 3.14159);
        assert_eq!(m.value(), -3.14159);
    }

    #[test]
    fn test_comparisons() {
        let m = Measure::untagged(5);
        assert!(m.gt(4));
        assert!(m.lt("6"));
        assert!(m.eq(5.0));
        assert!(!m.eq(Measure::untagged(6)));
        assert!(m.gt(&Measure::untagged(1)));
    }

    #[test]
    fn test_snapshot() {
        let m = Measure::new(3, Some("crate"));
        let snapshot = m.to_object();
        assert_eq!(snapshot.value, 3.0);
        assert_eq!(snapshot.unit, "crate");

        let untagged = Measure::untagged(1).to_json();
        assert_eq!(untagged, serde_json::json!({"value": 1.0, "unit": "unknown"}));
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"value":3.0,"unit":"crate"}"#);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let json = Measure::untagged("x").to_json();
        assert!(json["value"].is_null());
    }
}
