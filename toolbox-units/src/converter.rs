//! Shared converter behaviour
//!
//! Every converter is an immutable `(value, unit)` pair. Transforming
//! operations build a new value of the same concrete type through
//! `with_value`; the receiver is never modified.

use serde::{Serialize, Deserialize};
use serde_json::json;
use toolbox_core::{round_to, Numeric};
use crate::catalog;
use crate::format::describe;
use crate::Category;

/// Unit reported when a converter carries no unit
pub const UNKNOWN_UNIT: &str = "unknown";

/// Plain `{ value, unit }` snapshot of a converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub value: f64,
    pub unit: String,
}

/// Operations shared by the untyped and the typed converters
pub trait Converter: Sized {
    /// Raw numeric value
    fn value(&self) -> f64;

    /// Unit tag, if one was supplied
    fn unit(&self) -> Option<&str>;

    /// New converter of the same concrete type and unit holding `value`
    fn with_value(&self, value: f64) -> Self;

    /// Unit tag, or `"unknown"` when none was supplied
    fn unit_name(&self) -> &str {
        self.unit().unwrap_or(UNKNOWN_UNIT)
    }

    fn add(&self, operand: impl Numeric) -> Self {
        self.with_value(self.value() + operand.to_numeric())
    }

    fn subtract(&self, operand: impl Numeric) -> Self {
        self.with_value(self.value() - operand.to_numeric())
    }

    fn multiply(&self, operand: impl Numeric) -> Self {
        self.with_value(self.value() * operand.to_numeric())
    }

    /// Division by zero yields an infinity or NaN, never an error
    fn divide(&self, operand: impl Numeric) -> Self {
        self.with_value(self.value() / operand.to_numeric())
    }

    fn round(&self, decimals: u32) -> Self {
        self.with_value(round_to(self.value(), decimals))
    }

    fn abs(&self) -> Self {
        self.with_value(self.value().abs())
    }

    // Comparisons look at the raw value only; units are not reconciled.

    fn gt(&self, other: impl Numeric) -> bool {
        self.value() > other.to_numeric()
    }

    fn lt(&self, other: impl Numeric) -> bool {
        self.value() < other.to_numeric()
    }

    fn eq(&self, other: impl Numeric) -> bool {
        self.value() == other.to_numeric()
    }

    /// Value plus pluralized unit, or the bare number without a unit
    fn format(&self) -> String {
        describe(self.value(), self.unit())
    }

    fn to_object(&self) -> Snapshot {
        Snapshot {
            value: self.value(),
            unit: self.unit_name().to_string(),
        }
    }

    /// JSON form of the snapshot; non-finite values become `null`
    fn to_json(&self) -> serde_json::Value {
        json!({
            "value": self.value(),
            "unit": self.unit_name(),
        })
    }

    /// Unit names of one category, or of every category when `None`
    fn supported_units(&self, category: Option<Category>) -> Vec<&'static str> {
        catalog::supported_units(category)
    }
}
