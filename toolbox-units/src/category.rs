//! Measurement categories
//!
//! Every unit belongs to exactly one category, and every category has one
//! base unit that all of its factors are expressed against.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use toolbox_core::ConvertError;

/// A measurement domain with its own unit set and base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Time,
    Length,
    Mass,
    Area,
    Volume,
    Data,
    Temperature,
}

impl Category {
    /// All categories, in catalog declaration order
    pub const ALL: [Category; 7] = [
        Category::Time,
        Category::Length,
        Category::Mass,
        Category::Area,
        Category::Volume,
        Category::Data,
        Category::Temperature,
    ];

    /// Lowercase category name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Time => "time",
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Data => "data",
            Category::Temperature => "temperature",
        }
    }

    /// Name of the unit every factor in this category is relative to.
    ///
    /// Temperature has no multiplicative base; Celsius is the pivot its
    /// affine formulas go through.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Time => "second",
            Category::Length => "meter",
            Category::Mass => "kilogram",
            Category::Area => "square meter",
            Category::Volume => "cubic meter",
            Category::Data => "byte",
            Category::Temperature => "celsius",
        }
    }

    /// Whether conversions need an offset as well as a scale
    pub fn is_affine(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Length".parse::<Category>().is_err());
        assert_eq!(
            "speed".parse::<Category>(),
            Err(ConvertError::UnknownCategory("speed".to_string()))
        );
    }

    #[test]
    fn test_only_temperature_is_affine() {
        let affine: Vec<_> = Category::ALL.into_iter().filter(|c| c.is_affine()).collect();
        assert_eq!(affine, vec![Category::Temperature]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::Volume), "volume");
        assert_eq!(Category::Area.base_unit(), "square meter");
    }
}
