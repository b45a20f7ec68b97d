//! Structured conversion errors
//!
//! The lenient converter API never returns these: bad input turns into NaN
//! and unknown units fall back silently. The validated variants of each
//! operation report problems through `ConvertError` instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_STYLE: &str = "UNKNOWN_STYLE";
    pub const WRONG_CATEGORY: &str = "WRONG_CATEGORY";
    pub const INCOMPATIBLE: &str = "INCOMPATIBLE";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Error type for validated conversions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Invalid numeric value: {0}")]
    InvalidValue(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown format style: {0}")]
    UnknownStyle(String),

    #[error("Unit '{unit}' is not a {category} unit")]
    UnitNotInCategory { unit: String, category: String },

    #[error("Cannot compare {from} with {to}")]
    IncompatibleCategories { from: String, to: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConvertError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::InvalidValue(_) => codes::INVALID_VALUE,
            ConvertError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ConvertError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            ConvertError::UnknownStyle(_) => codes::UNKNOWN_STYLE,
            ConvertError::UnitNotInCategory { .. } => codes::WRONG_CATEGORY,
            ConvertError::IncompatibleCategories { .. } => codes::INCOMPATIBLE,
            ConvertError::InvalidConfig(_) => codes::INVALID_CONFIG,
        }
    }

    /// Suggestion for fixing the error, when there is an obvious one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConvertError::InvalidValue(_) => {
                Some("Pass a number or a numeric string such as \"42\" or \"1.5e3\"".to_string())
            }
            ConvertError::UnknownUnit(unit) => Some(format!(
                "Unit names are case-sensitive full names; check the spelling of '{}'",
                unit
            )),
            ConvertError::UnknownCategory(_) => Some(
                "Use one of: time, length, mass, area, volume, data, temperature".to_string(),
            ),
            ConvertError::UnknownStyle(_) => {
                Some("Use one of: compact, scientific, plural".to_string())
            }
            ConvertError::UnitNotInCategory { category, .. } => {
                Some(format!("List valid units with supported_units({})", category))
            }
            ConvertError::IncompatibleCategories { .. } => None,
            ConvertError::InvalidConfig(_) => None,
        }
    }

    /// Serializable snapshot of this error
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Structured error payload for callers that forward errors as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
