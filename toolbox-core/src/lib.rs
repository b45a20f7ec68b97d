//! Toolbox Core - Fundamental types
//!
//! This crate provides the pieces shared by every Toolbox helper:
//! - `Numeric`: lenient coercion of numbers and numeric strings
//! - `display` / `to_exponential` / `round_to`: JavaScript-compatible rendering
//! - `pluralize`: English plurals for unit names
//! - `ConvertError`: structured errors for the validated APIs

mod number;
mod plural;
mod error;

pub use number::{Numeric, parse_numeric, round_to, display, to_exponential};
pub use plural::{pluralize, plural_of};
pub use error::{ConvertError, ErrorReport, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Numeric, ConvertError};
}
