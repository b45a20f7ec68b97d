//! Toolbox Units - Typed unit conversion
//!
//! Converts plain numbers between units of the same category and formats
//! the result for display.
//!
//! Categories:
//! - Time (ns, ms, s, min, h, d, wk, mo, yr, ...)
//! - Length (mm, cm, m, km, in, ft, yd, mi, ...)
//! - Mass (mg, g, kg, t, oz, lb, st, ...)
//! - Area (m², km², ft², ha, ac, ...)
//! - Volume (mL, L, m³, cup, gal, ...)
//! - Data (bit, B, KB, MB, GB, TB, PB)
//! - Temperature (°C, °F, K)
//!
//! ```
//! use toolbox_units::{convert, Converter, FormatOptions};
//!
//! let distance = convert(1500, "meter");
//! assert_eq!(distance.to("kilometer"), 1.5);
//! assert_eq!(distance.add(500).to_string(), "2000 meters");
//! assert_eq!(
//!     convert(2, "hour").format_to("minute", &FormatOptions::default()),
//!     "120 minutes"
//! );
//! ```

mod category;
pub mod catalog;
mod converter;
mod measure;
mod quantity;
mod format;
mod convert;

pub use category::Category;
pub use catalog::{Scale, UnitDef, lookup, category_of, supported_units};
pub use converter::{Converter, Snapshot, UNKNOWN_UNIT};
pub use measure::Measure;
pub use quantity::{
    Quantity, Kind, Conversions,
    TimeKind, LengthKind, MassKind, AreaKind, VolumeKind, DataKind, TemperatureKind,
    Time, Length, Mass, Area, Volume, Data, Temperature,
};
pub use format::{FormatOptions, FormatStyle, DEFAULT_DECIMALS, render};
pub use convert::{convert, try_convert, Converted};

pub use toolbox_core::{ConvertError, ErrorReport, Numeric};
