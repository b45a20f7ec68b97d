//! Formatting options and rendering of converted values

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use toolbox_core::{display, pluralize, round_to, to_exponential, ConvertError};

/// Default number of decimals for `format_to`
pub const DEFAULT_DECIMALS: u32 = 2;

/// How `format_to` renders a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// "1024MB": rounded value and compact label, no space
    Compact,
    /// "1.50e+3 meter": exponential form of the unrounded value
    Scientific,
    /// "120 minutes": rounded value and pluralized unit name
    #[default]
    Plural,
}

impl FormatStyle {
    pub fn name(&self) -> &'static str {
        match self {
            FormatStyle::Compact => "compact",
            FormatStyle::Scientific => "scientific",
            FormatStyle::Plural => "plural",
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FormatStyle {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(FormatStyle::Compact),
            "scientific" => Ok(FormatStyle::Scientific),
            "plural" => Ok(FormatStyle::Plural),
            other => Err(ConvertError::UnknownStyle(other.to_string())),
        }
    }
}

/// Options for `format_to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub style: FormatStyle,
    pub decimals: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: FormatStyle::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self::default().with_style(FormatStyle::Compact)
    }

    pub fn scientific() -> Self {
        Self::default().with_style(FormatStyle::Scientific)
    }

    pub fn with_style(mut self, style: FormatStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Load options from JSON such as `{"style": "compact", "decimals": 0}`.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::InvalidConfig(e.to_string()))
    }
}

/// Render `value` expressed in `unit`.
///
/// `symbol` is the compact label; when the unit has none, compact style
/// falls back to the unit name.
pub fn render(value: f64, unit: &str, symbol: Option<&str>, options: &FormatOptions) -> String {
    match options.style {
        FormatStyle::Compact => {
            let rounded = round_to(value, options.decimals);
            format!("{}{}", display(rounded), symbol.unwrap_or(unit))
        }
        FormatStyle::Scientific => {
            format!("{} {}", to_exponential(value, options.decimals), unit)
        }
        FormatStyle::Plural => {
            let rounded = round_to(value, options.decimals);
            format!("{} {}", display(rounded), pluralize(unit, rounded))
        }
    }
}

/// Default human-readable form: unrounded value and pluralized unit, or
/// the bare number when there is no unit.
pub fn describe(value: f64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{} {}", display(value), pluralize(unit, value)),
        _ => display(value),
    }
}
