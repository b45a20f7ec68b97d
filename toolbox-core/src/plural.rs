//! English pluralization for unit names

/// Plurals looked up before any suffix rule
static IRREGULAR: [(&str, &str); 1] = [
    ("millennium", "millennia"),
];

/// Names whose plural is the singular
static INVARIANT: [&str; 4] = [
    "stone",
    "celsius",
    "fahrenheit",
    "kelvin",
];

/// The form of `unit` to use next to `value`.
///
/// Only an absolute value of exactly one takes the singular; zero,
/// fractions and NaN all take the plural.
pub fn pluralize(unit: &str, value: f64) -> String {
    if value.abs() == 1.0 {
        unit.to_string()
    } else {
        plural_of(unit)
    }
}

/// Plural form of a unit name.
///
/// The irregular table wins, then the invariant set, then the suffix
/// rules in order: `foot` -> `feet`, `inch` -> `inches`, consonant + `y`
/// -> `ies`, otherwise a plain `s`.
pub fn plural_of(unit: &str) -> String {
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == unit) {
        return plural.to_string();
    }
    if INVARIANT.contains(&unit) {
        return unit.to_string();
    }

    if let Some(stem) = unit.strip_suffix("foot") {
        return format!("{}feet", stem);
    }
    if unit.ends_with("inch") {
        return format!("{}es", unit);
    }
    if let Some(stem) = unit.strip_suffix('y') {
        if stem.chars().last().is_some_and(is_consonant) {
            return format!("{}ies", stem);
        }
    }
    format!("{}s", unit)
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
