//! Numeric coercion and rendering
//!
//! Values are plain IEEE-754 doubles. Coercion is lenient: anything that
//! does not read as a number becomes NaN, and NaN flows through every
//! later operation. Rendering follows the JavaScript `Number` formatting
//! rules so "120", "1.5" and "1e+21" come out the way callers expect.

use crate::ConvertError;

/// A value that can be coerced into a number
pub trait Numeric {
    /// Coerce to a number; input that is not numeric becomes NaN.
    fn to_numeric(&self) -> f64;

    /// Coerce to a number, rejecting input that is not numeric.
    fn try_numeric(&self) -> Result<f64, ConvertError> {
        let n = self.to_numeric();
        if n.is_nan() {
            Err(ConvertError::InvalidValue(display(n)))
        } else {
            Ok(n)
        }
    }
}

macro_rules! numeric_primitive {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_numeric(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

numeric_primitive!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Numeric for str {
    fn to_numeric(&self) -> f64 {
        parse_numeric(self)
    }

    fn try_numeric(&self) -> Result<f64, ConvertError> {
        let n = parse_numeric(self);
        if n.is_nan() {
            Err(ConvertError::InvalidValue(format!("'{}'", self)))
        } else {
            Ok(n)
        }
    }
}

impl Numeric for String {
    fn to_numeric(&self) -> f64 {
        self.as_str().to_numeric()
    }

    fn try_numeric(&self) -> Result<f64, ConvertError> {
        self.as_str().try_numeric()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_numeric(&self) -> f64 {
        (**self).to_numeric()
    }

    fn try_numeric(&self) -> Result<f64, ConvertError> {
        (**self).try_numeric()
    }
}

/// Parse a numeric string the way JavaScript's `Number()` does.
///
/// Surrounding whitespace is ignored, an empty string is zero, `Infinity`
/// and the `0x`/`0o`/`0b` prefixes are understood, and anything else that
/// is not a decimal literal is NaN.
pub fn parse_numeric(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust's float parser also takes "inf" and "nan" spellings
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return parse_prefixed(s).unwrap_or(f64::NAN);
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse "0x1F", "0o17", "0b101"
fn parse_prefixed(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64)
}

/// Round half up to a number of decimal places (JavaScript `Math.round`
/// semantics, so -2.5 rounds to -2).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals.min(300) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / factor
}

fn round_half_up(x: f64) -> f64 {
    let r = x.round();
    if x - r == 0.5 {
        r + 1.0
    } else {
        r
    }
}

/// Render a number the way JavaScript's `String(number)` does.
pub fn display(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return infinity(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        return signed_exponent(format!("{:e}", value));
    }
    format!("{}", value)
}

/// Extra mantissa digits formatted before rounding by hand. A double
/// that is not an exact tie differs from one well before this depth.
const GUARD_DIGITS: usize = 25;

/// Render a number in exponential notation with a fixed number of
/// fraction digits, like JavaScript's `toExponential(digits)`.
///
/// Exact ties round away from zero (`2.5` -> `"3e+0"`), where Rust's own
/// `{:e}` precision would round them to even.
pub fn to_exponential(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return infinity(value);
    }

    let digits = digits.min(100) as usize;
    let wide = format!("{:.*e}", digits + GUARD_DIGITS, value.abs());
    let Some((mantissa, exp)) = wide.split_once('e') else {
        return signed_exponent(format!("{:.*e}", digits, value));
    };
    let mut exp: i32 = exp.parse().unwrap_or(0);
    let mut kept: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let round_up = kept.get(digits + 1).is_some_and(|d| *d >= b'5');
    kept.truncate(digits + 1);
    if round_up && round_up_digits(&mut kept) {
        // 9.99 -> 10.0: keep the digit count, shift the exponent
        kept.insert(0, b'1');
        kept.pop();
        exp += 1;
    }

    let mut out = String::with_capacity(digits + 8);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in kept.iter().enumerate() {
        if i == 1 {
            out.push('.');
        }
        out.push(*d as char);
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&exp.abs().to_string());
    out
}

/// Add one to the last digit, carrying left. Returns true when the carry
/// runs off the front.
fn round_up_digits(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn infinity(value: f64) -> String {
    if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// Rust writes "1.5e3"; JavaScript writes "1.5e+3".
fn signed_exponent(s: String) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}
