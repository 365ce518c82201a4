//! Host number conversions.
//!
//! [`string_to_number`] follows the host's `Number(string)` grammar and
//! [`format_number`] its `String(number)` rendering.

use regex::Regex;
use std::sync::OnceLock;

fn decimal_literal() -> &'static Regex {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$")
            .expect("decimal literal pattern is valid")
    })
}

/// Host whitespace: Unicode `White_Space` minus NEL, plus the byte order mark.
fn is_host_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Convert a string to a number the way `Number(string)` does.
///
/// Surrounding whitespace is ignored and a blank string is `0`. Accepts
/// signed decimal literals, signed `Infinity`, and unsigned `0x`/`0o`/`0b`
/// integer literals. Everything else is NaN.
///
/// # Examples
///
/// ```
/// use core_types::number::string_to_number;
///
/// assert_eq!(string_to_number(" 42 "), 42.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert_eq!(string_to_number("0x1F"), 31.0);
/// assert!(string_to_number("12px").is_nan());
/// assert!(string_to_number("inf").is_nan());
/// ```
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_host_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    if let Some(value) = radix_literal(s) {
        return value;
    }

    if !decimal_literal().is_match(s) {
        return f64::NAN;
    }

    if let Some(unsigned) = s.strip_suffix("Infinity") {
        return if unsigned == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

/// Render a number the way `String(number)` does.
///
/// # Examples
///
/// ```
/// use core_types::number::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        return format!("{}", n as i64);
    }

    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(n);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            if (-6..0).contains(&exponent) {
                expand_small(mantissa, exponent)
            } else if (0..21).contains(&exponent) {
                expand_large(mantissa, exponent)
            } else if exponent >= 0 {
                format!("{}e+{}", mantissa, exponent)
            } else {
                format!("{}e{}", mantissa, exponent)
            }
        }
        None => shortest.strip_suffix(".0").unwrap_or(shortest).to_string(),
    }
}

/// 2^53; integers below this print exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Spell out `mantissa * 10^exponent` for exponents below 21, padding the
/// shortest digits with zeros.
fn expand_large(mantissa: &str, exponent: i32) -> String {
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let int_len = exponent as usize + 1;
    if digits.len() > int_len {
        format!("{}{}.{}", sign, &digits[..int_len], &digits[int_len..])
    } else {
        format!("{}{}{}", sign, digits, "0".repeat(int_len - digits.len()))
    }
}

/// Spell out `mantissa * 10^exponent` for small negative exponents.
fn expand_small(mantissa: &str, exponent: i32) -> String {
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let zeros = "0".repeat((-exponent - 1) as usize);
    format!("{}0.{}{}", sign, zeros, digits)
}
