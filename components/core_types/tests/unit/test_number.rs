//! Unit tests for numeric string conversion

use core_types::number::{format_number, string_to_number};
use proptest::prelude::*;

#[test]
fn test_whitespace_padded_hex() {
    assert_eq!(string_to_number(" 0x1f "), 31.0);
}

#[test]
fn test_negative_zero_formats_as_zero() {
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(f64::NAN), "NaN");
}

proptest! {
    /// Integers print without a fractional part.
    #[test]
    fn integers_format_plainly(n in any::<i32>()) {
        prop_assert_eq!(format_number(n as f64), n.to_string());
    }

    /// Decimal integer strings parse back to their value.
    #[test]
    fn integer_strings_parse(n in -(1i64 << 53)..(1i64 << 53)) {
        prop_assert_eq!(string_to_number(&n.to_string()), n as f64);
    }

    /// Letters other than a radix prefix or exponent never parse.
    #[test]
    fn alphabetic_strings_are_nan(s in "[g-wyz]{1,8}") {
        prop_assert!(string_to_number(&s).is_nan());
    }
}
