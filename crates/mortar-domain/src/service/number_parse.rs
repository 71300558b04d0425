//! Lenient number parsing for form text
//!
//! Form fields are free text. Parsing takes the longest numeric prefix and
//! ignores whatever follows, so `"4m"` reads as 4 and `"abc"` as NaN.

use mortar_types::{Error, Result};

/// Largest room count the form will build
pub const MAX_ROOM_COUNT: usize = u32::MAX as usize;

/// Whitespace skipped before a number: Unicode white space and BOM, but not NEL
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Parse a decimal number from the start of `text`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent, or `Infinity`. Returns NaN when
/// no number prefix is present.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start_matches(is_form_whitespace);
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut i = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }

    if s[i..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - i - 1;
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when it has digits ("1e" reads as 1)
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the room count entry
///
/// Empty text counts as `"0"`. The integer prefix is read in base 10, or
/// base 16 after a `0x` prefix; fractions are truncated. Text without digits
/// means zero rooms. Negative counts are errors, as are counts above
/// `max_rooms` when a limit is set, or above [`MAX_ROOM_COUNT`] otherwise.
pub fn parse_room_count(text: &str, max_rooms: Option<usize>) -> Result<usize> {
    let source = if text.is_empty() { "0" } else { text };
    let s = source.trim_start_matches(is_form_whitespace);

    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if unsigned.starts_with("0x") || unsigned.starts_with("0X") {
        (16, &unsigned[2..])
    } else {
        (10, unsigned)
    };

    let mut value: Option<u64> = None;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        let acc = value.unwrap_or(0);
        value = Some(acc.saturating_mul(u64::from(radix)).saturating_add(u64::from(d)));
    }

    let Some(count) = value else {
        return Ok(0);
    };

    if negative && count != 0 {
        return Err(Error::InvalidRoomCount(text.to_string()));
    }
    let max = max_rooms.unwrap_or(MAX_ROOM_COUNT).min(MAX_ROOM_COUNT);
    if count > max as u64 {
        return Err(Error::RoomCountTooLarge { count, max });
    }

    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("4"), 4.0);
        assert_eq!(parse_float("2.5"), 2.5);
        assert_eq!(parse_float("-0.15"), -0.15);
        assert_eq!(parse_float("+3"), 3.0);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("4m"), 4.0);
        assert_eq!(parse_float("  3.5 meters"), 3.5);
        assert_eq!(parse_float("1.2.3"), 1.2);
        assert_eq!(parse_float("0x10"), 0.0);
    }

    #[test]
    fn test_parse_float_partial_forms() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2E-1x"), 0.2);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityfoo"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn test_parse_float_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("   ").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
    }

    #[test]
    fn test_parse_float_skips_unicode_space_but_not_nel() {
        assert_eq!(parse_float("\u{a0}\u{feff}\u{2003}4"), 4.0);
        assert!(parse_float("\u{85}4").is_nan());
        assert_eq!(parse_room_count("\u{85}3", None).unwrap(), 0);
    }

    #[test]
    fn test_room_count_basic() {
        assert_eq!(parse_room_count("3", None).unwrap(), 3);
        assert_eq!(parse_room_count(" 12 ", None).unwrap(), 12);
        assert_eq!(parse_room_count("2.7", None).unwrap(), 2);
        assert_eq!(parse_room_count("0x0A", None).unwrap(), 10);
    }

    #[test]
    fn test_room_count_non_numeric_is_zero() {
        assert_eq!(parse_room_count("", None).unwrap(), 0);
        assert_eq!(parse_room_count("abc", None).unwrap(), 0);
        assert_eq!(parse_room_count("-", None).unwrap(), 0);
        assert_eq!(parse_room_count("-0", None).unwrap(), 0);
    }

    #[test]
    fn test_room_count_negative_rejected() {
        let err = parse_room_count("-2", None).unwrap_err();
        assert!(matches!(err, Error::InvalidRoomCount(ref s) if s == "-2"));
    }

    #[test]
    fn test_room_count_has_no_default_limit() {
        assert_eq!(parse_room_count("150", None).unwrap(), 150);
        assert_eq!(parse_room_count("100000", None).unwrap(), 100_000);
        assert_eq!(parse_room_count("4294967295", None).unwrap(), MAX_ROOM_COUNT);
    }

    #[test]
    fn test_room_count_overflow_rejected() {
        let err = parse_room_count("4294967296", None).unwrap_err();
        assert!(matches!(err, Error::RoomCountTooLarge { count: 4294967296, .. }));
        assert!(parse_room_count("99999999999999999999999", None).is_err());
    }

    #[test]
    fn test_room_count_configured_limit() {
        assert_eq!(parse_room_count("5", Some(5)).unwrap(), 5);
        let err = parse_room_count("6", Some(5)).unwrap_err();
        assert!(matches!(err, Error::RoomCountTooLarge { count: 6, max: 5 }));
    }
}
