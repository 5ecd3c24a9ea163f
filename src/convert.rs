//! Conversions between numbers and text: permissive numeral parsing, default
//! formatting, human-readable byte sizes, binary strings and English
//! ordinals.
//!
//! The parsers deliberately mirror C-style numeral scanning: they consume the
//! longest leading numeral and fall back to zero on fully non-numeric input,
//! they never signal an error.

use std::fmt;
use std::mem;

use num_traits::{Float, PrimInt, ToPrimitive};

/// Parses the leading integer numeral of the text.
///
/// Leading whitespace is skipped, a single sign is honored, and scanning
/// stops at the first non-digit. A value that does not fit in `T` saturates;
/// fully non-numeric input yields zero.
///
/// # Examples
///
/// ```
/// # use textfold::convert::parse_integer;
/// assert_eq!(parse_integer::<i32>("  -17px"), -17);
/// assert_eq!(parse_integer::<u8>("junk"), 0);
/// ```
pub fn parse_integer<T: PrimInt>(text: &str) -> T {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    let mut value: i128 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = i128::from(bytes[i] - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
        i += 1;
    }
    if negative {
        value = -value;
    }

    T::from(value).unwrap_or_else(|| if negative { T::min_value() } else { T::max_value() })
}

/// Parses the leading floating-point numeral of the text.
///
/// Accepts a sign, a fraction and a well-formed exponent; a dangling `e` is
/// not consumed. Fully non-numeric input yields zero.
pub fn parse_float<T: Float>(text: &str) -> T {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() && bytes[start].is_ascii_whitespace() {
        start += 1;
    }

    let mut end = start;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits > 0 && end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        let exponent_digits = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_digits {
            end = cursor;
        }
    }

    let parsed = text[start..end].parse::<f64>().unwrap_or(0.0);
    T::from(parsed).unwrap_or_else(T::zero)
}

/// Formats a value with its default formatting rules.
pub fn format_value<T: fmt::Display>(value: T) -> String {
    value.to_string()
}

/// Checks whether the text is an integer numeral: every character a digit,
/// except for an optional leading sign. Empty text is not a number.
pub fn is_number(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .enumerate()
            .all(|(i, b)| b.is_ascii_digit() || (i == 0 && (b == b'+' || b == b'-')))
}

/// The units of [`human_readable_size`], from bytes to terabytes.
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats an amount of bytes as a human-readable size.
///
/// The value is divided by 1024 while it stays at or above 1024 and a larger
/// unit remains, then printed with two decimals.
///
/// # Examples
///
/// ```
/// # use textfold::convert::human_readable_size;
/// assert_eq!(human_readable_size(1024), "1.00 KB");
/// assert_eq!(human_readable_size(0), "0.00 B");
/// ```
pub fn human_readable_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// Formats the low `length` bits of a value, most-significant bit first,
/// zero-padded to exactly `length` characters.
///
/// `length` is clamped to the bit width of `T`.
pub fn to_binary_string<T: PrimInt>(value: T, length: usize) -> String {
    let length = length.min(8 * mem::size_of::<T>());
    let mut binary = String::with_capacity(length);
    for bit in (0..length).rev() {
        let set = (value >> bit) & T::one() == T::one();
        binary.push(if set { '1' } else { '0' });
    }
    binary
}

/// Formats a value followed by its English ordinal suffix.
///
/// The teens (11 to 13 modulo 100) always take "th".
///
/// # Examples
///
/// ```
/// # use textfold::convert::ordinal;
/// assert_eq!(ordinal(21), "21st");
/// assert_eq!(ordinal(11), "11th");
/// ```
pub fn ordinal<T: PrimInt + fmt::Display>(value: T) -> String {
    let residue = value.to_i128().unwrap_or(0).abs();
    let suffix = match (residue % 100, residue % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", value, suffix)
}
