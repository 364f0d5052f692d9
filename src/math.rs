//! Math utility functions.

use num_traits::Float;

/// Truncate `value` toward zero and clamp it to `[min, max]`.
///
/// The bounds are returned as given, so a fractional bound is kept intact.
/// NaN clamps to `min`.
pub fn clamp<T: Float>(min: T, max: T, value: T) -> T {
    if value.is_nan() {
        return min;
    }

    let value = value.trunc();
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Map a value in `[0, 1]` to its opposite end of the range.
pub fn invert<T: Float>(value: T) -> T {
    T::one() - value
}

/// Parse the leading base-10 integer of `text`.
///
/// Leading whitespace and a single sign are accepted and everything after
/// the first non-digit is ignored, so `" 12px"` is `12` and `"-3.9"` is `-3`.
/// Returns `None` if no digit leads the text.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    Some(if negative { -value } else { value })
}
