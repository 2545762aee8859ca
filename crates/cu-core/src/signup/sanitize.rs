//! Input sanitizers applied while the user types in the date-of-birth fields.
//!
//! Both functions are pure and idempotent: `f(f(x)) == f(x)`.

const DAY_MAX_DIGITS: usize = 2;
const YEAR_MAX_DIGITS: usize = 4;
const DAY_MIN: u32 = 1;
const DAY_MAX: u32 = 31;

fn digits_only(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// Sanitize the day-of-month input.
///
/// Keeps at most two digits and clamps the value into `1..=31`, padding with
/// zeros back to the kept digit count. A single `0` is an incomplete entry and
/// yields an empty string.
pub fn sanitize_day(raw: &str) -> String {
    let digits = digits_only(raw, DAY_MAX_DIGITS);
    if digits.is_empty() {
        return String::new();
    }

    let value = digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    if value == 0 && digits.len() < DAY_MAX_DIGITS {
        return String::new();
    }

    let clamped = value.clamp(DAY_MIN, DAY_MAX);
    format!("{clamped:0width$}", width = digits.len())
}

/// Sanitize the year input: digits only, at most four of them.
pub fn sanitize_year(raw: &str) -> String {
    digits_only(raw, YEAR_MAX_DIGITS)
}
