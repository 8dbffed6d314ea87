//! en-US number and currency formatting for the printable summary.

use crate::domain::foundation::ValueRange;

/// Placeholder shown for ranges that cannot be formatted.
pub const MISSING_VALUE: &str = "—";

/// Formats a dollar amount with no fraction digits: `$12,345`.
pub fn format_currency(value: f64) -> String {
    format_currency_with(value, 0)
}

/// Formats a dollar amount with at most `max_fraction_digits` decimals.
pub fn format_currency_with(value: f64, max_fraction_digits: usize) -> String {
    let digits = format_decimal(value.abs(), max_fraction_digits);
    if is_negative(value, max_fraction_digits) {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Formats a plain number with at most one decimal: `1,234.5`.
pub fn format_number(value: f64) -> String {
    let digits = format_decimal(value.abs(), 1);
    if is_negative(value, 1) {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Formats `min – max` with `fmt`, collapsing to one value when both ends
/// print the same. Non-finite ends give [`MISSING_VALUE`].
pub fn format_range(range: ValueRange, fmt: fn(f64) -> String) -> String {
    if !range.is_finite() {
        return MISSING_VALUE.to_string();
    }
    let min = fmt(range.min);
    let max = fmt(range.max);
    if min == max {
        min
    } else {
        format!("{} – {}", min, max)
    }
}

/// Whether `value` still shows a sign after rounding.
fn is_negative(value: f64, max_fraction_digits: usize) -> bool {
    value < 0.0 && round_to(value.abs(), max_fraction_digits) > 0.0
}

fn round_to(value: f64, max_fraction_digits: usize) -> f64 {
    let factor = 10f64.powi(max_fraction_digits as i32);
    (value * factor).round() / factor
}

/// Rounds half away from zero, trims trailing zeros and groups thousands.
fn format_decimal(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return "∞".to_string();
    }

    let rounded = round_to(value, max_fraction_digits);
    let text = format!("{:.*}", max_fraction_digits, rounded);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (text.as_str(), ""),
    };

    let grouped = group_thousands(int_part);
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
