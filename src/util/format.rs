//! Display formatting and input validation for prices, clock times, and
//! numeric form fields.
//!
//! Inputs are read the way browser form values are read: numbers pass
//! through, strings are parsed with JavaScript `parseFloat` rules so that
//! `"3.1"`, `" 42kW"` and `"abc"` behave exactly as they do in page scripts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::consts::CURRENCY_SYMBOL;

/// A value that can be read as a number the way a form field is read.
pub trait NumericInput {
    fn to_number(&self) -> f64;
}

impl NumericInput for f64 {
    fn to_number(&self) -> f64 {
        *self
    }
}

impl NumericInput for f32 {
    fn to_number(&self) -> f64 {
        f64::from(*self)
    }
}

impl NumericInput for i32 {
    fn to_number(&self) -> f64 {
        f64::from(*self)
    }
}

impl NumericInput for u32 {
    fn to_number(&self) -> f64 {
        f64::from(*self)
    }
}

impl NumericInput for str {
    fn to_number(&self) -> f64 {
        parse_float(self)
    }
}

impl NumericInput for String {
    fn to_number(&self) -> f64 {
        parse_float(self)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

/// Inclusive bounds for [`validate_number`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

impl NumberRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range with the given lower bound and no upper bound.
    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::at_least(0.0)
    }
}

/// Format an amount as rupees with exactly two decimals, e.g. `₹5.00`.
pub fn format_currency(amount: impl NumericInput) -> String {
    format!("{CURRENCY_SYMBOL}{}", to_fixed(amount.to_number(), 2))
}

/// Format an hour/minute pair on a 12-hour clock, e.g. `1:05 PM`.
///
/// Midnight and noon display as `12`. Pass `0` for `minute` to format a
/// whole hour.
pub fn format_time(hour: i32, minute: i32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {period}")
}

/// Whether `value` reads as a number inside `range` (bounds inclusive).
pub fn validate_number(value: impl NumericInput, range: NumberRange) -> bool {
    let num = value.to_number();
    !num.is_nan() && num >= range.min && num <= range.max
}

/// Render `value` with a fixed number of decimals, matching JavaScript
/// `Number.prototype.toFixed`: exact halfway values round away from zero,
/// non-finite values render as `NaN` / `Infinity`, and `-0` renders as `0`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }
    if is_halfway(value.abs(), digits) {
        return format!("{sign}{}", round_half_up(value.abs(), digits));
    }
    // Adding zero folds -0.0 into 0.0.
    format!("{:.digits$}", value + 0.0)
}

/// Whether `magnitude` sits exactly between two neighbours at `digits`
/// decimals. Those are the odd multiples of `2^-(digits + 1)`.
#[allow(clippy::float_cmp)]
fn is_halfway(magnitude: f64, digits: usize) -> bool {
    let Ok(exp) = i32::try_from(digits + 1) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exp);
    scaled % 2.0 == 1.0
}

/// Round a halfway `magnitude` up. Its exact expansion ends with a `5` at
/// decimal `digits + 1`; drop it and increment what is left.
fn round_half_up(magnitude: f64, digits: usize) -> String {
    let padded = format!("{magnitude:.prec$}", prec = digits + 1);
    let mut text = padded.into_bytes();
    text.pop();
    if digits == 0 {
        text.pop();
    }
    let mut carry = true;
    for byte in text.iter_mut().rev().filter(|b| **b != b'.') {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }
    if carry {
        text.insert(0, b'1');
    }
    text.into_iter().map(char::from).collect()
}

/// Parse the longest numeric prefix of `raw`, following JavaScript
/// `parseFloat`. Returns `NaN` when no prefix is a number.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
