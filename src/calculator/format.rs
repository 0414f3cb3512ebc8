//! Display formatting for calculator results.
//!
//! Every value that reaches the display goes through [`format_number`]. The
//! output is itself a valid expression, so formatting a formatted result again
//! yields the same string.

/// Token shown when a value cannot be displayed.
pub const ERROR_TOKEN: &str = "Error";

/// Magnitudes below this switch to scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-6;
/// Magnitudes above this switch to scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e9;
/// Fractional digits of the scientific mantissa.
const MANTISSA_DIGITS: usize = 8;
/// Significant digits kept in plain notation.
const SIGNIFICANT_DIGITS: usize = 12;

/// Format a number for the calculator display.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TOKEN.to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    if in_plain_range(value) {
        return format_plain(value);
    }

    // Rounding the mantissa can carry a value onto a threshold (9.99999999999e-7
    // becomes 1.00000000e-6); pick the notation from what will be shown.
    let scientific = format_scientific(value);
    match scientific.parse::<f64>() {
        Ok(rounded) if in_plain_range(rounded) => format_plain(rounded),
        _ => scientific,
    }
}

fn in_plain_range(value: f64) -> bool {
    (SCIENTIFIC_LOWER..=SCIENTIFIC_UPPER).contains(&value.abs())
}

/// Scientific notation with a fixed-width mantissa, e.g. `1.50000000e-7`.
///
/// Rust's `LowerExp` already omits the `+` sign and leading exponent zeros.
fn format_scientific(value: f64) -> String {
    format!("{:.*e}", MANTISSA_DIGITS, value)
}

/// Plain decimal notation rounded to twelve significant digits.
fn format_plain(value: f64) -> String {
    // Nudge away from zero by one ulp-ish so values like 0.1 + 0.2 land on the
    // representation a human expects before rounding.
    let nudged = value + value.signum() * value.abs() * f64::EPSILON;
    let rounded = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, nudged);

    match rounded.parse::<f64>() {
        // `Display` for f64 is the shortest round-trip form without exponent.
        Ok(v) if v == 0.0 => "0".to_string(),
        Ok(v) => v.to_string(),
        Err(_) => ERROR_TOKEN.to_string(),
    }
}
