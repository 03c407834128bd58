//! Display formatting
//!
//! The core performs no rounding; these helpers implement the display
//! policy: converted values get at most four fraction digits with grouped
//! thousands, the exchange ratio gets four significant digits.

use misura_units::Unit;

/// Format a converted value with grouped thousands and at most
/// `max_fraction_digits` fraction digits, trailing zeros trimmed.
pub fn format_value(value: f64, max_fraction_digits: usize) -> String {
    let fixed = format!("{value:.max_fraction_digits$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format the exchange ratio to four significant digits.
pub fn format_ratio(ratio: f64) -> String {
    format_significant(ratio, 4)
}

/// One-line "1 source ≈ r target" summary for a computed ratio.
pub fn approx_line(from: &Unit, to: &Unit, ratio: f64) -> String {
    format!("1 {} ≈ {} {}", from.symbol, format_ratio(ratio), to.symbol)
}

fn format_significant(value: f64, digits: i32) -> String {
    if value == 0.0 {
        return format!("{:.*}", (digits - 1) as usize, 0.0);
    }
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - exponent).max(0) as usize;
    format!("{value:.decimals$}")
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut out = String::from(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
