//! Amount input validation
//!
//! The conversion function assumes a validated, non-negative, finite
//! amount. Raw user text is filtered here before the core is invoked.

use thiserror::Error;

/// Why an amount string was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount '{0}' is not a number")]
    NotANumber(String),
    #[error("amount must be a finite number")]
    NotFinite,
    #[error("amount must be non-negative, got {0}")]
    Negative(f64),
}

/// Parse raw amount text into a validated non-negative amount.
pub fn parse_amount(text: &str) -> Result<f64, AmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;

    // f64::parse accepts "NaN" and "inf"; neither is a usable amount
    if !value.is_finite() {
        return Err(AmountError::NotFinite);
    }
    if value < 0.0 {
        return Err(AmountError::Negative(value));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1"), Ok(1.0));
        assert_eq!(parse_amount("1.5"), Ok(1.5));
        assert_eq!(parse_amount("  2.25  "), Ok(2.25));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            parse_amount("a cup"),
            Err(AmountError::NotANumber("a cup".to_string()))
        );
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        assert_eq!(parse_amount("NaN"), Err(AmountError::NotFinite));
        assert_eq!(parse_amount("inf"), Err(AmountError::NotFinite));
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(parse_amount("-1"), Err(AmountError::Negative(-1.0)));
    }
}
