//! Amount type for expense values
//!
//! Wraps an `f64` so the ledger keeps exactly the precision the user typed.
//! No rounding happens on storage or export; rounding to two places is only
//! applied when formatting for display.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::LedgerError;

/// A spending amount, currency-agnostic
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Parse an expense amount from user input
    ///
    /// Accepts anything `f64` parses ("12", "12.50", "1e3") after trimming.
    /// Non-finite values are rejected as unparseable, and the value must be
    /// strictly greater than zero.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(LedgerError::InvalidAmount(trimmed.to_string()));
        }

        if value <= 0.0 {
            return Err(LedgerError::NonPositiveAmount(value));
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol and two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

/// Canonical text form: shortest round-tripping digits, always with a
/// fractional part (`900.0`, `42.5`).
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if text.contains('.') {
            f.write_str(&text)
        } else {
            write!(f, "{}.0", text)
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("12.50").unwrap().value(), 12.5);
        assert_eq!(Amount::parse("10").unwrap().value(), 10.0);
        assert_eq!(Amount::parse("  7.25 ").unwrap().value(), 7.25);
        assert_eq!(Amount::parse("1e3").unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Amount::parse("abc"),
            Err(LedgerError::InvalidAmount("abc".into()))
        );
        assert_eq!(Amount::parse(""), Err(LedgerError::InvalidAmount("".into())));
        assert_eq!(
            Amount::parse("$10"),
            Err(LedgerError::InvalidAmount("$10".into()))
        );
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            Amount::parse("inf"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::parse("NaN"),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(Amount::parse("0"), Err(LedgerError::NonPositiveAmount(0.0)));
        assert_eq!(
            Amount::parse("-3.5"),
            Err(LedgerError::NonPositiveAmount(-3.5))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount(900.0).to_string(), "900.0");
        assert_eq!(Amount(42.5).to_string(), "42.5");
        assert_eq!(Amount(0.1).to_string(), "0.1");
        assert_eq!(Amount(12.345).to_string(), "12.345");
    }

    #[test]
    fn test_display_round_trips() {
        for value in [0.1, 19.99, 1234.5678, 1e-7, 3.0] {
            let text = Amount(value).to_string();
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Amount(915.0).format_with_symbol("$"), "$915.00");
        assert_eq!(Amount(4.5).format_with_symbol("€"), "€4.50");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount(10.0), Amount(5.0), Amount(900.0)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), 915.0);
        let empty: Amount = Vec::<Amount>::new().into_iter().sum();
        assert!(empty.is_zero());
    }
}
