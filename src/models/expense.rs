//! Expense model and entry validation
//!
//! An `Expense` can only be obtained through [`validate`], so every value of
//! this type holds a non-empty category, a positive amount and a real date.

use chrono::NaiveDate;
use std::fmt;

use super::amount::Amount;
use crate::error::{LedgerError, LedgerResult};

/// Canonical date format for input and export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single validated spending record
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    category: String,
    amount: Amount,
    date: NaiveDate,
}

impl Expense {
    /// The category label, as entered (trimmed)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The spent amount
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The calendar date of the expense
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date in canonical `YYYY-MM-DD` form
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.category, self.amount, self.date_string())
    }
}

/// Turn raw form input into an [`Expense`] or the first rejection reason.
///
/// Fields are checked in the order amount, date, category.
pub fn validate(category: &str, amount: &str, date: &str) -> LedgerResult<Expense> {
    let amount = Amount::parse(amount)?;
    let date = parse_date(date)?;

    let category = category.trim();
    if category.is_empty() {
        return Err(LedgerError::EmptyCategory);
    }

    Ok(Expense {
        category: category.to_string(),
        amount,
        date,
    })
}

/// Parse a date strictly in `YYYY-MM-DD` form.
///
/// chrono alone accepts unpadded fields like `2024-1-5`, so the shape is
/// checked first.
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    let trimmed = s.trim();
    let invalid = || LedgerError::InvalidDate(trimmed.to_string());

    let bytes = trimmed.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let expense = validate("Food", "12.50", "2024-03-01").unwrap();
        assert_eq!(expense.category(), "Food");
        assert_eq!(expense.amount().value(), 12.5);
        assert_eq!(expense.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(expense.date_string(), "2024-03-01");
    }

    #[test]
    fn test_trims_fields() {
        let expense = validate("  Rent \t", " 900 ", " 2024-01-05 ").unwrap();
        assert_eq!(expense.category(), "Rent");
        assert_eq!(expense.amount().value(), 900.0);
        assert_eq!(expense.date_string(), "2024-01-05");
    }

    #[test]
    fn test_keeps_category_case_and_inner_spaces() {
        let expense = validate("eating  Out", "3", "2024-01-01").unwrap();
        assert_eq!(expense.category(), "eating  Out");
    }

    #[test]
    fn test_empty_category() {
        assert_eq!(
            validate("", "10", "2024-01-01"),
            Err(LedgerError::EmptyCategory)
        );
        assert_eq!(
            validate("   ", "10", "2024-01-01"),
            Err(LedgerError::EmptyCategory)
        );
    }

    #[test]
    fn test_non_positive_amount() {
        assert_eq!(
            validate("Food", "0", "2024-01-01"),
            Err(LedgerError::NonPositiveAmount(0.0))
        );
        assert!(matches!(
            validate("Food", "-1", "2024-01-01"),
            Err(LedgerError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_invalid_amount() {
        assert_eq!(
            validate("Food", "abc", "2024-01-01"),
            Err(LedgerError::InvalidAmount("abc".into()))
        );
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            validate("Food", "10", "2024-13-40"),
            Err(LedgerError::InvalidDate("2024-13-40".into()))
        );
        for bad in ["2023-02-29", "2024-1-5", "24-01-05", "2024/01/05", "", "2024-01-05x"] {
            assert!(
                matches!(validate("Food", "10", bad), Err(LedgerError::InvalidDate(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_leap_day() {
        assert!(validate("Food", "10", "2024-02-29").is_ok());
    }

    #[test]
    fn test_reports_single_first_failure() {
        // every field is bad; amount is checked first
        assert!(matches!(
            validate("", "abc", "nope"),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate("", "5", "nope"),
            Err(LedgerError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_display() {
        let expense = validate("Food", "42.5", "2024-01-06").unwrap();
        assert_eq!(expense.to_string(), "Food 42.5 on 2024-01-06");
    }
}
