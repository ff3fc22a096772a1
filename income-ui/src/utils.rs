use std::sync::LazyLock;

use income_core::calculations::common::{format_indian, to_fixed};
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Message shown when the income field cannot be used.
pub const INVALID_INCOME_MESSAGE: &str = "Please enter a valid income amount";

/// Error returned when the income field is empty, not a number, or not positive.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please enter a valid income amount")]
pub struct ParseIncomeError {
    input: String,
}

impl ParseIncomeError {
    /// The raw text that was rejected.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Optional rupee sign, digits with optional comma grouping, optional fraction.
static INCOME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:₹|Rs\.?)?\s*(\d[\d,]*)(?:\.\d*)?$").expect("income pattern is a valid regex")
});

/// Parses a monthly income typed by the user into whole rupees.
///
/// Accepts an optional `₹` (or `Rs`) prefix and `,` separators
/// (`"₹1,00,000"`, `"25,000"`, `"9000"`). A fractional part is dropped.
/// Empty, non-numeric and zero input is rejected.
pub fn parse_income(s: &str) -> Result<Decimal, ParseIncomeError> {
    let invalid = || {
        tracing::warn!(input = %s, "rejected income input");
        ParseIncomeError {
            input: s.to_string(),
        }
    };

    let captures = INCOME_PATTERN.captures(s.trim()).ok_or_else(invalid)?;
    let digits = captures
        .get(1)
        .map(|m| m.as_str().replace(',', ""))
        .ok_or_else(invalid)?;

    let income: Decimal = digits.parse().map_err(|_| invalid())?;
    if income <= Decimal::ZERO {
        return Err(invalid());
    }

    Ok(income)
}

/// Parses an optional money field; blank input is `None`.
pub fn parse_optional_amount(s: &str) -> Option<Decimal> {
    if s.trim().is_empty() {
        None
    } else {
        parse_income(s).ok()
    }
}

/// Formats a rupee amount with Indian digit grouping, e.g. `₹1,00,000`.
pub fn format_rupees(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-₹{}", format_indian(amount.abs()))
    } else {
        format!("₹{}", format_indian(amount))
    }
}

/// Formats a percentage with one decimal place, e.g. `91.4%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", to_fixed(value, 1))
}

/// Formats a headcount in millions with one decimal place, e.g. `720.0 million`.
pub fn format_millions(count: u64) -> String {
    format!("{} million", to_fixed(Decimal::from(count) / Decimal::from(1_000_000), 1))
}
