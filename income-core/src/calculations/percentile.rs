//! Income → cumulative population percentile.
//!
//! Brackets lying wholly below the income contribute their full share. The
//! bracket containing the income contributes a share proportional to how far
//! the income sits between its bounds. The open-ended top bracket has no
//! width to interpolate over, so an income inside it contributes that
//! bracket's whole share. The result never exceeds
//! [`PERCENTILE_CEILING`](crate::distribution::PERCENTILE_CEILING).

use rust_decimal::Decimal;

use crate::IncomeBracket;
use crate::distribution::{NATIONAL_DISTRIBUTION, PERCENTILE_CEILING};

/// Percentile of `income` within the national distribution.
///
/// The caller is expected to pass a finite, positive income. Negative
/// incomes yield `0`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::compute_percentile;
///
/// assert_eq!(compute_percentile(dec!(9000)), dec!(50));
/// assert_eq!(compute_percentile(dec!(12000)), dec!(64));
/// assert_eq!(compute_percentile(dec!(500000)), dec!(99.9));
/// ```
pub fn compute_percentile(income: Decimal) -> Decimal {
    percentile_in(&NATIONAL_DISTRIBUTION, income)
}

/// Percentile of `income` within an arbitrary ascending bracket table.
pub fn percentile_in(
    brackets: &[IncomeBracket],
    income: Decimal,
) -> Decimal {
    let mut percentile = Decimal::ZERO;

    for bracket in brackets {
        match bracket.max_income {
            Some(max) if income > max => {
                percentile += bracket.population_share;
            }
            Some(max) if income >= bracket.min_income => {
                percentile += bracket.population_share * (income - bracket.min_income)
                    / (max - bracket.min_income);
                break;
            }
            None if income >= bracket.min_income => {
                percentile += bracket.population_share;
                break;
            }
            _ => break,
        }
    }

    percentile.min(PERCENTILE_CEILING)
}
