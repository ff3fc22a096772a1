//! India's monthly income distribution (2023-24) and its structural checks.
//!
//! The table is a fixed constant. Calculators take any bracket slice so the
//! same code paths can be exercised against small test tables, but the free
//! functions in [`crate::calculations`] always read [`NATIONAL_DISTRIBUTION`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::IncomeBracket;

/// Population used to turn a percentile gap into a headcount.
pub const REFERENCE_POPULATION: Decimal = dec!(1440000000);

/// Highest percentile ever reported.
pub const PERCENTILE_CEILING: Decimal = dec!(99.9);

/// Allowed drift of the summed population shares away from 100.
pub const SHARE_TOLERANCE: Decimal = dec!(0.1);

/// Median monthly income in rupees, used by the cost scenarios.
pub const MEDIAN_MONTHLY_INCOME: Decimal = dec!(9000);

pub static NATIONAL_DISTRIBUTION: [IncomeBracket; 8] = [
    IncomeBracket {
        label: "Below ₹3k",
        population_share: dec!(27.5),
        min_income: dec!(0),
        max_income: Some(dec!(3000)),
        color: "#dc2626",
        description: "Extreme poverty line",
    },
    IncomeBracket {
        label: "₹3k-9k",
        population_share: dec!(22.5),
        min_income: dec!(3000),
        max_income: Some(dec!(9000)),
        color: "#ea580c",
        description: "Below median income",
    },
    IncomeBracket {
        label: "₹9k-15k",
        population_share: dec!(28),
        min_income: dec!(9000),
        max_income: Some(dec!(15000)),
        color: "#d97706",
        description: "Around median income",
    },
    IncomeBracket {
        label: "₹15k-25k",
        population_share: dec!(12),
        min_income: dec!(15000),
        max_income: Some(dec!(25000)),
        color: "#eab308",
        description: "Lower middle class",
    },
    IncomeBracket {
        label: "₹25k-50k",
        population_share: dec!(7),
        min_income: dec!(25000),
        max_income: Some(dec!(50000)),
        color: "#65a30d",
        description: "Middle class",
    },
    IncomeBracket {
        label: "₹50k-1L",
        population_share: dec!(2.3),
        min_income: dec!(50000),
        max_income: Some(dec!(100000)),
        color: "#059669",
        description: "Upper middle class",
    },
    IncomeBracket {
        label: "₹1L-2L",
        population_share: dec!(0.6),
        min_income: dec!(100000),
        max_income: Some(dec!(200000)),
        color: "#0284c7",
        description: "Upper class",
    },
    IncomeBracket {
        label: "₹2L+",
        population_share: dec!(0.1),
        min_income: dec!(200000),
        max_income: None,
        color: "#7c3aed",
        description: "Elite/Ultra rich",
    },
];

/// Publication the distribution figures are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSource {
    pub category: &'static str,
    pub title: &'static str,
    pub authors: &'static str,
    pub organization: &'static str,
    pub published: &'static str,
    pub key_findings: &'static str,
    pub url: &'static str,
}

pub const DATA_SOURCES: [DataSource; 1] = [DataSource {
    category: "Income Distribution Data",
    title: "Income and Wealth Inequality in India, 1922-2023: The Rise of the Billionaire Raj",
    authors: "Nitin Kumar Bharti, Lucas Chancel, Thomas Piketty, Anmol Somanchi",
    organization: "World Inequality Lab Working Paper No. 2024/09",
    published: "March 2024",
    key_findings: "Top 1% income share highest since 1922; median income ₹9,000/month; bottom 50% earn only 15% of national income",
    url: "https://wid.world/www-site/uploads/2024/03/WorldInequalityLab_WP2024_09_Income-and-Wealth-Inequality-in-India-1922-2023_Final.pdf",
}];

/// Ways a bracket table can violate the distribution invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributionError {
    #[error("distribution has no brackets")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    #[error("bracket {index} starts at {found} but the previous bracket ends at {expected}")]
    Discontiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("bracket {index} has an empty or inverted range")]
    EmptyRange { index: usize },

    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedNotLast { index: usize },

    #[error("last bracket must be unbounded")]
    BoundedTop,

    #[error("population shares sum to {0}, expected 100")]
    ShareTotal(Decimal),
}

/// Checks ordering, contiguity, the open top bracket and the share total.
///
/// # Errors
///
/// Returns the first [`DistributionError`] found, scanning from the
/// lowest bracket upwards.
///
/// # Example
///
/// ```
/// use income_core::distribution::{NATIONAL_DISTRIBUTION, validate};
///
/// assert_eq!(validate(&NATIONAL_DISTRIBUTION), Ok(()));
/// ```
pub fn validate(brackets: &[IncomeBracket]) -> Result<(), DistributionError> {
    let first = brackets.first().ok_or(DistributionError::Empty)?;
    if first.min_income != Decimal::ZERO {
        return Err(DistributionError::NonZeroStart(first.min_income));
    }

    let last_index = brackets.len() - 1;
    let mut previous_max: Option<Decimal> = None;
    for (index, bracket) in brackets.iter().enumerate() {
        if let Some(expected) = previous_max {
            if bracket.min_income != expected {
                return Err(DistributionError::Discontiguous {
                    index,
                    expected,
                    found: bracket.min_income,
                });
            }
        }
        match bracket.max_income {
            Some(max) if max <= bracket.min_income => {
                return Err(DistributionError::EmptyRange { index });
            }
            Some(_) if index == last_index => return Err(DistributionError::BoundedTop),
            None if index != last_index => {
                return Err(DistributionError::UnboundedNotLast { index });
            }
            _ => {}
        }
        previous_max = bracket.max_income;
    }

    let total: Decimal = brackets.iter().map(|b| b.population_share).sum();
    if (total - Decimal::ONE_HUNDRED).abs() > SHARE_TOLERANCE {
        return Err(DistributionError::ShareTotal(total));
    }

    Ok(())
}
