//! Side-by-side comparison of two monthly incomes.
//!
//! Positions both people in the national distribution and produces
//! "privilege gap" facts from their income ratio, gap and percentiles.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

use crate::IncomeBracket;
use crate::calculations::common::{format_indian, round_half_up, to_fixed};
use crate::calculations::{compute_percentile, resolve_bracket};

/// Errors that can occur when comparing two incomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("income for {role} must be positive, got {income}")]
    NonPositiveIncome { role: String, income: Decimal },
}

/// A commonly compared occupation and its typical monthly income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetRole {
    pub role: &'static str,
    /// `None` for the free-form "Custom" entry.
    pub typical_income: Option<Decimal>,
}

pub const PRESET_ROLES: [PresetRole; 8] = [
    PresetRole { role: "Domestic Worker", typical_income: Some(dec!(8000)) },
    PresetRole { role: "Driver", typical_income: Some(dec!(12000)) },
    PresetRole { role: "Security Guard", typical_income: Some(dec!(10000)) },
    PresetRole { role: "Construction Worker", typical_income: Some(dec!(9000)) },
    PresetRole { role: "Restaurant Worker", typical_income: Some(dec!(8500)) },
    PresetRole { role: "Delivery Person", typical_income: Some(dec!(15000)) },
    PresetRole { role: "Office Peon", typical_income: Some(dec!(12000)) },
    PresetRole { role: "Custom", typical_income: None },
];

/// Finds a preset role by exact name.
pub fn preset_role(role: &str) -> Option<&'static PresetRole> {
    PRESET_ROLES.iter().find(|preset| preset.role == role)
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub role: String,
    pub income: Decimal,
}

impl Person {
    pub fn new(
        role: impl Into<String>,
        income: Decimal,
    ) -> Self {
        Self {
            role: role.into(),
            income,
        }
    }
}

/// Computed comparison between two people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeComparison {
    pub first: Person,
    pub second: Person,
    pub first_percentile: Decimal,
    pub second_percentile: Decimal,
    pub first_bracket: &'static IncomeBracket,
    pub second_bracket: &'static IncomeBracket,
    /// `first.income / second.income`.
    pub ratio: Decimal,
    /// `first.income - second.income`; negative when the second person earns more.
    pub gap: Decimal,
}

impl IncomeComparison {
    /// Compares two incomes against the national distribution.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::NonPositiveIncome`] naming the first person
    /// whose income is zero or negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use income_core::calculations::{IncomeComparison, Person};
    ///
    /// let comparison = IncomeComparison::new(
    ///     Person::new("You", dec!(80000)),
    ///     Person::new("Domestic Worker", dec!(8000)),
    /// ).unwrap();
    ///
    /// assert_eq!(comparison.ratio, dec!(10));
    /// assert_eq!(comparison.gap, dec!(72000));
    /// ```
    pub fn new(
        first: Person,
        second: Person,
    ) -> Result<Self, ComparisonError> {
        for person in [&first, &second] {
            if person.income <= Decimal::ZERO {
                return Err(ComparisonError::NonPositiveIncome {
                    role: person.role.clone(),
                    income: person.income,
                });
            }
        }

        Ok(Self {
            first_percentile: compute_percentile(first.income),
            second_percentile: compute_percentile(second.income),
            first_bracket: resolve_bracket(first.income),
            second_bracket: resolve_bracket(second.income),
            ratio: first.income / second.income,
            gap: first.income - second.income,
            first,
            second,
        })
    }

    /// True when both incomes fall in the same bracket.
    pub fn same_bracket(&self) -> bool {
        std::ptr::eq(self.first_bracket, self.second_bracket)
    }

    /// Privilege-gap facts, most severe ratio band first, always ending with
    /// the months-of-income equivalence.
    pub fn facts(&self) -> Vec<String> {
        let first = &self.first.role;
        let second = &self.second.role;
        let mut facts = Vec::new();

        if self.ratio >= dec!(10) {
            facts.push(format!(
                "{first} earns {} times more than {second} - highlighting extreme inequality",
                to_fixed(self.ratio, 0)
            ));
        } else if self.ratio >= dec!(5) {
            facts.push(format!(
                "{first} earns {} times more than {second} - a significant privilege gap",
                to_fixed(self.ratio, 1)
            ));
        } else if self.ratio >= dec!(2) {
            facts.push(format!(
                "{first} earns {} times more than {second}",
                to_fixed(self.ratio, 1)
            ));
        }

        if self.first_percentile > dec!(90) && self.second_percentile < dec!(50) {
            facts.push(format!(
                "While {first} is in the top 10% of earners, {second} is below the median income"
            ));
        }

        if self.gap >= dec!(50000) {
            let months = round_half_up(self.gap / self.second.income, 0);
            facts.push(format!(
                "The monthly income difference of ₹{} represents {months} months of {second}'s entire income",
                format_indian(self.gap)
            ));
        }

        facts.push(format!(
            "In one month, {first} earns what {second} earns in {} months",
            to_fixed(self.ratio, 1)
        ));

        facts
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn compare(
        first: Decimal,
        second: Decimal,
    ) -> IncomeComparison {
        IncomeComparison::new(Person::new("You", first), Person::new("Driver", second)).unwrap()
    }

    #[test]
    fn rejects_non_positive_first_income() {
        let result = IncomeComparison::new(
            Person::new("You", dec!(0)),
            Person::new("Driver", dec!(12000)),
        );

        assert_eq!(
            result,
            Err(ComparisonError::NonPositiveIncome {
                role: "You".to_string(),
                income: dec!(0),
            })
        );
    }

    #[test]
    fn rejects_non_positive_second_income() {
        let result = IncomeComparison::new(
            Person::new("You", dec!(5000)),
            Person::new("Driver", dec!(-1)),
        );

        assert!(matches!(
            result,
            Err(ComparisonError::NonPositiveIncome { ref role, .. }) if role == "Driver"
        ));
    }

    #[test]
    fn computes_percentiles_ratio_and_gap() {
        let comparison = compare(dec!(30000), dec!(12000));

        assert_eq!(comparison.first_percentile, dec!(91.4));
        assert_eq!(comparison.second_percentile, dec!(64));
        assert_eq!(comparison.ratio, dec!(2.5));
        assert_eq!(comparison.gap, dec!(18000));
        assert!(!comparison.same_bracket());
    }

    #[test]
    fn same_bracket_is_detected() {
        assert!(compare(dec!(10000), dec!(12000)).same_bracket());
    }

    #[test]
    fn extreme_inequality_fact_above_ten_times() {
        let comparison = compare(dec!(120000), dec!(8000));

        assert_eq!(
            comparison.facts(),
            vec![
                "You earns 15 times more than Driver - highlighting extreme inequality".to_string(),
                "While You is in the top 10% of earners, Driver is below the median income"
                    .to_string(),
                "The monthly income difference of ₹1,12,000 represents 14 months of Driver's entire income"
                    .to_string(),
                "In one month, You earns what Driver earns in 15.0 months".to_string(),
            ]
        );
    }

    #[test]
    fn significant_gap_between_five_and_ten_times() {
        let facts = compare(dec!(60000), dec!(10000)).facts();

        assert_eq!(
            facts[0],
            "You earns 6.0 times more than Driver - a significant privilege gap"
        );
    }

    #[test]
    fn plain_ratio_between_two_and_five_times() {
        let facts = compare(dec!(30000), dec!(12000)).facts();

        assert_eq!(
            facts,
            vec![
                "You earns 2.5 times more than Driver".to_string(),
                "In one month, You earns what Driver earns in 2.5 months".to_string(),
            ]
        );
    }

    #[test]
    fn small_ratio_only_reports_equivalence() {
        let facts = compare(dec!(8000), dec!(12000)).facts();

        assert_eq!(
            facts,
            vec!["In one month, You earns what Driver earns in 0.7 months".to_string()]
        );
    }

    #[test]
    fn ratio_rounds_half_up() {
        let facts = compare(dec!(30000), dec!(8000)).facts();

        assert_eq!(facts[0], "You earns 3.8 times more than Driver");
    }

    #[test]
    fn preset_roles_lookup() {
        assert_eq!(
            preset_role("Driver").and_then(|p| p.typical_income),
            Some(dec!(12000))
        );
        assert_eq!(preset_role("Custom").and_then(|p| p.typical_income), None);
        assert!(preset_role("Astronaut").is_none());
    }
}
