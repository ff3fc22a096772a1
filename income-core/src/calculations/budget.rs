//! Monthly budget challenge.
//!
//! Given a monthly income and what the household spends on each essential
//! category, reports what is left over and whether the bare minimum is even
//! affordable.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::distribution::MEDIAN_MONTHLY_INCOME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Food,
    Rent,
    Transport,
    Healthcare,
    Education,
    Clothes,
    Savings,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 7] = [
        BudgetCategory::Food,
        BudgetCategory::Rent,
        BudgetCategory::Transport,
        BudgetCategory::Healthcare,
        BudgetCategory::Education,
        BudgetCategory::Clothes,
        BudgetCategory::Savings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Food => "food",
            BudgetCategory::Rent => "rent",
            BudgetCategory::Transport => "transport",
            BudgetCategory::Healthcare => "healthcare",
            BudgetCategory::Education => "education",
            BudgetCategory::Clothes => "clothes",
            BudgetCategory::Savings => "savings",
        }
    }

    /// Minimum monthly cost of the category in rupees.
    pub fn minimum_cost(&self) -> Decimal {
        match self {
            BudgetCategory::Food => dec!(3500),
            BudgetCategory::Rent => dec!(2500),
            BudgetCategory::Transport => dec!(800),
            BudgetCategory::Healthcare => dec!(500),
            BudgetCategory::Education => dec!(400),
            BudgetCategory::Clothes => dec!(300),
            BudgetCategory::Savings => dec!(0),
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of every category's minimum cost.
pub fn total_minimum() -> Decimal {
    BudgetCategory::ALL.iter().map(BudgetCategory::minimum_cost).sum()
}

/// Incomes offered as starting points, with their distribution caption.
pub const PRESET_INCOMES: [(Decimal, &str); 4] = [
    (dec!(3000), "Bottom 27.5%"),
    (dec!(9000), "Median - 50%"),
    (dec!(15000), "Top 22%"),
    (dec!(25000), "Top 10%"),
];

/// Outcome of allocating an income across the budget categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetAssessment {
    pub income: Decimal,
    pub total_allocated: Decimal,
    /// Negative when more is allocated than earned.
    pub remaining: Decimal,
    pub total_minimum: Decimal,
    pub is_impossible: bool,
    /// Categories whose allocation is below their minimum cost.
    pub underfunded: Vec<BudgetCategory>,
}

impl BudgetAssessment {
    /// Assesses `allocations` against `income`. Categories missing from the
    /// map count as zero.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use rust_decimal_macros::dec;
    /// use income_core::calculations::{BudgetAssessment, BudgetCategory};
    ///
    /// let allocations = BTreeMap::from([(BudgetCategory::Food, dec!(3000))]);
    /// let assessment = BudgetAssessment::new(dec!(3000), &allocations);
    ///
    /// assert!(assessment.is_impossible);
    /// assert_eq!(assessment.remaining, dec!(0));
    /// ```
    pub fn new(
        income: Decimal,
        allocations: &BTreeMap<BudgetCategory, Decimal>,
    ) -> Self {
        let allocated_for =
            |category: &BudgetCategory| allocations.get(category).copied().unwrap_or_default();

        let total_allocated = BudgetCategory::ALL.iter().map(allocated_for).sum();
        let total_minimum = total_minimum();
        let underfunded = BudgetCategory::ALL
            .into_iter()
            .filter(|category| allocated_for(category) < category.minimum_cost())
            .collect();

        Self {
            income,
            total_allocated,
            remaining: income - total_allocated,
            total_minimum,
            is_impossible: total_minimum > income,
            underfunded,
        }
    }

    /// Share of Indians living with the same shortfall.
    pub fn population_facing_shortfall(&self) -> &'static str {
        if self.income <= MEDIAN_MONTHLY_INCOME {
            "50%"
        } else {
            "27.5%"
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn minimum_allocations() -> BTreeMap<BudgetCategory, Decimal> {
        BudgetCategory::ALL
            .into_iter()
            .map(|category| (category, category.minimum_cost()))
            .collect()
    }

    #[test]
    fn total_minimum_is_eight_thousand() {
        assert_eq!(total_minimum(), dec!(8000));
    }

    #[test]
    fn empty_allocations_leave_full_income() {
        let assessment = BudgetAssessment::new(dec!(15000), &BTreeMap::new());

        assert_eq!(assessment.total_allocated, dec!(0));
        assert_eq!(assessment.remaining, dec!(15000));
        assert!(!assessment.is_impossible);
        // Savings has no minimum so it is never underfunded.
        assert_eq!(assessment.underfunded.len(), 6);
        assert!(!assessment.underfunded.contains(&BudgetCategory::Savings));
    }

    #[test]
    fn three_thousand_cannot_cover_minimums() {
        let assessment = BudgetAssessment::new(dec!(3000), &minimum_allocations());

        assert!(assessment.is_impossible);
        assert_eq!(assessment.total_allocated, dec!(8000));
        assert_eq!(assessment.remaining, dec!(-5000));
        assert!(assessment.underfunded.is_empty());
        assert_eq!(assessment.population_facing_shortfall(), "50%");
    }

    #[test]
    fn median_income_covers_minimums() {
        let assessment = BudgetAssessment::new(dec!(9000), &minimum_allocations());

        assert!(!assessment.is_impossible);
        assert_eq!(assessment.remaining, dec!(1000));
        assert_eq!(assessment.population_facing_shortfall(), "50%");
    }

    #[test]
    fn income_exactly_at_minimum_is_possible() {
        assert!(!BudgetAssessment::new(dec!(8000), &BTreeMap::new()).is_impossible);
        assert!(BudgetAssessment::new(dec!(7999), &BTreeMap::new()).is_impossible);
    }

    #[test]
    fn shortfall_share_above_median() {
        let assessment = BudgetAssessment::new(dec!(15000), &BTreeMap::new());

        assert_eq!(assessment.population_facing_shortfall(), "27.5%");
    }

    #[test]
    fn underfunded_lists_categories_in_order() {
        let mut allocations = minimum_allocations();
        allocations.insert(BudgetCategory::Rent, dec!(2000));
        allocations.insert(BudgetCategory::Clothes, dec!(0));

        let assessment = BudgetAssessment::new(dec!(25000), &allocations);

        assert_eq!(
            assessment.underfunded,
            vec![BudgetCategory::Rent, BudgetCategory::Clothes]
        );
    }

    #[test]
    fn parse_category_names() {
        assert_eq!(BudgetCategory::parse("Food"), Some(BudgetCategory::Food));
        assert_eq!(BudgetCategory::parse(" rent "), Some(BudgetCategory::Rent));
        assert_eq!(BudgetCategory::parse("luxury"), None);
    }
}
