use std::collections::BTreeMap;
use std::fmt;

use income_core::calculations::{BudgetAssessment, BudgetCategory, PRESET_INCOMES};
use rust_decimal::Decimal;

use crate::utils::format_rupees;

/// Allocation table followed by the verdict.
pub struct BudgetView<'a> {
    pub assessment: &'a BudgetAssessment,
    pub allocations: &'a BTreeMap<BudgetCategory, Decimal>,
}

impl fmt::Display for BudgetView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let a = self.assessment;

        match PRESET_INCOMES.iter().find(|(income, _)| *income == a.income) {
            Some((_, caption)) => {
                writeln!(f, "Monthly income: {} ({caption})", format_rupees(a.income))?
            }
            None => writeln!(f, "Monthly income: {}", format_rupees(a.income))?,
        }
        writeln!(f, "{:<12} {:>10} {:>10}", "Category", "Allocated", "Minimum")?;
        for category in BudgetCategory::ALL {
            let allocated = self
                .allocations
                .get(&category)
                .copied()
                .unwrap_or_default();
            let marker = if a.underfunded.contains(&category) {
                " !"
            } else {
                ""
            };
            writeln!(
                f,
                "{:<12} {:>10} {:>10}{marker}",
                category.as_str(),
                format_rupees(allocated),
                format_rupees(category.minimum_cost())
            )?;
        }

        writeln!(f, "Total allocated: {}", format_rupees(a.total_allocated))?;
        writeln!(f, "Remaining:       {}", format_rupees(a.remaining))?;

        if a.is_impossible {
            writeln!(
                f,
                "Impossible: the bare minimum of {} exceeds this income.",
                format_rupees(a.total_minimum)
            )?;
            writeln!(
                f,
                "This is the reality for {} of Indians",
                a.population_facing_shortfall()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn impossible_budget_is_called_out() {
        let allocations = BTreeMap::from([(BudgetCategory::Food, dec!(3000))]);
        let assessment = BudgetAssessment::new(dec!(3000), &allocations);
        let text = BudgetView {
            assessment: &assessment,
            allocations: &allocations,
        }
        .to_string();

        assert!(text.contains("Impossible: the bare minimum of ₹8,000 exceeds this income."));
        assert!(text.contains("This is the reality for 50% of Indians"));
        assert!(text.contains("Remaining:       ₹0"));
        assert!(text.starts_with("Monthly income: ₹3,000 (Bottom 27.5%)\n"));
    }

    #[test]
    fn underfunded_categories_are_marked() {
        let allocations = BTreeMap::from([(BudgetCategory::Rent, dec!(2500))]);
        let assessment = BudgetAssessment::new(dec!(25000), &allocations);
        let text = BudgetView {
            assessment: &assessment,
            allocations: &allocations,
        }
        .to_string();

        let rent = text.lines().find(|l| l.starts_with("rent")).unwrap();
        let food = text.lines().find(|l| l.starts_with("food")).unwrap();
        assert!(!rent.ends_with('!'));
        assert!(food.ends_with(" !"));
        assert!(!text.contains("Impossible"));
    }
}
