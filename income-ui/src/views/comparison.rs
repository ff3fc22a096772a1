use std::fmt;

use income_core::calculations::IncomeComparison;

use crate::utils::{format_percent, format_rupees};

pub struct ComparisonView<'a>(pub &'a IncomeComparison);

impl fmt::Display for ComparisonView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let c = self.0;

        for (person, percentile, bracket) in [
            (&c.first, c.first_percentile, c.first_bracket),
            (&c.second, c.second_percentile, c.second_bracket),
        ] {
            writeln!(
                f,
                "{:<20} {:>12}  {:>6}  {}",
                person.role,
                format_rupees(person.income),
                format_percent(percentile),
                bracket.label
            )?;
        }

        if c.same_bracket() {
            writeln!(f, "Both incomes fall in the {} bracket.", c.first_bracket.label)?;
        }

        writeln!(f)?;
        writeln!(f, "Privilege gap:")?;
        for fact in c.facts() {
            writeln!(f, "  - {fact}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use income_core::calculations::Person;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn renders_both_people_and_facts() {
        let comparison = IncomeComparison::new(
            Person::new("You", dec!(30000)),
            Person::new("Driver", dec!(12000)),
        )
        .unwrap();
        let text = ComparisonView(&comparison).to_string();

        assert_eq!(
            text,
            "\
You                       ₹30,000   91.4%  ₹25k-50k
Driver                    ₹12,000   64.0%  ₹9k-15k

Privilege gap:
  - You earns 2.5 times more than Driver
  - In one month, You earns what Driver earns in 2.5 months
"
        );
    }

    #[test]
    fn notes_shared_bracket() {
        let comparison = IncomeComparison::new(
            Person::new("You", dec!(10000)),
            Person::new("Security Guard", dec!(10000)),
        )
        .unwrap();

        assert!(
            ComparisonView(&comparison)
                .to_string()
                .contains("Both incomes fall in the ₹9k-15k bracket.")
        );
    }
}
