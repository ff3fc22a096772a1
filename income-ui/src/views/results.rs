use std::fmt;

use income_core::ClassificationResult;

use crate::utils::{format_millions, format_percent, format_rupees};

/// The results screen for one classified income.
pub struct ResultsView<'a>(pub &'a ClassificationResult);

impl fmt::Display for ResultsView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Monthly income:   {}", format_rupees(result.income))?;
        writeln!(f, "Percentile:       {}", format_percent(result.percentile))?;
        writeln!(
            f,
            "Income bracket:   {} ({})",
            result.bracket.label, result.bracket.description
        )?;
        writeln!(
            f,
            "Economic class:   {} [{}]",
            result.class_label,
            result.class_color()
        )?;
        writeln!(
            f,
            "Earning more:     {} of Indians (~{})",
            format_percent(result.population_above_percent),
            format_millions(result.estimated_people_above)
        )?;

        if result.is_mid_range_class {
            writeln!(f, "You are genuinely in the middle of the distribution.")?;
        } else if let Some(mismatch) = result.perception_mismatch() {
            writeln!(f, "{mismatch}")?;
        }

        if !result.insights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Did you know?")?;
            for insight in &result.insights {
                writeln!(f, "  - {insight}")?;
            }
        }
        Ok(())
    }
}
