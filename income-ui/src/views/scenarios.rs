use std::fmt;

use income_core::scenarios::{
    EDUCATION_COSTS, GENERATIONS, HEALTHCARE_SCENARIOS, INTERVENTIONS, RURAL_URBAN_METRICS,
    SCHOOL_TRANSPORT_COST,
};

use crate::utils::format_rupees;

/// Which illustrative scenario to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scenario {
    Healthcare,
    Education,
    RuralUrban,
    PovertyTrap,
}

pub struct ScenarioView(pub Scenario);

impl ScenarioView {
    fn healthcare(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &HEALTHCARE_SCENARIOS {
            writeln!(f, "{}", s.condition)?;
            writeln!(f, "  Public hospital:  {}", format_rupees(s.public_cost))?;
            writeln!(f, "  Private hospital: {}", format_rupees(s.private_cost))?;
            writeln!(f, "  {}", s.description)?;
            writeln!(f, "  {}", s.impact)?;
            writeln!(
                f,
                "  For median income (₹9,000/month): {} months of total income",
                s.public_months_of_median_income()
            )?;
        }
        Ok(())
    }

    fn education(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in &EDUCATION_COSTS {
            writeln!(f, "{}", level.level)?;
            writeln!(f, "  Government: {}", format_rupees(level.government_fees))?;
            writeln!(f, "  Private:    {}", format_rupees(level.private_fees))?;
            writeln!(f, "  Books: {}", format_rupees(level.books))?;
            if level.requires_uniform() {
                writeln!(f, "  Uniform: {}", format_rupees(level.uniform))?;
            }
            writeln!(f, "  Transport: {}", format_rupees(SCHOOL_TRANSPORT_COST))?;
            writeln!(
                f,
                "  For median income family (₹9,000/month): Government school = {} months income, Private school = {} months income",
                level.government_months_of_median_income(),
                level.private_months_of_median_income()
            )?;
        }
        Ok(())
    }

    fn rural_urban(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for metric in &RURAL_URBAN_METRICS {
            writeln!(f, "{metric}")?;
            if let Some(difference) = metric.difference() {
                writeln!(f, "  Difference: {difference}")?;
            }
        }
        Ok(())
    }

    fn poverty_trap(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generations:")?;
        for g in &GENERATIONS {
            writeln!(
                f,
                "  {:<13} {:>8}/month  {}; {}; {}",
                g.generation,
                format_rupees(g.income),
                g.education,
                g.occupation,
                g.assets
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Interventions:")?;
        for i in &INTERVENTIONS {
            writeln!(
                f,
                "  {} (cost {}): {} -> {}/month, {}",
                i.intervention,
                format_rupees(i.cost),
                i.impact,
                format_rupees(i.future_income),
                i.outcome()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ScenarioView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.0 {
            Scenario::Healthcare => Self::healthcare(f),
            Scenario::Education => Self::education(f),
            Scenario::RuralUrban => Self::rural_urban(f),
            Scenario::PovertyTrap => Self::poverty_trap(f),
        }
    }
}
