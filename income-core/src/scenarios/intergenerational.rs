//! Income across generations of one poor household and what different
//! interventions could do for the next one.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::calculations::common::round_half_up;

/// Monthly income of the current generation, the baseline for outcomes.
pub const CURRENT_GENERATION_INCOME: Decimal = dec!(8000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub generation: &'static str,
    pub education: &'static str,
    pub occupation: &'static str,
    pub income: Decimal,
    pub assets: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intervention {
    pub intervention: &'static str,
    pub cost: Decimal,
    pub impact: &'static str,
    pub future_income: Decimal,
    pub description: &'static str,
}

impl Intervention {
    /// Percentage gain in next-generation income, if any.
    pub fn income_increase_percent(&self) -> Option<Decimal> {
        (self.future_income > CURRENT_GENERATION_INCOME).then(|| {
            round_half_up(
                (self.future_income / CURRENT_GENERATION_INCOME - dec!(1)) * dec!(100),
                0,
            )
        })
    }

    pub fn outcome(&self) -> String {
        match self.income_increase_percent() {
            Some(percent) => format!("{percent}% income increase"),
            None => "Poverty cycle continues".to_string(),
        }
    }
}

pub static GENERATIONS: [Generation; 4] = [
    Generation {
        generation: "Grandparents",
        education: "Illiterate",
        occupation: "Subsistence farming",
        income: dec!(2000),
        assets: "Small land plot",
    },
    Generation {
        generation: "Parents",
        education: "Primary school dropout",
        occupation: "Agricultural labor",
        income: dec!(6000),
        assets: "No land, debt",
    },
    Generation {
        generation: "Current",
        education: "Secondary school",
        occupation: "Domestic work/labor",
        income: dec!(8000),
        assets: "Rented room",
    },
    Generation {
        generation: "Children",
        education: "At risk of dropout",
        occupation: "Potential child labor",
        income: dec!(200),
        assets: "None",
    },
];

pub static INTERVENTIONS: [Intervention; 4] = [
    Intervention {
        intervention: "Education Support",
        cost: dec!(15000),
        impact: "Child completes school",
        future_income: dec!(25000),
        description: "Scholarships, meals, books",
    },
    Intervention {
        intervention: "Healthcare Access",
        cost: dec!(8000),
        impact: "Family stays healthy",
        future_income: dec!(12000),
        description: "Insurance, preventive care",
    },
    Intervention {
        intervention: "Skills Training",
        cost: dec!(20000),
        impact: "Parent gets better job",
        future_income: dec!(18000),
        description: "Vocational training program",
    },
    Intervention {
        intervention: "No Intervention",
        cost: dec!(0),
        impact: "Cycle continues",
        future_income: dec!(8000),
        description: "Business as usual",
    },
];
