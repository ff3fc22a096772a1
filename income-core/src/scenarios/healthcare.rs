use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::months_of_median_income;

/// Out-of-pocket treatment cost at public and private hospitals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthcareScenario {
    pub condition: &'static str,
    pub public_cost: Decimal,
    pub private_cost: Decimal,
    pub description: &'static str,
    pub impact: &'static str,
}

impl HealthcareScenario {
    /// Months of median income the public-hospital treatment costs.
    pub fn public_months_of_median_income(&self) -> Decimal {
        months_of_median_income(self.public_cost)
    }
}

pub static HEALTHCARE_SCENARIOS: [HealthcareScenario; 4] = [
    HealthcareScenario {
        condition: "Child's Pneumonia",
        public_cost: dec!(2500),
        private_cost: dec!(15000),
        description: "Hospital stay, medicines, tests",
        impact: "2-3 months of median income",
    },
    HealthcareScenario {
        condition: "Diabetes Management",
        public_cost: dec!(800),
        private_cost: dec!(3500),
        description: "Monthly insulin, monitoring, checkups",
        impact: "Permanent monthly burden",
    },
    HealthcareScenario {
        condition: "Accident/Fracture",
        public_cost: dec!(8000),
        private_cost: dec!(40000),
        description: "Surgery, casting, recovery",
        impact: "1 year of median income",
    },
    HealthcareScenario {
        condition: "Cancer Treatment",
        public_cost: dec!(75000),
        private_cost: dec!(400000),
        description: "Chemotherapy, radiation, surgery",
        impact: "7+ years of median income",
    },
];
