//! Illustrative cost and mobility scenarios.
//!
//! Each module holds a fixed table of figures together with the derived
//! numbers shown next to it, expressed relative to the median monthly income.

pub mod education;
pub mod healthcare;
pub mod intergenerational;
pub mod rural_urban;

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::distribution::MEDIAN_MONTHLY_INCOME;

pub use education::{EDUCATION_COSTS, EducationLevel, SCHOOL_TRANSPORT_COST};
pub use healthcare::{HEALTHCARE_SCENARIOS, HealthcareScenario};
pub use intergenerational::{GENERATIONS, Generation, INTERVENTIONS, Intervention};
pub use rural_urban::{MetricUnit, RURAL_URBAN_METRICS, RuralUrbanMetric};

/// Whole months of median income that `cost` represents.
pub fn months_of_median_income(cost: Decimal) -> Decimal {
    round_half_up(cost / MEDIAN_MONTHLY_INCOME, 0)
}
