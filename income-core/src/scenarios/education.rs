use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::months_of_median_income;

/// Yearly transport cost added to every level.
pub const SCHOOL_TRANSPORT_COST: Decimal = dec!(3000);

/// Annual schooling costs at one level of education.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationLevel {
    pub level: &'static str,
    pub government_fees: Decimal,
    pub private_fees: Decimal,
    pub books: Decimal,
    /// Zero where no uniform is required.
    pub uniform: Decimal,
}

impl EducationLevel {
    pub fn government_months_of_median_income(&self) -> Decimal {
        months_of_median_income(self.government_fees)
    }

    pub fn private_months_of_median_income(&self) -> Decimal {
        months_of_median_income(self.private_fees)
    }

    pub fn requires_uniform(&self) -> bool {
        !self.uniform.is_zero()
    }
}

pub static EDUCATION_COSTS: [EducationLevel; 4] = [
    EducationLevel {
        level: "Primary School",
        government_fees: dec!(500),
        private_fees: dec!(15000),
        books: dec!(2000),
        uniform: dec!(1500),
    },
    EducationLevel {
        level: "Secondary School",
        government_fees: dec!(1200),
        private_fees: dec!(35000),
        books: dec!(5000),
        uniform: dec!(3000),
    },
    EducationLevel {
        level: "Higher Secondary",
        government_fees: dec!(2500),
        private_fees: dec!(75000),
        books: dec!(8000),
        uniform: dec!(0),
    },
    EducationLevel {
        level: "Engineering/Medical",
        government_fees: dec!(15000),
        private_fees: dec!(400000),
        books: dec!(15000),
        uniform: dec!(0),
    },
];
