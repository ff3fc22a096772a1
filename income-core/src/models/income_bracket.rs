use rust_decimal::Decimal;
use serde::Serialize;

/// One contiguous band of monthly income in a national distribution.
///
/// Bounds are in whole rupees per month. `max_income` is exclusive and
/// `None` marks the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeBracket {
    pub label: &'static str,
    pub population_share: Decimal,
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub color: &'static str,
    pub description: &'static str,
}

impl IncomeBracket {
    /// Returns `true` when `income` lies in `[min_income, max_income)`.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income >= self.min_income && self.max_income.is_none_or(|max| income < max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_income.is_none()
    }
}
