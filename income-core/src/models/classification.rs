use rust_decimal::Decimal;
use serde::Serialize;

use super::{ClassLabel, IncomeBracket};

/// Everything the results screen needs for one classified income.
///
/// Created fresh for each request; the core keeps no copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Validated monthly income (always positive).
    pub income: Decimal,

    /// Cumulative population percentile, in `[0, 99.9]`.
    pub percentile: Decimal,

    /// Bracket that contains `income`.
    pub bracket: IncomeBracket,

    pub class_label: ClassLabel,

    /// Self-identified class exactly as supplied by the caller.
    pub perceived_class: String,

    /// Share of the population earning more, as a percentage.
    pub population_above_percent: Decimal,

    /// `population_above_percent` converted to a headcount of the reference population.
    pub estimated_people_above: u64,

    /// True when the percentile falls in `[50, 90)`.
    pub is_mid_range_class: bool,

    /// Comparative facts, in rule order.
    pub insights: Vec<String>,
}

impl ClassificationResult {
    pub fn class_color(&self) -> &'static str {
        self.class_label.color()
    }

    /// Contrast between the stated perception and the computed tier.
    ///
    /// Only produced for incomes above the median that are not mid-range,
    /// i.e. the top decile.
    pub fn perception_mismatch(&self) -> Option<String> {
        if self.is_mid_range_class || self.percentile <= Decimal::from(50) {
            return None;
        }
        Some(format!(
            "You're not {} - you're actually {}",
            self.perceived_class.to_lowercase(),
            self.class_label.as_str().to_lowercase()
        ))
    }
}
