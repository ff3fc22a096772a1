//! Assembles a [`ClassificationResult`] from the four pure calculators.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use income_core::ClassLabel;
//! use income_core::calculations::IncomeClassifier;
//!
//! let classifier = IncomeClassifier::national();
//! let result = classifier.classify(dec!(30000), "Middle Class").unwrap();
//!
//! assert_eq!(result.percentile, dec!(91.4));
//! assert_eq!(result.class_label, ClassLabel::UpperMiddleClass);
//! assert_eq!(result.bracket.label, "₹25k-50k");
//! assert!(!result.is_mid_range_class);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::calculations::{classify_by_percentile, generate_insights, percentile_in, resolve_bracket_in};
use crate::distribution::{NATIONAL_DISTRIBUTION, REFERENCE_POPULATION};
use crate::{ClassificationResult, IncomeBracket};

/// Errors that can occur while classifying an income.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassificationError {
    /// No brackets were provided for the calculation.
    #[error("no income brackets provided")]
    NoBrackets,

    /// Income must be strictly positive.
    #[error("income must be positive, got {0}")]
    NonPositiveIncome(Decimal),
}

/// Classifier over a bracket table.
///
/// Brackets should be sorted by `min_income` in ascending order and the last
/// bracket should have `max_income` as `None`; see
/// [`distribution::validate`](crate::distribution::validate).
#[derive(Debug, Clone)]
pub struct IncomeClassifier<'a> {
    brackets: &'a [IncomeBracket],
}

impl IncomeClassifier<'static> {
    /// Classifier over [`NATIONAL_DISTRIBUTION`].
    pub fn national() -> Self {
        Self::new(&NATIONAL_DISTRIBUTION)
    }
}

impl<'a> IncomeClassifier<'a> {
    pub fn new(brackets: &'a [IncomeBracket]) -> Self {
        Self { brackets }
    }

    pub fn brackets(&self) -> &'a [IncomeBracket] {
        self.brackets
    }

    pub fn percentile(
        &self,
        income: Decimal,
    ) -> Decimal {
        percentile_in(self.brackets, income)
    }

    pub fn bracket_for(
        &self,
        income: Decimal,
    ) -> Option<&'a IncomeBracket> {
        resolve_bracket_in(self.brackets, income)
    }

    /// Classifies a monthly income against the stated perception.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError`] if:
    /// - No brackets were provided
    /// - `income` is zero or negative
    pub fn classify(
        &self,
        income: Decimal,
        perceived_class: &str,
    ) -> Result<ClassificationResult, ClassificationError> {
        if income <= Decimal::ZERO {
            return Err(ClassificationError::NonPositiveIncome(income));
        }
        let bracket = self
            .bracket_for(income)
            .ok_or(ClassificationError::NoBrackets)?;

        let percentile = self.percentile(income);
        let class_label = classify_by_percentile(percentile);
        let population_above_percent = Decimal::ONE_HUNDRED - percentile;
        let estimated_people_above = self.people_above(population_above_percent);

        debug!(
            %income,
            %percentile,
            bracket = bracket.label,
            class = class_label.as_str(),
            "classified income"
        );

        Ok(ClassificationResult {
            income,
            percentile,
            bracket: bracket.clone(),
            class_label,
            perceived_class: perceived_class.to_string(),
            population_above_percent,
            estimated_people_above,
            is_mid_range_class: self.is_mid_range(percentile),
            insights: generate_insights(income, percentile, perceived_class),
        })
    }

    /// Headcount of the reference population above the given share.
    fn people_above(
        &self,
        population_above_percent: Decimal,
    ) -> u64 {
        let people = population_above_percent / Decimal::ONE_HUNDRED * REFERENCE_POPULATION;
        round_half_up(people, 0).to_u64().unwrap_or_default()
    }

    fn is_mid_range(
        &self,
        percentile: Decimal,
    ) -> bool {
        percentile >= dec!(50) && percentile < dec!(90)
    }
}
