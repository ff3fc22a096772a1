//! Income classification and the calculators built on top of it.
//!
//! The classification pipeline runs percentile, bracket lookup, class label
//! and insights in that order. [`IncomeClassifier`] ties them together into a
//! single [`ClassificationResult`](crate::ClassificationResult).

pub mod common;

mod bracket;
mod budget;
mod classifier;
mod comparison;
mod insights;
mod labeler;
mod percentile;

pub use bracket::{resolve_bracket, resolve_bracket_in};
pub use budget::{BudgetAssessment, BudgetCategory, PRESET_INCOMES, total_minimum};
pub use classifier::{ClassificationError, IncomeClassifier};
pub use comparison::{
    ComparisonError, IncomeComparison, PRESET_ROLES, Person, PresetRole, preset_role,
};
pub use insights::{Insight, generate_insights, insights_for};
pub use labeler::{CLASS_THRESHOLDS, classify_by_percentile};
pub use percentile::{compute_percentile, percentile_in};
