//! Comparative "surprise facts" for a classified income.
//!
//! Each rule is an independent threshold check on the income and percentile,
//! and two rules also look at the stated perception. Rules are evaluated in a
//! fixed order and any number of them may fire.
//!
//! | Rule | Fires when                                                 |
//! |------|------------------------------------------------------------|
//! | 1    | income ≥ 3000 and percentile > 27.5                        |
//! | 2    | income ≥ 9000 and percentile > 50                          |
//! | 3    | income ≥ 15000 and percentile > 78                         |
//! | 4    | income ≥ 25000                                             |
//! | 5    | income ≥ 50000                                             |
//! | 6    | income ≥ 100000                                            |
//! | 7    | income ≥ 25000 and perception is exactly `Middle Class`    |
//! | 8    | income ≥ 50000 and perception contains `Middle`            |
//!
//! Rules 7 and 8 deliberately differ: rule 7 is an exact, case-sensitive
//! match while rule 8 is a case-sensitive substring match, so
//! `Upper Middle Class` triggers only rule 8.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One generated fact. `Display` renders the user-facing sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Insight {
    AbovePovertyLine,
    AboveMedian,
    TopTwentyTwoPercent,
    AboveNinetyPercent,
    TopThreePercent,
    TopOnePercent,
    RealityCheck,
    MajorRealityCheck,
}

const POVERTY_LINE_SHARE: Decimal = dec!(27.5);

impl fmt::Display for Insight {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::AbovePovertyLine => write!(
                f,
                "You earn more than {POVERTY_LINE_SHARE:.1}% of Indians (above extreme poverty line)"
            ),
            Self::AboveMedian => f.write_str(
                "Your income is above the median - you earn more than half of all Indians",
            ),
            Self::TopTwentyTwoPercent => {
                f.write_str("You're in the top 22% of income earners in India")
            }
            Self::AboveNinetyPercent => {
                f.write_str("Your monthly income is higher than what 90% of Indians earn")
            }
            Self::TopThreePercent => {
                f.write_str("You're in the top 3% - only 43 million Indians earn this much")
            }
            Self::TopOnePercent => f.write_str("You're in the top 1% of income earners in India"),
            Self::RealityCheck => f.write_str(
                "Reality Check: You identify as \"middle class\" but you're actually in the top 10% of earners",
            ),
            Self::MajorRealityCheck => f.write_str(
                "Major Reality Check: You're not middle class - you're in the top 3% of all Indians",
            ),
        }
    }
}

/// Evaluates every rule in order and returns the facts that fire.
///
/// `percentile` is taken as given; it is not re-derived from `income`.
pub fn insights_for(
    income: Decimal,
    percentile: Decimal,
    perceived_class: &str,
) -> Vec<Insight> {
    let rules = [
        (
            income >= dec!(3000) && percentile > POVERTY_LINE_SHARE,
            Insight::AbovePovertyLine,
        ),
        (
            income >= dec!(9000) && percentile > dec!(50),
            Insight::AboveMedian,
        ),
        (
            income >= dec!(15000) && percentile > dec!(78),
            Insight::TopTwentyTwoPercent,
        ),
        (income >= dec!(25000), Insight::AboveNinetyPercent),
        (income >= dec!(50000), Insight::TopThreePercent),
        (income >= dec!(100000), Insight::TopOnePercent),
        (
            income >= dec!(25000) && perceived_class == "Middle Class",
            Insight::RealityCheck,
        ),
        (
            income >= dec!(50000) && perceived_class.contains("Middle"),
            Insight::MajorRealityCheck,
        ),
    ];

    rules
        .into_iter()
        .filter_map(|(fires, insight)| fires.then_some(insight))
        .collect()
}

/// Rendered facts for `income`, in rule order. Empty below ₹3,000.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::{compute_percentile, generate_insights};
///
/// let income = dec!(2000);
/// assert!(generate_insights(income, compute_percentile(income), "").is_empty());
///
/// let income = dec!(30000);
/// let facts = generate_insights(income, compute_percentile(income), "Middle Class");
/// assert_eq!(facts.len(), 5);
/// assert!(facts[4].starts_with("Reality Check"));
/// ```
pub fn generate_insights(
    income: Decimal,
    percentile: Decimal,
    perceived_class: &str,
) -> Vec<String> {
    insights_for(income, percentile, perceived_class)
        .into_iter()
        .map(|insight| insight.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::compute_percentile;

    fn facts(
        income: Decimal,
        perception: &str,
    ) -> Vec<Insight> {
        insights_for(income, compute_percentile(income), perception)
    }

    #[test]
    fn nothing_fires_below_poverty_line() {
        assert!(facts(dec!(2000), "").is_empty());
        assert!(facts(dec!(2999), "Middle Class").is_empty());
    }

    #[test]
    fn rule_one_needs_percentile_strictly_above_poverty_share() {
        // At exactly 3000 the percentile is 27.5, which is not > 27.5.
        assert!(facts(dec!(3000), "").is_empty());
        assert_eq!(facts(dec!(3001), ""), vec![Insight::AbovePovertyLine]);
    }

    #[test]
    fn median_income_does_not_count_as_above_median() {
        assert_eq!(facts(dec!(9000), ""), vec![Insight::AbovePovertyLine]);
        assert_eq!(
            facts(dec!(9001), ""),
            vec![Insight::AbovePovertyLine, Insight::AboveMedian]
        );
    }

    #[test]
    fn thirty_thousand_middle_class_gets_reality_check_only() {
        assert_eq!(
            facts(dec!(30000), "Middle Class"),
            vec![
                Insight::AbovePovertyLine,
                Insight::AboveMedian,
                Insight::TopTwentyTwoPercent,
                Insight::AboveNinetyPercent,
                Insight::RealityCheck,
            ]
        );
    }

    #[test]
    fn sixty_thousand_upper_middle_class_gets_major_reality_check() {
        assert_eq!(
            facts(dec!(60000), "Upper Middle Class"),
            vec![
                Insight::AbovePovertyLine,
                Insight::AboveMedian,
                Insight::TopTwentyTwoPercent,
                Insight::AboveNinetyPercent,
                Insight::TopThreePercent,
                Insight::MajorRealityCheck,
            ]
        );
    }

    #[test]
    fn exact_middle_class_at_high_income_gets_both_checks() {
        let result = facts(dec!(150000), "Middle Class");

        assert_eq!(result.len(), 8);
        assert_eq!(result[6], Insight::RealityCheck);
        assert_eq!(result[7], Insight::MajorRealityCheck);
    }

    #[test]
    fn perception_matching_is_case_sensitive() {
        let result = facts(dec!(60000), "middle class");

        assert!(!result.contains(&Insight::RealityCheck));
        assert!(!result.contains(&Insight::MajorRealityCheck));
    }

    #[test]
    fn empty_perception_never_triggers_checks() {
        let result = facts(dec!(250000), "");

        assert!(!result.contains(&Insight::RealityCheck));
        assert!(!result.contains(&Insight::MajorRealityCheck));
        assert!(result.contains(&Insight::TopOnePercent));
    }

    #[test]
    fn percentile_argument_is_used_as_given() {
        // A percentile that disagrees with the income suppresses rules 1-3.
        let result = insights_for(dec!(30000), dec!(10), "");

        assert_eq!(result, vec![Insight::AboveNinetyPercent]);
    }

    #[test]
    fn rendered_texts_match_rules() {
        assert_eq!(
            Insight::AbovePovertyLine.to_string(),
            "You earn more than 27.5% of Indians (above extreme poverty line)"
        );
        assert_eq!(
            Insight::RealityCheck.to_string(),
            "Reality Check: You identify as \"middle class\" but you're actually in the top 10% of earners"
        );
        assert_eq!(
            Insight::MajorRealityCheck.to_string(),
            "Major Reality Check: You're not middle class - you're in the top 3% of all Indians"
        );
    }

    #[test]
    fn generate_insights_renders_in_order() {
        let income = dec!(60000);
        let result = generate_insights(income, compute_percentile(income), "Upper Middle Class");

        assert_eq!(result.len(), 6);
        assert_eq!(
            result[0],
            "You earn more than 27.5% of Indians (above extreme poverty line)"
        );
        assert_eq!(
            result[5],
            "Major Reality Check: You're not middle class - you're in the top 3% of all Indians"
        );
    }
}
