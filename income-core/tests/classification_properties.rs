//! Properties of the classification pipeline over the national distribution.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use income_core::ClassLabel;
use income_core::calculations::{
    IncomeClassifier, classify_by_percentile, compute_percentile, generate_insights,
    resolve_bracket,
};
use income_core::distribution::{NATIONAL_DISTRIBUTION, PERCENTILE_CEILING, validate};

/// Incomes from 0 to 300,000 in steps of 250 rupees.
fn sample_incomes() -> impl Iterator<Item = Decimal> {
    (0..=1200).map(|step| Decimal::from(step * 250))
}

#[test]
fn national_distribution_is_valid() {
    assert_eq!(validate(&NATIONAL_DISTRIBUTION), Ok(()));
}

#[test]
fn bottom_bracket_is_linear_and_strictly_increasing() {
    let mut previous = None;
    for income in (0..3000).step_by(50).map(Decimal::from) {
        let percentile = compute_percentile(income);
        assert_eq!(percentile, dec!(27.5) * income / dec!(3000));
        if let Some(previous) = previous {
            assert!(percentile > previous, "not increasing at {income}");
        }
        previous = Some(percentile);
    }
}

#[test]
fn percentile_at_bracket_boundaries() {
    let boundaries = [
        (dec!(3000), dec!(27.5)),
        (dec!(9000), dec!(50)),
        (dec!(15000), dec!(78)),
        (dec!(25000), dec!(90)),
        (dec!(50000), dec!(97)),
        (dec!(100000), dec!(99.3)),
        (dec!(200000), dec!(99.9)),
    ];

    for (income, expected) in boundaries {
        assert_eq!(compute_percentile(income), expected, "income {income}");
    }
}

#[test]
fn percentile_is_monotonic_and_capped() {
    let percentiles: Vec<Decimal> = sample_incomes().map(compute_percentile).collect();

    assert!(percentiles.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(percentiles.iter().all(|p| *p <= PERCENTILE_CEILING));
    assert_eq!(compute_percentile(dec!(10000000)), PERCENTILE_CEILING);
}

#[test]
fn resolved_bracket_contains_income() {
    for income in sample_incomes() {
        let bracket = resolve_bracket(income);
        assert!(bracket.min_income <= income, "income {income}");
        if let Some(max) = bracket.max_income {
            assert!(income < max, "income {income}");
        }
    }
}

#[test]
fn class_label_is_a_step_function() {
    assert_eq!(classify_by_percentile(dec!(27.4)), ClassLabel::BelowPovertyLine);
    assert_eq!(classify_by_percentile(dec!(27.5)), ClassLabel::LowerIncome);
    assert_eq!(classify_by_percentile(dec!(99.9)), ClassLabel::EliteUltraRich);
    assert_eq!(
        classify_by_percentile(dec!(99.9)).as_str(),
        "Elite/Ultra Rich"
    );
}

#[test]
fn no_insights_below_all_thresholds() {
    let income = dec!(2000);

    assert!(generate_insights(income, compute_percentile(income), "").is_empty());
}

#[test]
fn exact_middle_class_perception_gets_reality_check_only() {
    let income = dec!(30000);
    let insights = generate_insights(income, compute_percentile(income), "Middle Class");

    assert!(insights.iter().any(|i| i.starts_with("Reality Check:")));
    assert!(insights.iter().any(|i| i.contains("higher than what 90% of Indians earn")));
    assert!(!insights.iter().any(|i| i.starts_with("Major Reality Check:")));
}

#[test]
fn middle_substring_perception_gets_major_reality_check() {
    let income = dec!(60000);
    let insights = generate_insights(income, compute_percentile(income), "Upper Middle Class");

    assert!(insights.iter().any(|i| i.starts_with("Major Reality Check:")));
    assert!(!insights.iter().any(|i| i.starts_with("Reality Check:")));
    // Rules 1 through 5 apply; rule 6 needs a lakh.
    assert_eq!(insights.len(), 6);
}

#[test]
fn repeated_calls_are_identical() {
    let classifier = IncomeClassifier::national();

    for income in [dec!(1), dec!(8999), dec!(45000), dec!(250000)] {
        assert_eq!(
            classifier.classify(income, "Lower Middle Class"),
            classifier.classify(income, "Lower Middle Class")
        );
    }
}

#[test]
fn classification_is_consistent_with_parts() {
    let classifier = IncomeClassifier::national();

    for income in sample_incomes().skip(1) {
        let result = classifier
            .classify(income, "Middle Class")
            .expect("positive income classifies");

        assert_eq!(result.percentile, compute_percentile(income));
        assert_eq!(&result.bracket, resolve_bracket(income));
        assert_eq!(result.class_label, classify_by_percentile(result.percentile));
        assert_eq!(
            result.population_above_percent,
            dec!(100) - result.percentile
        );
    }
}
