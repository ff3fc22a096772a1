//! Percentile → social-class tier.
//!
//! The break points mirror the cumulative shares of the national table
//! (27.5 is the bottom bracket, 50 the median, and so on) except for 99.4,
//! which sits inside the ₹1L-2L bracket. They are fixed and are not
//! recomputed from any table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ClassLabel;

/// Exclusive upper percentile of each tier, ascending. Anything at or above
/// the last threshold is [`ClassLabel::EliteUltraRich`].
pub const CLASS_THRESHOLDS: [(Decimal, ClassLabel); 6] = [
    (dec!(27.5), ClassLabel::BelowPovertyLine),
    (dec!(50), ClassLabel::LowerIncome),
    (dec!(78), ClassLabel::LowerMiddleClass),
    (dec!(90), ClassLabel::MiddleClass),
    (dec!(97), ClassLabel::UpperMiddleClass),
    (dec!(99.4), ClassLabel::UpperClass),
];

/// Maps a percentile to its class tier. First matching threshold wins.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::ClassLabel;
/// use income_core::calculations::classify_by_percentile;
///
/// assert_eq!(classify_by_percentile(dec!(27.4)), ClassLabel::BelowPovertyLine);
/// assert_eq!(classify_by_percentile(dec!(27.5)), ClassLabel::LowerIncome);
/// assert_eq!(classify_by_percentile(dec!(99.9)).as_str(), "Elite/Ultra Rich");
/// ```
pub fn classify_by_percentile(percentile: Decimal) -> ClassLabel {
    CLASS_THRESHOLDS
        .iter()
        .find(|(upper, _)| percentile < *upper)
        .map(|(_, label)| *label)
        .unwrap_or(ClassLabel::EliteUltraRich)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_threshold_starts_the_next_tier() {
        let cases = [
            (dec!(0), ClassLabel::BelowPovertyLine),
            (dec!(27.4), ClassLabel::BelowPovertyLine),
            (dec!(27.5), ClassLabel::LowerIncome),
            (dec!(49.99), ClassLabel::LowerIncome),
            (dec!(50), ClassLabel::LowerMiddleClass),
            (dec!(78), ClassLabel::MiddleClass),
            (dec!(89.9), ClassLabel::MiddleClass),
            (dec!(90), ClassLabel::UpperMiddleClass),
            (dec!(97), ClassLabel::UpperClass),
            (dec!(99.3), ClassLabel::UpperClass),
            (dec!(99.4), ClassLabel::EliteUltraRich),
            (dec!(99.9), ClassLabel::EliteUltraRich),
        ];

        for (percentile, expected) in cases {
            assert_eq!(classify_by_percentile(percentile), expected, "percentile {percentile}");
        }
    }

    #[test]
    fn colors_follow_the_tier() {
        let label = classify_by_percentile(dec!(95));

        assert_eq!(label.as_str(), "Upper Middle Class");
        assert_eq!(label.color(), "#059669");
    }

    #[test]
    fn thresholds_are_ascending() {
        assert!(CLASS_THRESHOLDS.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
