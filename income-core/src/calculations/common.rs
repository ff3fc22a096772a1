//! Rounding and display helpers shared by the calculators.
//!
//! All rounding is half away from zero, which for the non-negative values
//! handled here matches the conventional "round half up".

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `dp` decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3.75), 1), dec!(3.8));
/// assert_eq!(round_half_up(dec!(3.74), 1), dec!(3.7));
/// assert_eq!(round_half_up(dec!(8.5), 0), dec!(9));
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats `value` with exactly `dp` decimal places.
///
/// The value is rounded first, so the formatter only ever pads with zeros.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::common::to_fixed;
///
/// assert_eq!(to_fixed(dec!(5), 1), "5.0");
/// assert_eq!(to_fixed(dec!(18.3333), 1), "18.3");
/// assert_eq!(to_fixed(dec!(12.5), 0), "13");
/// ```
pub fn to_fixed(
    value: Decimal,
    dp: u32,
) -> String {
    let rounded = round_half_up(value, dp);
    format!("{:.*}", dp as usize, rounded)
}

/// Formats a rupee amount as a whole number with Indian digit grouping.
///
/// The lowest three digits form one group and every group above it has two
/// digits (`1,00,000` for one lakh).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::common::format_indian;
///
/// assert_eq!(format_indian(dec!(950)), "950");
/// assert_eq!(format_indian(dec!(9000)), "9,000");
/// assert_eq!(format_indian(dec!(100000)), "1,00,000");
/// assert_eq!(format_indian(dec!(14400000)), "1,44,00,000");
/// ```
pub fn format_indian(value: Decimal) -> String {
    let whole = round_half_up(value, 0);
    let digits = whole.abs().trunc().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };

    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{sign}{},{tail}", groups.join(","))
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
