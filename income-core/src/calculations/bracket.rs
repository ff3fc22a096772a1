//! Income → containing bracket.

use rust_decimal::Decimal;
use tracing::warn;

use crate::IncomeBracket;
use crate::distribution::NATIONAL_DISTRIBUTION;

/// National bracket containing `income`.
///
/// Falls back to the top bracket when nothing matches, which can only happen
/// for a negative income.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use income_core::calculations::resolve_bracket;
///
/// assert_eq!(resolve_bracket(dec!(9000)).label, "₹9k-15k");
/// assert_eq!(resolve_bracket(dec!(750000)).label, "₹2L+");
/// ```
pub fn resolve_bracket(income: Decimal) -> &'static IncomeBracket {
    resolve_bracket_in(&NATIONAL_DISTRIBUTION, income)
        .unwrap_or(&NATIONAL_DISTRIBUTION[NATIONAL_DISTRIBUTION.len() - 1])
}

/// Bracket of `brackets` containing `income`, or the last bracket if none
/// does. Returns `None` only for an empty table.
pub fn resolve_bracket_in(
    brackets: &[IncomeBracket],
    income: Decimal,
) -> Option<&IncomeBracket> {
    brackets
        .iter()
        .find(|bracket| bracket.contains(income))
        .or_else(|| {
            let fallback = brackets.last();
            if let Some(bracket) = fallback {
                warn!(
                    %income,
                    label = bracket.label,
                    "no bracket contains income, using top bracket"
                );
            }
            fallback
        })
}
