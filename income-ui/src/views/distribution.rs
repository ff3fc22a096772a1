use std::fmt;

use income_core::IncomeBracket;
use income_core::calculations::common::to_fixed;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Bracket table with a bar per population share. The bracket containing
/// `highlight` is marked.
pub struct DistributionView<'a> {
    pub brackets: &'a [IncomeBracket],
    pub highlight: Option<&'a IncomeBracket>,
}

/// Characters per percentage point of population.
const BAR_SCALE: Decimal = dec!(0.5);

impl fmt::Display for DistributionView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for bracket in self.brackets {
            let width = (bracket.population_share * BAR_SCALE)
                .ceil()
                .to_usize()
                .unwrap_or_default();
            let marker = if self.highlight == Some(bracket) {
                "<- you"
            } else {
                ""
            };
            writeln!(
                f,
                "{:<10} {:>5}% {:<14} {marker}",
                bracket.label,
                to_fixed(bracket.population_share, 1),
                "#".repeat(width)
            )?;
        }
        Ok(())
    }
}
