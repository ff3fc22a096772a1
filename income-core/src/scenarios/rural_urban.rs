use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::calculations::common::{format_indian, max, round_half_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricUnit {
    Rupees,
    Percent,
    /// Free-text unit such as "km to hospital".
    Other(&'static str),
}

/// One rural versus urban data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuralUrbanMetric {
    pub category: &'static str,
    pub rural: Decimal,
    pub urban: Decimal,
    pub unit: MetricUnit,
}

impl RuralUrbanMetric {
    pub fn format_value(
        &self,
        value: Decimal,
    ) -> String {
        match self.unit {
            MetricUnit::Rupees => format!("₹{}", format_indian(value)),
            MetricUnit::Percent => format!("{value}%"),
            MetricUnit::Other(unit) => format!("{value} {unit}"),
        }
    }

    /// How much more the dearer side costs, for rupee metrics only.
    pub fn difference(&self) -> Option<String> {
        if self.unit != MetricUnit::Rupees {
            return None;
        }

        let higher = max(self.rural, self.urban);
        let (side, lower) = if self.urban > self.rural {
            ("Urban", self.rural)
        } else {
            ("Rural", self.urban)
        };

        if lower.is_zero() {
            return None;
        }

        let percent = round_half_up((higher / lower - dec!(1)) * dec!(100), 0);
        Some(format!("{side} costs {percent}% more"))
    }
}

impl fmt::Display for RuralUrbanMetric {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}: rural {}, urban {}",
            self.category,
            self.format_value(self.rural),
            self.format_value(self.urban)
        )
    }
}

pub static RURAL_URBAN_METRICS: [RuralUrbanMetric; 6] = [
    RuralUrbanMetric {
        category: "Median Monthly Income",
        rural: dec!(8200),
        urban: dec!(12500),
        unit: MetricUnit::Rupees,
    },
    RuralUrbanMetric {
        category: "Food Cost (Basic)",
        rural: dec!(2800),
        urban: dec!(4200),
        unit: MetricUnit::Rupees,
    },
    RuralUrbanMetric {
        category: "Housing Cost",
        rural: dec!(800),
        urban: dec!(3500),
        unit: MetricUnit::Rupees,
    },
    RuralUrbanMetric {
        category: "Healthcare Access",
        rural: dec!(15),
        urban: dec!(65),
        unit: MetricUnit::Other("km to hospital"),
    },
    RuralUrbanMetric {
        category: "School Access",
        rural: dec!(8),
        urban: dec!(2),
        unit: MetricUnit::Other("km to secondary school"),
    },
    RuralUrbanMetric {
        category: "Unemployment Rate",
        rural: dec!(5.2),
        urban: dec!(7.8),
        unit: MetricUnit::Percent,
    },
];
