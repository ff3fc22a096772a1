use serde::{Deserialize, Serialize};

/// Social-class tier derived from an income percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    BelowPovertyLine,
    LowerIncome,
    LowerMiddleClass,
    MiddleClass,
    UpperMiddleClass,
    UpperClass,
    EliteUltraRich,
}

impl ClassLabel {
    /// All tiers, poorest first.
    pub const ALL: [ClassLabel; 7] = [
        Self::BelowPovertyLine,
        Self::LowerIncome,
        Self::LowerMiddleClass,
        Self::MiddleClass,
        Self::UpperMiddleClass,
        Self::UpperClass,
        Self::EliteUltraRich,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelowPovertyLine => "Below Poverty Line",
            Self::LowerIncome => "Lower Income",
            Self::LowerMiddleClass => "Lower Middle Class",
            Self::MiddleClass => "Middle Class",
            Self::UpperMiddleClass => "Upper Middle Class",
            Self::UpperClass => "Upper Class",
            Self::EliteUltraRich => "Elite/Ultra Rich",
        }
    }

    /// Chart color token for the tier.
    pub fn color(&self) -> &'static str {
        match self {
            Self::BelowPovertyLine => "#dc2626",
            Self::LowerIncome => "#ea580c",
            Self::LowerMiddleClass => "#d97706",
            Self::MiddleClass => "#eab308",
            Self::UpperMiddleClass => "#059669",
            Self::UpperClass => "#0284c7",
            Self::EliteUltraRich => "#7c3aed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == s)
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_label() {
        for label in ClassLabel::ALL {
            assert_eq!(ClassLabel::parse(label.as_str()), Some(label));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(ClassLabel::parse("middle class"), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ClassLabel::EliteUltraRich.to_string(), "Elite/Ultra Rich");
    }
}
