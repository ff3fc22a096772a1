//! Exploration progress across the feature sections.
//!
//! Tracks which sections have been opened and awards achievements as
//! milestones are reached. The tracker is persisted under
//! [`PROGRESS_KEY`](crate::storage::PROGRESS_KEY) as TOML.

use std::fmt;

use income_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::storage::{KeyValueStore, PROGRESS_KEY, StorageError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Overview,
    Comparison,
    Budget,
    Healthcare,
    Education,
    RuralUrban,
    PovertyTrap,
    Sources,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Overview,
        Section::Comparison,
        Section::Budget,
        Section::Healthcare,
        Section::Education,
        Section::RuralUrban,
        Section::PovertyTrap,
        Section::Sources,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Comparison => "comparison",
            Section::Budget => "budget",
            Section::Healthcare => "healthcare",
            Section::Education => "education",
            Section::RuralUrban => "rural-urban",
            Section::PovertyTrap => "poverty-trap",
            Section::Sources => "sources",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == s)
    }
}

impl fmt::Display for Section {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How full the progress piggy bank is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FillLevel {
    Empty,
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl FillLevel {
    pub fn for_percent(percent: Decimal) -> Self {
        if percent >= Decimal::ONE_HUNDRED {
            FillLevel::Full
        } else if percent >= Decimal::from(75) {
            FillLevel::ThreeQuarters
        } else if percent >= Decimal::from(50) {
            FillLevel::Half
        } else if percent >= Decimal::from(25) {
            FillLevel::Quarter
        } else {
            FillLevel::Empty
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FillLevel::Empty => "empty",
            FillLevel::Quarter => "quarter",
            FillLevel::Half => "half",
            FillLevel::ThreeQuarters => "three-quarters",
            FillLevel::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    RealitySeeker,
    PrivilegeAware,
    Explorer,
    Champion,
}

impl Achievement {
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::RealitySeeker => "Reality Seeker",
            Achievement::PrivilegeAware => "Privilege Aware",
            Achievement::Explorer => "Data Explorer",
            Achievement::Champion => "Awareness Champion",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::RealitySeeker => "Completed the income assessment",
            Achievement::PrivilegeAware => "Used the income comparison tool",
            Achievement::Explorer => "Explored multiple inequality aspects",
            Achievement::Champion => "Explored all sections - truly committed to understanding!",
        }
    }
}

/// Sections needed for [`Achievement::Explorer`].
const EXPLORER_SECTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressTracker {
    visited_sections: Vec<Section>,
    achievements: Vec<Achievement>,
    assessment_completed: bool,
}

impl Default for ProgressTracker {
    /// The overview counts as visited from the start.
    fn default() -> Self {
        Self {
            visited_sections: vec![Section::Overview],
            achievements: Vec::new(),
            assessment_completed: false,
        }
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the saved tracker, or a fresh one when nothing is stored.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        match store.get(PROGRESS_KEY)? {
            Some(saved) => toml::from_str(&saved).map_err(|source| StorageError::Decode {
                key: PROGRESS_KEY.to_string(),
                source,
            }),
            None => Ok(Self::new()),
        }
    }

    pub fn save(
        &self,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), StorageError> {
        let encoded = toml::to_string(self)?;
        store.set(PROGRESS_KEY, &encoded)
    }

    pub fn visited_sections(&self) -> &[Section] {
        &self.visited_sections
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn assessment_completed(&self) -> bool {
        self.assessment_completed
    }

    /// Records a visit and returns any achievements it unlocked.
    pub fn visit(
        &mut self,
        section: Section,
    ) -> Vec<Achievement> {
        if !self.visited_sections.contains(&section) {
            self.visited_sections.push(section);
        }
        self.award()
    }

    /// Records a finished assessment and returns any achievements it unlocked.
    pub fn complete_assessment(&mut self) -> Vec<Achievement> {
        self.assessment_completed = true;
        self.award()
    }

    /// Forgets visited sections except the overview.
    pub fn reset_visits(&mut self) {
        self.visited_sections = vec![Section::Overview];
    }

    /// Share of sections visited, in `[0, 100]`.
    pub fn percent(&self) -> Decimal {
        Decimal::from(self.visited_sections.len()) * Decimal::ONE_HUNDRED
            / Decimal::from(Section::ALL.len())
    }

    /// [`percent`](Self::percent) rounded to a whole number for display.
    pub fn rounded_percent(&self) -> Decimal {
        round_half_up(self.percent(), 0)
    }

    pub fn fill_level(&self) -> FillLevel {
        FillLevel::for_percent(self.percent())
    }

    pub fn is_complete(&self) -> bool {
        self.visited_sections.len() == Section::ALL.len()
    }

    fn award(&mut self) -> Vec<Achievement> {
        let earned = [
            (self.assessment_completed, Achievement::RealitySeeker),
            (
                self.visited_sections.contains(&Section::Comparison),
                Achievement::PrivilegeAware,
            ),
            (
                self.visited_sections.len() >= EXPLORER_SECTIONS,
                Achievement::Explorer,
            ),
            (self.is_complete(), Achievement::Champion),
        ];

        let new: Vec<Achievement> = earned
            .into_iter()
            .filter(|(reached, achievement)| *reached && !self.achievements.contains(achievement))
            .map(|(_, achievement)| achievement)
            .collect();

        for achievement in &new {
            info!(achievement = achievement.title(), "achievement unlocked");
        }
        self.achievements.extend(new.iter().copied());
        new
    }
}
