//! Session state for one walk through the assessment.
//!
//! Holds the questionnaire answers, the current step and the last result.
//! Nothing here is persisted except the completion flag and progress, which
//! go through a [`KeyValueStore`].

use income_core::calculations::{ClassificationError, IncomeClassifier};
use income_core::{ClassificationResult, is_known_perception};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::{info, warn};

use crate::progress::{Achievement, ProgressTracker, Section};
use crate::storage::{KeyValueStore, StorageError, mark_assessment_completed};
use crate::utils::{ParseIncomeError, parse_income, parse_optional_amount};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Intro,
    Questionnaire,
    Results,
}

/// Raw questionnaire answers, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAnswers {
    pub monthly_income: String,
    pub savings: String,
    pub disposable_income: String,
    pub expenditure: String,
    pub debt: String,
    pub perception: String,
}

impl UserAnswers {
    pub fn savings(&self) -> Option<Decimal> {
        parse_optional_amount(&self.savings)
    }

    pub fn disposable_income(&self) -> Option<Decimal> {
        parse_optional_amount(&self.disposable_income)
    }

    pub fn expenditure(&self) -> Option<Decimal> {
        parse_optional_amount(&self.expenditure)
    }

    pub fn debt(&self) -> Option<Decimal> {
        parse_optional_amount(&self.debt)
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Income(#[from] ParseIncomeError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Income at which a "Middle Class" self-perception earns the celebration.
const REVELATION_INCOME: Decimal = dec!(25000);

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub step: Step,
    pub answers: UserAnswers,
    pub current_section: Section,
    pub result: Option<ClassificationResult>,
    pub progress: ProgressTracker,
}

impl AppState {
    /// State for a new session, picking up saved progress.
    pub fn new(progress: ProgressTracker) -> Self {
        Self {
            progress,
            ..Default::default()
        }
    }

    /// Moves from the intro to the questionnaire.
    pub fn begin(&mut self) {
        if self.step == Step::Intro {
            self.step = Step::Questionnaire;
        }
    }

    /// Classifies the answered income and moves to the results step.
    ///
    /// On success the completion flag and the updated progress are written
    /// to `store`. On invalid income the state is left unchanged.
    pub fn submit(
        &mut self,
        classifier: &IncomeClassifier<'_>,
        store: &mut dyn KeyValueStore,
    ) -> Result<&ClassificationResult, SubmitError> {
        let income = parse_income(&self.answers.monthly_income)?;
        if !self.answers.perception.is_empty() && !is_known_perception(&self.answers.perception) {
            warn!(perception = %self.answers.perception, "unrecognised perceived class");
        }

        let result = classifier.classify(income, &self.answers.perception)?;

        mark_assessment_completed(store)?;
        self.progress.complete_assessment();
        self.progress.save(store)?;

        self.step = Step::Results;
        Ok(self.result.insert(result))
    }

    /// Opens a feature section on the results screen.
    pub fn open_section(
        &mut self,
        section: Section,
        store: &mut dyn KeyValueStore,
    ) -> Result<Vec<Achievement>, StorageError> {
        self.current_section = section;
        let unlocked = self.progress.visit(section);
        self.progress.save(store)?;
        Ok(unlocked)
    }

    /// True when a high earner calls themselves "Middle Class".
    pub fn is_revelation(&self) -> bool {
        self.result.as_ref().is_some_and(|result| {
            result.income >= REVELATION_INCOME && self.answers.perception == "Middle Class"
        })
    }

    /// Back to the intro with empty answers. Visited sections restart from
    /// the overview; earned achievements are kept.
    pub fn restart(&mut self) {
        let mut progress = std::mem::take(&mut self.progress);
        progress.reset_visits();
        info!("session restarted");
        *self = Self::new(progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ASSESSMENT_COMPLETED_KEY, MemoryStore, assessment_completed};
    use income_core::ClassLabel;
    use pretty_assertions::assert_eq;

    fn answered(
        income: &str,
        perception: &str,
    ) -> AppState {
        let mut state = AppState::default();
        state.begin();
        state.answers.monthly_income = income.to_string();
        state.answers.perception = perception.to_string();
        state
    }

    #[test]
    fn begin_moves_to_questionnaire() {
        let mut state = AppState::default();
        assert_eq!(state.step, Step::Intro);

        state.begin();
        assert_eq!(state.step, Step::Questionnaire);
    }

    #[test]
    fn submit_classifies_and_marks_completion() {
        let mut store = MemoryStore::new();
        let mut state = answered("30,000", "Middle Class");

        let result = state
            .submit(&IncomeClassifier::national(), &mut store)
            .unwrap();

        assert_eq!(result.class_label, ClassLabel::UpperMiddleClass);
        assert_eq!(state.step, Step::Results);
        assert!(state.is_revelation());
        assert!(assessment_completed(&store).unwrap());
        assert_eq!(
            state.progress.achievements(),
            &[Achievement::RealitySeeker]
        );
    }

    #[test]
    fn invalid_income_leaves_state_unchanged() {
        let mut store = MemoryStore::new();
        let mut state = answered("abc", "Middle Class");

        let err = state
            .submit(&IncomeClassifier::national(), &mut store)
            .unwrap_err();

        assert_eq!(err.to_string(), "Please enter a valid income amount");
        assert_eq!(state.step, Step::Questionnaire);
        assert!(state.result.is_none());
        assert_eq!(store.get(ASSESSMENT_COMPLETED_KEY).unwrap(), None);
    }

    #[test]
    fn revelation_needs_exact_middle_class_perception() {
        let mut store = MemoryStore::new();
        let mut state = answered("30000", "Upper Middle Class");
        state
            .submit(&IncomeClassifier::national(), &mut store)
            .unwrap();

        assert!(!state.is_revelation());
    }

    #[test]
    fn optional_answers_parse_when_present() {
        let answers = UserAnswers {
            savings: "2,000".to_string(),
            debt: "".to_string(),
            ..Default::default()
        };

        assert_eq!(answers.savings(), Some(rust_decimal_macros::dec!(2000)));
        assert_eq!(answers.debt(), None);
        assert_eq!(answers.expenditure(), None);
    }

    #[test]
    fn open_section_records_visit() {
        let mut store = MemoryStore::new();
        let mut state = AppState::default();

        let unlocked = state.open_section(Section::Comparison, &mut store).unwrap();

        assert_eq!(unlocked, vec![Achievement::PrivilegeAware]);
        assert_eq!(state.current_section, Section::Comparison);
        assert_eq!(ProgressTracker::load(&store).unwrap(), state.progress);
    }

    #[test]
    fn restart_clears_answers_but_keeps_achievements() {
        let mut store = MemoryStore::new();
        let mut state = answered("9000", "Lower Class");
        state
            .submit(&IncomeClassifier::national(), &mut store)
            .unwrap();
        state.open_section(Section::Budget, &mut store).unwrap();

        state.restart();

        assert_eq!(state.step, Step::Intro);
        assert_eq!(state.answers, UserAnswers::default());
        assert!(state.result.is_none());
        assert_eq!(state.progress.visited_sections(), &[Section::Overview]);
        assert_eq!(
            state.progress.achievements(),
            &[Achievement::RealitySeeker]
        );
    }
}
