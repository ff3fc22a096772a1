//! CSV loader for batches of survey responses.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Header
//! names are case-sensitive.
//!
//! | Column           | Required | Type   | Notes                                      |
//! |------------------|----------|--------|--------------------------------------------|
//! | `monthly_income` | yes      | string | Same rules as the questionnaire field      |
//! | `perception`     | no       | string | Self-identified class; empty for none      |
//!
//! ### Example
//!
//! ```csv
//! monthly_income,perception
//! 9000,Lower Middle Class
//! "₹1,00,000",Middle Class
//! 2500,
//! ```
use std::path::{Path, PathBuf};

use income_core::ClassificationResult;
use income_core::calculations::{ClassificationError, IncomeClassifier};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::utils::parse_income;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    monthly_income: String,
    perception: Option<String>,
}

/// One validated row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub monthly_income: Decimal,
    /// Empty when the cell was blank or the column absent.
    pub perception: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// Bad structure, missing required column, and the like.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `row` is 1-based (header = row 0).
    #[error("invalid monthly income '{value}' on row {row}")]
    InvalidIncome { value: String, row: usize },

    #[error("row {row} could not be classified: {source}")]
    Classification {
        row: usize,
        #[source]
        source: ClassificationError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<SurveyResponse, CsvLoadError> {
    let monthly_income =
        parse_income(&row.monthly_income).map_err(|_| CsvLoadError::InvalidIncome {
            value: row.monthly_income.clone(),
            row: row_number,
        })?;

    Ok(SurveyResponse {
        row: row_number,
        monthly_income,
        perception: row.perception.unwrap_or_default(),
    })
}

/// Parses CSV text into responses, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidIncome`] for the first row whose income is
///   empty, non-numeric or not positive.
pub fn load_from_str(input: &str) -> Result<Vec<SurveyResponse>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<SurveyResponse>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let responses = load_from_str(&contents)?;
    debug!(path = %path.display(), rows = responses.len(), "loaded survey responses");
    Ok(responses)
}

/// Classifies every response, stopping at the first failure.
pub fn classify_all(
    responses: &[SurveyResponse],
    classifier: &IncomeClassifier<'_>,
) -> Result<Vec<ClassificationResult>, CsvLoadError> {
    responses
        .iter()
        .map(|response| {
            classifier
                .classify(response.monthly_income, &response.perception)
                .map_err(|source| CsvLoadError::Classification {
                    row: response.row,
                    source,
                })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
