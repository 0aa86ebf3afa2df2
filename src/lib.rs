//! # quiz-validator
//!
//! Pre-publication checks for quiz JSON files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_validator::validate;
//!
//! // Prints the report to stdout
//! let verdict = validate("questions.json");
//! if !verdict.success {
//!     std::process::exit(1);
//! }
//! ```

mod data;
mod models;
pub mod report;
pub mod validator;

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

pub use data::{load_document, LoadError, DEFAULT_QUIZ_PATH};
pub use models::{Field, Issue, IssueKind, JsonKind, Question};
pub use validator::{check_document, ValidateError, Validation};

/// Error type for quiz file operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The file could not be read or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The top-level value is not an array.
    #[error(transparent)]
    Structure(#[from] ValidateError),
    /// One or more records break the rules.
    #[error("Found {} issues", issues.len())]
    Invalid { issues: Vec<Issue> },
    /// Records passed validation but do not fit the typed model.
    #[error("Failed to read questions: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Final pass/fail result of validating a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub success: bool,
    pub issues: Vec<Issue>,
}

impl From<&Result<Validation, QuizError>> for Verdict {
    fn from(result: &Result<Validation, QuizError>) -> Self {
        match result {
            Ok(validation) => Self {
                success: validation.is_valid(),
                issues: validation.issues.clone(),
            },
            Err(_) => Self {
                success: false,
                issues: Vec::new(),
            },
        }
    }
}

/// Load and check a quiz file without printing anything.
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<Validation, QuizError> {
    let document = load_document(path)?;
    Ok(check_document(&document)?)
}

/// Validate a quiz file, printing the report to stdout.
pub fn validate<P: AsRef<Path>>(path: P) -> Verdict {
    let stdout = io::stdout();
    validate_to(path, &mut stdout.lock())
}

/// Validate a quiz file, writing the report to `out`.
///
/// A failure to write the report is logged and does not change the verdict.
pub fn validate_to<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Verdict {
    let result = check_file(path);
    if let Err(e) = report::render(out, &result) {
        tracing::warn!("failed to write report: {}", e);
    }
    Verdict::from(&result)
}

/// Load the questions of a quiz file, rejecting files that fail validation.
///
/// # Example
///
/// ```rust,no_run
/// use quiz_validator::load_questions;
///
/// let questions = load_questions("questions.json").expect("Failed to load quiz");
/// println!("{} questions", questions.len());
/// ```
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, QuizError> {
    let document = load_document(path)?;
    let validation = check_document(&document)?;
    if !validation.is_valid() {
        return Err(QuizError::Invalid {
            issues: validation.issues,
        });
    }
    Ok(serde_json::from_value(document)?)
}
