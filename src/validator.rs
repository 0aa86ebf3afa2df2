//! Structural rules for quiz documents.
//!
//! The document is inspected as an untyped [`Value`]; every field is
//! type-checked before use since quiz files are hand-authored.

use serde_json::Value;
use thiserror::Error;

use crate::models::{is_integer_literal, Field, Issue, IssueKind, JsonKind};

/// The document's top-level shape is wrong, so no record was checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("Root should be an array, got {found}")]
    RootNotArray { found: JsonKind },
}

/// Outcome of checking every record of a well-shaped document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub record_count: usize,
    pub issues: Vec<Issue>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check all records of `document`, accumulating issues.
pub fn check_document(document: &Value) -> Result<Validation, ValidateError> {
    let Value::Array(records) = document else {
        return Err(ValidateError::RootNotArray {
            found: JsonKind::of(document),
        });
    };

    let mut issues = Vec::new();
    for (index, record) in records.iter().enumerate() {
        check_record(index + 1, record, &mut issues);
    }
    tracing::debug!(
        records = records.len(),
        issues = issues.len(),
        "checked quiz records"
    );

    Ok(Validation {
        record_count: records.len(),
        issues,
    })
}

fn check_record(number: usize, record: &Value, issues: &mut Vec<Issue>) {
    let Some(fields) = record.as_object() else {
        issues.push(Issue::new(
            number,
            IssueKind::NotAnObject {
                found: JsonKind::of(record),
            },
        ));
        return;
    };

    if !fields.contains_key(Field::Question.key()) {
        issues.push(Issue::new(number, IssueKind::Missing(Field::Question)));
    }
    let answers = fields.get(Field::Answers.key());
    if answers.is_none() {
        issues.push(Issue::new(number, IssueKind::Missing(Field::Answers)));
    }
    let Some(correct) = fields.get(Field::CorrectAnswer.key()) else {
        issues.push(Issue::new(number, IssueKind::Missing(Field::CorrectAnswer)));
        return;
    };

    let answers_count = match answers {
        Some(Value::Array(options)) => {
            if options.is_empty() {
                issues.push(Issue::new(number, IssueKind::AnswersEmpty));
            }
            options.len()
        }
        Some(_) => {
            issues.push(Issue::new(number, IssueKind::AnswersNotArray));
            0
        }
        None => 0,
    };

    check_correct_answer(number, correct, answers_count, issues);
}

fn check_correct_answer(
    number: usize,
    correct: &Value,
    answers_count: usize,
    issues: &mut Vec<Issue>,
) {
    let Some(literal) = integer_literal(correct) else {
        issues.push(Issue::new(
            number,
            IssueKind::CorrectAnswerNotInteger {
                found: JsonKind::of(correct),
            },
        ));
        return;
    };

    // Integers wider than i128 can never index into `answers`.
    let (in_range, value) = match literal.parse::<i128>() {
        Ok(index) => (index >= 0 && index < answers_count as i128, index.to_string()),
        Err(_) => (false, literal),
    };
    if !in_range {
        issues.push(Issue::new(
            number,
            IssueKind::CorrectAnswerOutOfRange {
                value,
                answers_count,
            },
        ));
    }
}

fn integer_literal(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if is_integer_literal(n) => Some(n.to_string()),
        _ => None,
    }
}
