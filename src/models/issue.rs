//! Per-record validation issues.

use std::fmt;

use super::JsonKind;

/// A required field of a question record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Question,
    Answers,
    CorrectAnswer,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Question => "question",
            Field::Answers => "answers",
            Field::CorrectAnswer => "correct_answer",
        }
    }
}

/// What is wrong with a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The record itself is not a JSON object.
    NotAnObject { found: JsonKind },
    /// A required key is absent.
    Missing(Field),
    /// `answers` is present but not an array.
    AnswersNotArray,
    /// `answers` is an empty array.
    AnswersEmpty,
    /// `correct_answer` is not an integer.
    CorrectAnswerNotInteger { found: JsonKind },
    /// `correct_answer` does not index into `answers`. `value` is the integer in decimal.
    CorrectAnswerOutOfRange { value: String, answers_count: usize },
}

/// A single problem found in the record at `question` (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub question: usize,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(question: usize, kind: IssueKind) -> Self {
        Self { question, kind }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}: ", self.question)?;
        match &self.kind {
            IssueKind::NotAnObject { found } => write!(f, "should be an object, got {}", found),
            IssueKind::Missing(field) => write!(f, "Missing '{}' field", field.key()),
            IssueKind::AnswersNotArray => write!(f, "'answers' should be an array"),
            IssueKind::AnswersEmpty => write!(f, "'answers' array is empty"),
            IssueKind::CorrectAnswerNotInteger { found } => {
                write!(f, "'correct_answer' should be a number, got {}", found)
            }
            // An empty or missing answers list prints as (0--1).
            IssueKind::CorrectAnswerOutOfRange {
                value,
                answers_count,
            } => write!(
                f,
                "'correct_answer' ({}) out of range (0-{})",
                value,
                *answers_count as i128 - 1
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages() {
        let issue = Issue::new(2, IssueKind::Missing(Field::CorrectAnswer));
        assert_eq!(issue.to_string(), "Question 2: Missing 'correct_answer' field");

        let issue = Issue::new(
            1,
            IssueKind::CorrectAnswerOutOfRange {
                value: "5".to_string(),
                answers_count: 1,
            },
        );
        assert_eq!(
            issue.to_string(),
            "Question 1: 'correct_answer' (5) out of range (0-0)"
        );

        let issue = Issue::new(
            3,
            IssueKind::CorrectAnswerNotInteger {
                found: JsonKind::String,
            },
        );
        assert_eq!(
            issue.to_string(),
            "Question 3: 'correct_answer' should be a number, got string"
        );
    }

    #[test]
    fn test_out_of_range_with_no_answers() {
        let issue = Issue::new(
            4,
            IssueKind::CorrectAnswerOutOfRange {
                value: "0".to_string(),
                answers_count: 0,
            },
        );
        assert_eq!(
            issue.to_string(),
            "Question 4: 'correct_answer' (0) out of range (0--1)"
        );
    }
}
