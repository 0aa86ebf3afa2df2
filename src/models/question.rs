use serde::Deserialize;

/// A quiz question as consumed by quiz tooling once the file has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    /// The text of the correct answer option.
    pub fn correct_text(&self) -> Option<&str> {
        self.answers.get(self.correct_answer).map(String::as_str)
    }
}
