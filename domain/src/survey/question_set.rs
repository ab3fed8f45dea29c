//! Question set value object

use crate::core::error::DomainError;
use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};

/// The ordered list of survey questions (Value Object)
///
/// Loaded once at startup and shared read-only for the lifetime of the
/// process. Position defines numbering: the first question is question 1,
/// and answers are matched to questions by that number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct QuestionSet {
    questions: Vec<String>,
}

impl QuestionSet {
    /// Build a question set, rejecting an empty list or blank questions.
    pub fn new(questions: Vec<String>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionSet);
        }
        if let Some(pos) = questions.iter().position(|q| is_blank(q)) {
            return Err(DomainError::BlankQuestion(pos + 1));
        }
        Ok(Self { questions })
    }

    /// Number of questions (N)
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question text by 1-based number
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.questions.get(i))
            .map(String::as_str)
    }

    /// Iterate `(number, question)` pairs in order, numbering from 1
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| (i + 1, q.as_str()))
    }

    /// True if `number` addresses a question in this set
    pub fn contains_number(&self, number: usize) -> bool {
        (1..=self.len()).contains(&number)
    }
}

impl TryFrom<Vec<String>> for QuestionSet {
    type Error = DomainError;

    fn try_from(questions: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionSet> for Vec<String> {
    fn from(set: QuestionSet) -> Self {
        set.questions
    }
}
