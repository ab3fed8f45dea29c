//! Answer set entity

use crate::core::error::DomainError;
use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name of the distinguished free-text answer
pub const RESPONSE_FIELD: &str = "response";

/// Prefix of numbered answer fields (`question1`, `question2`, ...)
pub const QUESTION_FIELD_PREFIX: &str = "question";

/// Field name used for the answer to question `number`
pub fn question_field(number: usize) -> String {
    format!("{}{}", QUESTION_FIELD_PREFIX, number)
}

/// A submitter's answers: one free-text `response` plus answers keyed by
/// question number.
///
/// Missing and empty answers are allowed here; whether a submission must
/// answer everything is decided by [`SubmissionRules`](super::validation::SubmissionRules).
///
/// Serialized as a flat object: `{"response": "...", "question1": "...", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct AnswerSet {
    response: String,
    answers: BTreeMap<usize, String>,
}

impl AnswerSet {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            answers: BTreeMap::new(),
        }
    }

    /// Builder: set the answer for question `number` (1-based)
    pub fn with_answer(mut self, number: usize, answer: impl Into<String>) -> Self {
        self.set_answer(number, answer);
        self
    }

    /// Build from answers given in question order, numbering from 1
    pub fn from_ordered<I, S>(response: impl Into<String>, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answers = answers
            .into_iter()
            .enumerate()
            .map(|(i, a)| (i + 1, a.into()))
            .collect();
        Self {
            response: response.into(),
            answers,
        }
    }

    pub fn set_response(&mut self, response: impl Into<String>) {
        self.response = response.into();
    }

    pub fn set_answer(&mut self, number: usize, answer: impl Into<String>) {
        self.answers.insert(number, answer.into());
    }

    /// The free-text field used for sentiment ("" when never given)
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Raw answer for question `number`, if one was given
    pub fn answer(&self, number: usize) -> Option<&str> {
        self.answers.get(&number).map(String::as_str)
    }

    /// Answer for question `number` only when it carries text
    pub fn non_empty_answer(&self, number: usize) -> Option<&str> {
        self.answer(number).filter(|a| !is_blank(a))
    }

    /// Question numbers that have an entry, ascending
    pub fn answered_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.answers.keys().copied()
    }

    /// Parse a flat field map (`response`, `questionN`) into an answer set
    pub fn from_fields(fields: BTreeMap<String, String>) -> Result<Self, DomainError> {
        let mut set = AnswerSet::default();
        for (key, value) in fields {
            if key == RESPONSE_FIELD {
                set.response = value;
                continue;
            }
            let number = key
                .strip_prefix(QUESTION_FIELD_PREFIX)
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n > 0 && key == question_field(*n))
                .ok_or_else(|| DomainError::InvalidAnswerField(key.clone()))?;
            set.answers.insert(number, value);
        }
        Ok(set)
    }

    /// Flatten back into the `response` / `questionN` field map
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        let mut fields: BTreeMap<String, String> = self
            .answers
            .iter()
            .map(|(n, a)| (question_field(*n), a.clone()))
            .collect();
        fields.insert(RESPONSE_FIELD.to_string(), self.response.clone());
        fields
    }
}

impl TryFrom<BTreeMap<String, String>> for AnswerSet {
    type Error = DomainError;

    fn try_from(fields: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<AnswerSet> for BTreeMap<String, String> {
    fn from(set: AnswerSet) -> Self {
        set.to_fields()
    }
}
