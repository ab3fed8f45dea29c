//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Question {0} is blank")]
    BlankQuestion(usize),

    #[error("Invalid answer field: {0}")]
    InvalidAnswerField(String),

    #[error("Invalid survey id: {0}")]
    InvalidSurveyId(String),
}
