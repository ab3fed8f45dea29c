//! Domain layer for survey-assess
//!
//! This crate contains the survey model, sentiment classification and the
//! prompt templates used to request feedback. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question Set**: the ordered survey questions, fixed at startup
//! - **Answer Set**: one submission, a free-text `response` plus numbered answers
//! - **Verdict**: one of three fixed narratives chosen by the sentiment of `response`
//! - **Feedback Item**: generated feedback for one answered question
//! - **Assessment Record**: the stored combination of all of the above

pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod sentiment;
pub mod survey;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use generation::{CompletionRequest, SamplingConfig};
pub use prompt::{FeedbackPrompt, RESPONSE_MARKER};
pub use sentiment::{LexiconAnalyzer, Sentiment, SentimentAnalyzer};
pub use survey::{
    answers::AnswerSet,
    feedback::{Assessment, FeedbackItem},
    question_set::QuestionSet,
    record::{AssessmentRecord, NewSurvey, SurveyId},
    validation::{FieldIssue, FieldProblem, SubmissionRules, ValidationError},
};
