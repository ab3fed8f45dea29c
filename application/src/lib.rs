//! Application layer for survey-assess
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::FeedbackParams;
pub use ports::{
    completion_gateway::{CompletionGateway, GatewayError},
    progress::{NoProgress, ProgressNotifier, Stage},
    survey_store::{StorageError, SurveyStore},
};
pub use use_cases::assess_survey::AssessSurveyUseCase;
pub use use_cases::generate_feedback::{GenerateFeedbackUseCase, GenerationFailure};
pub use use_cases::submit_survey::{SubmitSurveyError, SubmitSurveyOutput, SubmitSurveyUseCase};
pub use use_cases::view_survey::{ViewSurveyError, ViewSurveyUseCase};
