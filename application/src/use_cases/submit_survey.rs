//! Submit Survey use case
//!
//! Validates a submission, assesses it and saves the resulting record.
//! Nothing is saved unless validation and assessment both succeed.

use crate::ports::progress::{NoProgress, ProgressNotifier, Stage};
use crate::ports::survey_store::{StorageError, SurveyStore};
use crate::use_cases::assess_survey::AssessSurveyUseCase;
use crate::use_cases::generate_feedback::GenerationFailure;
use std::sync::Arc;
use survey_domain::{AnswerSet, Assessment, NewSurvey, SubmissionRules, SurveyId, ValidationError};
use thiserror::Error;
use tracing::{error, info, warn};

/// Message shown when feedback could not be generated
pub const GENERATION_FAILED_MESSAGE: &str =
    "We could not generate feedback for your survey. Please try again later.";

/// Message shown when the record could not be saved
pub const SAVE_FAILED_MESSAGE: &str =
    "An error occurred while saving your survey. Please try again later.";

/// Errors that can occur while submitting a survey
#[derive(Error, Debug)]
pub enum SubmitSurveyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Feedback generation failed: {0}")]
    Generation(#[from] GenerationFailure),

    #[error("Saving survey failed: {0}")]
    Storage(#[from] StorageError),
}

impl SubmitSurveyError {
    /// Text safe to show to the submitter.
    ///
    /// Validation problems are listed; every other failure gets a generic
    /// message so backend details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            SubmitSurveyError::Validation(e) => e.to_string(),
            SubmitSurveyError::Generation(_) => GENERATION_FAILED_MESSAGE.to_string(),
            SubmitSurveyError::Storage(_) => SAVE_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitSurveyError::Validation(_))
    }
}

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmitSurveyOutput {
    pub id: SurveyId,
    pub assessment: Assessment,
}

/// Use case for submitting a survey
pub struct SubmitSurveyUseCase {
    assess: AssessSurveyUseCase,
    store: Arc<dyn SurveyStore>,
    rules: SubmissionRules,
}

impl SubmitSurveyUseCase {
    pub fn new(assess: AssessSurveyUseCase, store: Arc<dyn SurveyStore>) -> Self {
        Self {
            assess,
            store,
            rules: SubmissionRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: SubmissionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Check a submission without assessing it
    pub fn validate(&self, answers: &AnswerSet) -> Result<(), ValidationError> {
        self.rules.validate(answers, self.assess.questions())
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, answers: AnswerSet) -> Result<SubmitSurveyOutput, SubmitSurveyError> {
        self.execute_with_progress(answers, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        answers: AnswerSet,
        progress: &dyn ProgressNotifier,
    ) -> Result<SubmitSurveyOutput, SubmitSurveyError> {
        if let Err(e) = self.validate(&answers) {
            warn!("Rejected submission with {} invalid fields", e.issues.len());
            return Err(e.into());
        }

        let assessment = self.assess.execute_with_progress(&answers, progress).await?;

        progress.on_stage_start(Stage::Saving, 1);
        let new_survey = NewSurvey::new(answers, assessment.clone());
        let id = match self.store.save(&new_survey).await {
            Ok(id) => id,
            Err(e) => {
                error!("An error occurred while saving survey data: {}", e);
                progress.on_stage_complete(Stage::Saving, false);
                return Err(e.into());
            }
        };
        progress.on_stage_complete(Stage::Saving, true);

        info!("Saved survey {}", id);
        Ok(SubmitSurveyOutput { id, assessment })
    }
}
