//! View Survey use case
//!
//! Retrieves one stored assessment record by identifier, or lists them all.

use crate::ports::survey_store::{StorageError, SurveyStore};
use std::sync::Arc;
use survey_domain::{AssessmentRecord, SurveyId};
use thiserror::Error;
use tracing::{debug, error};

/// Message shown when no record has the requested identifier
pub const NOT_FOUND_MESSAGE: &str = "Survey not found.";

/// Message shown when the store fails during retrieval
pub const RETRIEVE_FAILED_MESSAGE: &str = "An error occurred while retrieving survey data.";

/// Errors that can occur while retrieving surveys
#[derive(Error, Debug)]
pub enum ViewSurveyError {
    #[error("Survey not found: {0}")]
    NotFound(String),

    #[error("Retrieving survey failed: {0}")]
    Storage(#[from] StorageError),
}

impl ViewSurveyError {
    /// Text safe to show to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ViewSurveyError::NotFound(_) => NOT_FOUND_MESSAGE,
            ViewSurveyError::Storage(_) => RETRIEVE_FAILED_MESSAGE,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewSurveyError::NotFound(_))
    }
}

/// Use case for reading stored surveys
pub struct ViewSurveyUseCase {
    store: Arc<dyn SurveyStore>,
}

impl ViewSurveyUseCase {
    pub fn new(store: Arc<dyn SurveyStore>) -> Self {
        Self { store }
    }

    /// Fetch one record.
    ///
    /// `raw_id` is user input; an identifier no store could have issued is
    /// reported as not found rather than as a storage failure.
    pub async fn get(&self, raw_id: &str) -> Result<AssessmentRecord, ViewSurveyError> {
        let Ok(id) = SurveyId::parse(raw_id) else {
            debug!("Rejected malformed survey id {:?}", raw_id);
            return Err(ViewSurveyError::NotFound(raw_id.to_string()));
        };

        match self.store.get(&id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(ViewSurveyError::NotFound(raw_id.to_string())),
            Err(e) => {
                error!("An error occurred while retrieving survey {}: {}", id, e);
                Err(e.into())
            }
        }
    }

    /// All records, oldest first
    pub async fn list(&self) -> Result<Vec<AssessmentRecord>, ViewSurveyError> {
        let mut records = self.store.list_all().await.map_err(|e| {
            error!("An error occurred while listing surveys: {}", e);
            ViewSurveyError::from(e)
        })?;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(records)
    }
}
