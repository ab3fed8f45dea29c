//! Survey Store port
//!
//! Document-style persistence for assessment records.

use async_trait::async_trait;
use survey_domain::{AssessmentRecord, NewSurvey, SurveyId};
use thiserror::Error;

/// Errors raised by a survey store adapter.
///
/// These carry low-level detail and are meant for logs; use cases turn them
/// into generic user-facing messages.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Persistence for assessment records
///
/// Records are immutable once saved. The store assigns identifiers.
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Persist a new record and return its freshly assigned identifier
    async fn save(&self, survey: &NewSurvey) -> Result<SurveyId, StorageError>;

    /// Look up a record; `Ok(None)` when no record has this identifier
    async fn get(&self, id: &SurveyId) -> Result<Option<AssessmentRecord>, StorageError>;

    /// All stored records, in no guaranteed order
    async fn list_all(&self) -> Result<Vec<AssessmentRecord>, StorageError>;
}
