//! In-process survey store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use survey_application::{StorageError, SurveyStore};
use survey_domain::{AssessmentRecord, NewSurvey, SurveyId};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Survey store that keeps records in memory for the life of the process
#[derive(Default)]
pub struct InMemorySurveyStore {
    records: RwLock<HashMap<SurveyId, AssessmentRecord>>,
}

impl InMemorySurveyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SurveyStore for InMemorySurveyStore {
    async fn save(&self, survey: &NewSurvey) -> Result<SurveyId, StorageError> {
        let id = SurveyId::parse(Uuid::new_v4().to_string())
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        let record = survey.clone().into_record(id.clone(), Utc::now());
        self.records.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn get(&self, id: &SurveyId) -> Result<Option<AssessmentRecord>, StorageError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}
