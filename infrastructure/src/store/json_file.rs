//! JSON document store: one file per record under `<data_dir>/surveys/`

use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use survey_application::{StorageError, SurveyStore};
use survey_domain::{AssessmentRecord, NewSurvey, SurveyId};
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Collection directory under the data root
const COLLECTION: &str = "surveys";

/// Survey store backed by JSON files.
///
/// Each record is written to a temporary file and renamed into place, so a
/// crash never leaves a half-written document under its final name.
pub struct JsonFileSurveyStore {
    dir: PathBuf,
}

impl JsonFileSurveyStore {
    /// Open (creating if needed) the collection under `data_dir`
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = data_dir.as_ref().join(COLLECTION);
        fs::create_dir_all(&dir).await?;
        info!("Survey store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, id: &SurveyId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    async fn read_document(path: &Path) -> Result<AssessmentRecord, StorageError> {
        let content = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl SurveyStore for JsonFileSurveyStore {
    async fn save(&self, survey: &NewSurvey) -> Result<SurveyId, StorageError> {
        let id = SurveyId::parse(Uuid::new_v4().to_string())
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        let record = survey.clone().into_record(id.clone(), Utc::now());
        let content = serde_json::to_vec_pretty(&record)?;

        let path = self.document_path(&id);
        let tmp = self.dir.join(format!(".{}.json.tmp", id));
        fs::write(&tmp, &content).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!("Saved survey {} ({} bytes)", id, content.len());
        Ok(id)
    }

    async fn get(&self, id: &SurveyId) -> Result<Option<AssessmentRecord>, StorageError> {
        match Self::read_document(&self.document_path(id)).await {
            Ok(record) => Ok(Some(record)),
            Err(StorageError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_all(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut records = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_document(&path).await {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping unreadable survey document {}: {}", path.display(), e),
            }
        }

        Ok(records)
    }
}
