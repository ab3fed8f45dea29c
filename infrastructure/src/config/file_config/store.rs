//! Survey store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use survey_domain::{ConfigIssue, ConfigIssueCode};

/// Which survey store adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON documents on disk
    Json,
    /// Process memory; records vanish on exit
    Memory,
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// "json" or "memory"
    pub backend: String,
    /// Root directory of the JSON document store
    pub data_dir: Option<PathBuf>,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: "json".to_string(),
            data_dir: None,
        }
    }
}

impl FileStoreConfig {
    /// Parse the backend name, collecting an issue for unknown values.
    pub fn parse_backend(&self) -> (Option<StoreBackend>, Vec<ConfigIssue>) {
        match self.backend.trim().to_lowercase().as_str() {
            "json" | "file" => (Some(StoreBackend::Json), vec![]),
            "memory" | "mem" => (Some(StoreBackend::Memory), vec![]),
            _ => {
                let issue = ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "store.backend".to_string(),
                        value: self.backend.clone(),
                        valid_values: vec!["json".to_string(), "memory".to_string()],
                    },
                    format!("store.backend: unknown value '{}'", self.backend),
                );
                (None, vec![issue])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        let config = FileStoreConfig::default();
        assert_eq!(config.parse_backend().0, Some(StoreBackend::Json));

        let config = FileStoreConfig {
            backend: "Memory".to_string(),
            data_dir: None,
        };
        assert_eq!(config.parse_backend().0, Some(StoreBackend::Memory));
    }

    #[test]
    fn test_unknown_backend_is_error() {
        let config = FileStoreConfig {
            backend: "firestore".to_string(),
            data_dir: None,
        };
        let (backend, issues) = config.parse_backend();
        assert!(backend.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
