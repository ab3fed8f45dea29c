//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod output;
mod store;
mod survey;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use store::{FileStoreConfig, StoreBackend};
pub use survey::FileSurveyConfig;

use serde::{Deserialize, Serialize};
use survey_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion service settings
    pub generation: FileGenerationConfig,
    /// Survey store settings
    pub store: FileStoreConfig,
    /// Question set and submission rules
    pub survey: FileSurveyConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log destination
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Covers value ranges and enum-like strings only. Whether credentials
    /// and files actually exist is checked when the runtime configuration is
    /// resolved.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.generation.validate());
        issues.extend(self.store.parse_backend().1);
        issues
    }
}
