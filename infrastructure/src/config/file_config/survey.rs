//! Survey configuration from TOML (`[survey]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use survey_domain::SubmissionRules;

/// Raw survey configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSurveyConfig {
    /// JSON file holding the array of question strings
    pub questions_path: Option<PathBuf>,
    /// Reject submissions that leave any question unanswered
    pub require_all_answers: bool,
    /// Environment variable holding the session-signing secret
    pub secret_key_env: String,
}

impl Default for FileSurveyConfig {
    fn default() -> Self {
        Self {
            questions_path: None,
            require_all_answers: true,
            secret_key_env: "SECRET_KEY".to_string(),
        }
    }
}

impl FileSurveyConfig {
    pub fn submission_rules(&self) -> SubmissionRules {
        SubmissionRules {
            require_all_answers: self.require_all_answers,
        }
    }
}
