//! Runtime configuration resolved once at startup.
//!
//! [`RuntimeConfig::resolve`] turns the merged [`FileConfig`] plus the
//! process environment into everything the adapters and use cases need:
//! the completion credential, the store location and the loaded question
//! set. Anything missing here is fatal; the process must not start.

use super::file_config::{FileConfig, StoreBackend};
use std::path::{Path, PathBuf};
use std::time::Duration;
use survey_application::FeedbackParams;
use survey_domain::{ConfigIssue, ConfigIssueCode, QuestionSet, SubmissionRules};
use thiserror::Error;

/// Fallback variable for the question set path
pub const QUESTIONS_PATH_ENV: &str = "QUESTIONS_PATH";

/// Fallback variable for the JSON store directory
pub const DATA_DIR_ENV: &str = "SURVEY_DATA_DIR";

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Missing completion service credential: set {env} or generation.api_key")]
    MissingCredential { env: String },

    #[error("Missing store location: set store.data_dir or SURVEY_DATA_DIR")]
    MissingStoreLocation,

    #[error("Missing question set: set survey.questions_path or QUESTIONS_PATH")]
    MissingQuestionsPath,

    #[error("Cannot read question set {}: {source}", path.display())]
    QuestionsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid question set {}: {reason}", path.display())]
    QuestionsInvalid { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where survey records are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// JSON documents under this directory
    JsonDir(PathBuf),
    /// Process memory
    Memory,
}

/// Fully resolved configuration, built once and passed by injection
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub api_key: String,
    pub base_url: String,
    /// Deadline for each completion request
    pub request_timeout: Option<Duration>,
    pub feedback: FeedbackParams,
    pub store: StoreLocation,
    pub questions: QuestionSet,
    pub rules: SubmissionRules,
    /// Session-signing secret; optional for the CLI
    pub secret_key: Option<String>,
    /// Non-fatal issues found while resolving
    pub warnings: Vec<ConfigIssue>,
}

impl RuntimeConfig {
    /// Resolve against the process environment
    pub fn resolve(config: &FileConfig) -> Result<Self, ConfigError> {
        Self::resolve_with(config, |name| std::env::var(name).ok())
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve_with<F>(config: &FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        let (errors, mut warnings): (Vec<_>, Vec<_>) =
            config.validate().into_iter().partition(ConfigIssue::is_error);
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|i| i.message).collect();
            return Err(ConfigError::Invalid(messages.join("; ")));
        }

        let generation = &config.generation;
        let api_key = generation
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(&generation.api_key_env))
            .ok_or_else(|| ConfigError::MissingCredential {
                env: generation.api_key_env.clone(),
            })?;

        let store = match config.store.parse_backend().0 {
            Some(StoreBackend::Memory) => StoreLocation::Memory,
            Some(StoreBackend::Json) | None => {
                let dir = config
                    .store
                    .data_dir
                    .clone()
                    .or_else(|| lookup(DATA_DIR_ENV).map(PathBuf::from))
                    .ok_or(ConfigError::MissingStoreLocation)?;
                StoreLocation::JsonDir(dir)
            }
        };

        let questions_path = config
            .survey
            .questions_path
            .clone()
            .or_else(|| lookup(QUESTIONS_PATH_ENV).map(PathBuf::from))
            .ok_or(ConfigError::MissingQuestionsPath)?;
        let questions = load_question_set(&questions_path)?;

        let secret_key = lookup(&config.survey.secret_key_env);
        if secret_key.is_none() {
            warnings.push(ConfigIssue::warning(
                ConfigIssueCode::MissingOptional {
                    field: config.survey.secret_key_env.clone(),
                },
                format!(
                    "{} is not set; session signing is unavailable",
                    config.survey.secret_key_env
                ),
            ));
        }

        let request_timeout =
            (generation.timeout_secs > 0).then(|| Duration::from_secs(generation.timeout_secs));

        Ok(Self {
            api_key,
            base_url: generation.base_url.clone(),
            request_timeout,
            feedback: generation.feedback_params(),
            store,
            questions,
            rules: config.survey.submission_rules(),
            secret_key,
            warnings,
        })
    }
}

/// Read a question set from a JSON array of strings
pub fn load_question_set(path: &Path) -> Result<QuestionSet, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| ConfigError::QuestionsUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let questions: Vec<String> =
        serde_json::from_str(&content).map_err(|e| ConfigError::QuestionsInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    QuestionSet::new(questions).map_err(|e| ConfigError::QuestionsInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn write_questions(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("questions.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn config_with(questions: PathBuf, data_dir: &Path) -> FileConfig {
        let mut config = FileConfig::default();
        config.survey.questions_path = Some(questions);
        config.store.data_dir = Some(data_dir.to_path_buf());
        config
    }

    #[test]
    fn test_resolve_complete_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let questions = write_questions(dir.path(), r#"["How are you?", "Stress 1-10?"]"#);
        let config = config_with(questions, dir.path());

        let runtime = RuntimeConfig::resolve_with(
            &config,
            env_of(&[("OPENAI_API_KEY", "sk-test"), ("SECRET_KEY", "s3cret")]),
        )
        .unwrap();

        assert_eq!(runtime.api_key, "sk-test");
        assert_eq!(runtime.questions.len(), 2);
        assert_eq!(runtime.store, StoreLocation::JsonDir(dir.path().to_path_buf()));
        assert_eq!(runtime.request_timeout, Some(Duration::from_secs(60)));
        assert_eq!(runtime.secret_key.as_deref(), Some("s3cret"));
        assert!(runtime.warnings.is_empty());
    }

    #[test]
    fn test_missing_credential_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let questions = write_questions(dir.path(), r#"["q?"]"#);
        let config = config_with(questions, dir.path());

        let err = RuntimeConfig::resolve_with(&config, env_of(&[("OPENAI_API_KEY", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { ref env } if env == "OPENAI_API_KEY"));
    }

    #[test]
    fn test_direct_api_key_wins() {
        let dir = tempfile::tempdir().unwrap();
        let questions = write_questions(dir.path(), r#"["q?"]"#);
        let mut config = config_with(questions, dir.path());
        config.generation.api_key = Some("sk-direct".to_string());

        let runtime = RuntimeConfig::resolve_with(&config, env_of(&[])).unwrap();
        assert_eq!(runtime.api_key, "sk-direct");
        // secret missing is only a warning
        assert_eq!(runtime.warnings.len(), 1);
        assert!(runtime.secret_key.is_none());
    }

    #[test]
    fn test_env_fallbacks_for_paths() {
        let dir = tempfile::tempdir().unwrap();
        let questions = write_questions(dir.path(), r#"["q?"]"#);
        let config = FileConfig::default();

        let runtime = RuntimeConfig::resolve_with(
            &config,
            env_of(&[
                ("OPENAI_API_KEY", "sk"),
                (QUESTIONS_PATH_ENV, questions.to_str().unwrap()),
                (DATA_DIR_ENV, dir.path().to_str().unwrap()),
            ]),
        )
        .unwrap();
        assert_eq!(runtime.questions.len(), 1);
        assert_eq!(runtime.store, StoreLocation::JsonDir(dir.path().to_path_buf()));
    }

    #[test]
    fn test_missing_store_location_and_questions() {
        let config = FileConfig::default();
        let err = RuntimeConfig::resolve_with(&config, env_of(&[("OPENAI_API_KEY", "sk")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingStoreLocation));

        let mut config = FileConfig::default();
        config.store.backend = "memory".to_string();
        let err = RuntimeConfig::resolve_with(&config, env_of(&[("OPENAI_API_KEY", "sk")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingQuestionsPath));
    }

    #[test]
    fn test_invalid_question_files() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.json");
        assert!(matches!(
            load_question_set(&missing),
            Err(ConfigError::QuestionsUnreadable { .. })
        ));

        let not_json = write_questions(dir.path(), "not json");
        assert!(matches!(
            load_question_set(&not_json),
            Err(ConfigError::QuestionsInvalid { .. })
        ));

        let empty = write_questions(dir.path(), "[]");
        let err = load_question_set(&empty).unwrap_err();
        assert!(err.to_string().contains("Question set is empty"));
    }

    #[test]
    fn test_validation_errors_are_fatal() {
        let mut config = FileConfig::default();
        config.generation.temperature = 5.0;
        let err = RuntimeConfig::resolve_with(&config, env_of(&[("OPENAI_API_KEY", "sk")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("temperature")));
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let dir = tempfile::tempdir().unwrap();
        let questions = write_questions(dir.path(), r#"["q?"]"#);
        let mut config = config_with(questions, dir.path());
        config.generation.timeout_secs = 0;

        let runtime =
            RuntimeConfig::resolve_with(&config, env_of(&[("OPENAI_API_KEY", "sk")])).unwrap();
        assert!(runtime.request_timeout.is_none());
    }
}
