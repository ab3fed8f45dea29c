//! Configuration file loading for survey-assess
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SURVEY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./survey.toml` or `./.survey.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/survey-assess/config.toml`
//! 5. Default values
//!
//! [`RuntimeConfig`] then resolves credentials and loads the question set.

mod file_config;
mod loader;
mod runtime;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileLoggingConfig, FileOutputConfig, FileStoreConfig,
    FileSurveyConfig, StoreBackend,
};
pub use loader::ConfigLoader;
pub use runtime::{
    ConfigError, DATA_DIR_ENV, QUESTIONS_PATH_ENV, RuntimeConfig, StoreLocation, load_question_set,
};
