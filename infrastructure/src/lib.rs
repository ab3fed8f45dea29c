//! Infrastructure layer for survey-assess
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generation;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileOutputConfig, RuntimeConfig, StoreLocation,
};
pub use generation::OpenAiCompletionGateway;
pub use store::{InMemorySurveyStore, JsonFileSurveyStore};
