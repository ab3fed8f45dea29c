//! Completion service configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use survey_application::FeedbackParams;
use survey_application::config::feedback_params::DEFAULT_MODEL;
use survey_domain::{ConfigIssue, ConfigIssueCode, SamplingConfig};

/// Completion service settings.
///
/// # Example
///
/// ```toml
/// [generation]
/// api_key_env = "OPENAI_API_KEY"
/// base_url = "https://api.openai.com"
/// model = "gpt-3.5-turbo-instruct"
/// temperature = 0.5
/// max_tokens = 100
/// timeout_secs = 60
/// enrich_feedback = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible completions API.
    pub base_url: String,
    /// Model name sent with each request.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    /// Per-request deadline in seconds (0 disables the deadline).
    pub timeout_secs: u64,
    /// Ask for a per-response assessment after the feedback batch.
    pub enrich_feedback: bool,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let sampling = SamplingConfig::default();
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
            top_p: sampling.top_p,
            frequency_penalty: sampling.frequency_penalty,
            presence_penalty: sampling.presence_penalty,
            timeout_secs: 60,
            enrich_feedback: false,
        }
    }
}

impl FileGenerationConfig {
    pub fn sampling(&self) -> SamplingConfig {
        SamplingConfig {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
            frequency_penalty: self.frequency_penalty,
            presence_penalty: self.presence_penalty,
        }
    }

    pub fn feedback_params(&self) -> FeedbackParams {
        FeedbackParams::default()
            .with_model(self.model.clone())
            .with_sampling(self.sampling())
            .with_enrichment(self.enrich_feedback)
    }

    /// Range checks on the sampling settings
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut check = |field: &str, value: f32, range: std::ops::RangeInclusive<f32>| {
            if !range.contains(&value) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::OutOfRange {
                        field: format!("generation.{}", field),
                        value: value.to_string(),
                    },
                    format!(
                        "generation.{}: {} is outside {}..={}",
                        field,
                        value,
                        range.start(),
                        range.end()
                    ),
                ));
            }
        };
        check("temperature", self.temperature, 0.0..=2.0);
        check("top_p", self.top_p, 0.0..=1.0);
        check("frequency_penalty", self.frequency_penalty, -2.0..=2.0);
        check("presence_penalty", self.presence_penalty, -2.0..=2.0);

        if self.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "generation.max_tokens".to_string(),
                    value: "0".to_string(),
                },
                "generation.max_tokens: must be at least 1",
            ));
        }

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "generation.model".to_string(),
                    value: String::new(),
                },
                "generation.model: model name cannot be empty",
            ));
        }

        issues
    }
}
