//! Completion request value objects

use serde::{Deserialize, Serialize};

/// Sampling settings sent with every completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    /// Upper bound on generated tokens per completion
    pub max_tokens: u32,
    /// Nucleus sampling mass
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            max_tokens: 100,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// A batch of prompts, each expecting exactly one completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier understood by the completion service
    pub model: String,
    pub prompts: Vec<String>,
    pub sampling: SamplingConfig,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompts: Vec<String>, sampling: SamplingConfig) -> Self {
        Self {
            model: model.into(),
            prompts,
            sampling,
        }
    }

    /// Single-prompt request
    pub fn single(model: impl Into<String>, prompt: impl Into<String>, sampling: SamplingConfig) -> Self {
        Self::new(model, vec![prompt.into()], sampling)
    }

    /// Number of completions the service must return
    pub fn expected_completions(&self) -> usize {
        self.prompts.len()
    }
}
