//! Feedback parameters — how the feedback generator talks to the model.
//!
//! [`FeedbackParams`] groups the static settings used by
//! [`GenerateFeedbackUseCase`](crate::use_cases::generate_feedback::GenerateFeedbackUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use survey_domain::SamplingConfig;

/// Default model for the completion service
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Settings for feedback generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackParams {
    /// Model identifier passed to the completion service.
    pub model: String,
    /// Sampling settings for every request.
    pub sampling: SamplingConfig,
    /// Issue a second request per answered question asking for an
    /// assessment of that response.
    pub enrich_feedback: bool,
}

impl Default for FeedbackParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            sampling: SamplingConfig::default(),
            enrich_feedback: false,
        }
    }
}

impl FeedbackParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_enrichment(mut self, enabled: bool) -> Self {
        self.enrich_feedback = enabled;
        self
    }
}
