//! Wire types for the OpenAI-compatible `/v1/completions` endpoint

use serde::{Deserialize, Serialize};
use survey_application::GatewayError;
use survey_domain::CompletionRequest;

/// Request body.
///
/// `n` is always 1: the service returns one choice per prompt, so a batch
/// of N prompts yields exactly N choices.
#[derive(Debug, Serialize)]
pub(crate) struct CompletionBody<'a> {
    pub model: &'a str,
    pub prompt: &'a [String],
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub n: u32,
}

impl<'a> From<&'a CompletionRequest> for CompletionBody<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        let sampling = &request.sampling;
        Self {
            model: &request.model,
            prompt: &request.prompts,
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
            top_p: sampling.top_p,
            frequency_penalty: sampling.frequency_penalty,
            presence_penalty: sampling.presence_penalty,
            n: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub text: String,
    /// Position of the prompt this choice answers
    pub index: usize,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl CompletionResponse {
    /// Completion texts in prompt order.
    ///
    /// Indices must cover `0..choices.len()` exactly once each, otherwise a
    /// completion could be paired with the wrong prompt.
    pub fn into_texts(mut self) -> Result<Vec<String>, GatewayError> {
        self.choices.sort_by_key(|c| c.index);
        if let Some((position, choice)) = self
            .choices
            .iter()
            .enumerate()
            .find(|(position, choice)| choice.index != *position)
        {
            return Err(GatewayError::MalformedResponse(format!(
                "choice index {} found where {} was expected",
                choice.index, position
            )));
        }
        Ok(self.choices.into_iter().map(|c| c.text).collect())
    }
}

/// Decode a successful response body
pub(crate) fn parse_completions(body: &str) -> Result<Vec<String>, GatewayError> {
    serde_json::from_str::<CompletionResponse>(body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?
        .into_texts()
}

/// Human-readable reason for a failed request, preferring the service's own message
pub(crate) fn error_reason(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => format!("HTTP {}: {}", status, envelope.error.message),
        Err(_) => {
            let excerpt: String = body.chars().take(200).collect();
            if excerpt.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, excerpt.trim())
            }
        }
    }
}
