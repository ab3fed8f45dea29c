//! OpenAI-compatible completion gateway

use super::wire::{CompletionBody, error_reason, parse_completions};
use async_trait::async_trait;
use std::time::Duration;
use survey_application::{CompletionGateway, GatewayError};
use survey_domain::CompletionRequest;
use tracing::{debug, warn};

/// Path of the legacy text completion endpoint
const COMPLETIONS_PATH: &str = "/v1/completions";

/// Completion gateway over HTTP.
///
/// One gateway is built at startup and shared by every request; the
/// underlying client pools connections.
pub struct OpenAiCompletionGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiCompletionGateway {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint_for(base_url),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint_for(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let base = base.strip_suffix("/v1").unwrap_or(base);
    format!("{}{}", base, COMPLETIONS_PATH)
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Vec<String>, GatewayError> {
        debug!(
            "Requesting {} completion(s) from {} (model: {})",
            request.expected_completions(),
            self.endpoint,
            request.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&CompletionBody::from(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            let reason = error_reason(status.as_u16(), &body);
            warn!("Completion request failed: {}", reason);
            return Err(GatewayError::RequestFailed(reason));
        }

        let texts = parse_completions(&body)?;
        debug!("Received {} completion(s)", texts.len());
        Ok(texts)
    }
}
