//! HTTP transport shared by the gateway and its chat sessions

use super::error::{GeminiError, Result};
use super::protocol::{ErrorWrapper, GenerateContentRequest, GenerateContentResponse};
use muse_domain::Model;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client state for `generateContent` calls.
///
/// The API key travels as a query parameter, so request URLs must
/// never be logged.
pub struct Transport {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Transport {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// POST a `generateContent` request for the given model.
    pub async fn generate(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url,
            model.as_str(),
            self.api_key
        );

        debug!(
            model = %model,
            contents = request.contents.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body));
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

/// Map a non-2xx response to a `GeminiError`, preferring the message
/// from the API's error envelope when the body carries one.
fn map_http_error(status: reqwest::StatusCode, body: String) -> GeminiError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    match status.as_u16() {
        401 | 403 => GeminiError::AuthenticationFailed(message),
        429 => GeminiError::RateLimited,
        400 | 404 => GeminiError::InvalidRequest(message),
        code => GeminiError::Api {
            status: code,
            message,
        },
    }
}
