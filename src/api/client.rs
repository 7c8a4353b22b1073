//! HTTP client for the Gemini `generateContent` endpoint.

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, warn};

use super::{Content, GenerateContentRequest, GenerateContentResponse, Part, SystemInstruction};
use crate::core::constants::{EMPTY_REPLY, FALLBACK_REPLY};
use crate::core::message::Role;
use crate::utils::url::construct_api_url;

/// Everything needed for one model call.
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub model: String,
    pub system_instruction: String,
    /// Transcript as it stood before the new user message was appended.
    pub history: Vec<Content>,
    pub message: String,
}

impl ReplyRequest {
    pub fn into_payload(self) -> GenerateContentRequest {
        let mut contents = self.history;
        contents.push(Content::text(Role::User.as_str(), self.message));

        let system_instruction = if self.system_instruction.trim().is_empty() {
            None
        } else {
            Some(SystemInstruction {
                parts: vec![Part {
                    text: self.system_instruction,
                }],
            })
        };

        GenerateContentRequest {
            contents,
            system_instruction,
        }
    }
}

/// Failures of a single model call.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection reset).
    Transport(reqwest::Error),

    /// The API answered with a non-success status.
    Status {
        status: StatusCode,
        /// One-line summary pulled from the error body, or the raw body.
        summary: String,
    },

    /// The body of a successful response could not be decoded.
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(source) => write!(f, "request failed: {source}"),
            ApiError::Status { status, summary } => {
                if summary.is_empty() {
                    write!(f, "API returned {status}")
                } else {
                    write!(f, "API returned {status}: {summary}")
                }
            }
            ApiError::Decode(source) => write!(f, "malformed response: {source}"),
        }
    }
}

impl StdError for ApiError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ApiError::Transport(source) => Some(source),
            ApiError::Decode(source) => Some(source),
            ApiError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

/// The seam between the app and the hosted model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: ReplyRequest) -> Result<String, ApiError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        construct_api_url(&self.base_url, &format!("models/{model}:generateContent"))
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: ReplyRequest) -> Result<String, ApiError> {
        let url = self.endpoint(&request.model);
        let payload = request.into_payload();
        debug!(url = %url, contents = payload.contents.len(), "sending generateContent request");

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                summary: summarize_error_body(&body),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(ApiError::Decode)?;
        debug!(candidates = parsed.candidates.len(), "received generateContent response");

        match parsed.text() {
            Some(text) => Ok(text),
            None => {
                warn!(
                    finish_reason = ?parsed.finish_reason(),
                    "response carried no text"
                );
                Ok(EMPTY_REPLY.to_string())
            }
        }
    }
}

/// Run one model call and collapse every failure into the fixed fallback.
pub async fn fetch_reply(client: &dyn ModelClient, request: ReplyRequest) -> String {
    match client.generate(request).await {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "model call failed");
            FALLBACK_REPLY.to_string()
        }
    }
}

fn extract_error_summary(value: &serde_json::Value) -> Option<String> {
    let summary = value
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .or_else(|| {
            value
                .get("error")
                .and_then(|v| v.as_str().map(str::to_owned))
        })
        .or_else(|| {
            value
                .get("message")
                .and_then(|v| v.as_str().map(str::to_owned))
        });

    summary.map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(summary) = extract_error_summary(&value) {
            if !summary.is_empty() {
                return summary;
            }
        }
    }
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}
