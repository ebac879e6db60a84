//! Generation client: sends one broadcast request to the Messages API and
//! hands back the first text block of the reply.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::config::ReceiverConfig;
use crate::schema::broadcast::BroadcastRequest;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// The four failure categories a run can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Authentication,
    RateLimit,
    Connectivity,
    Unclassified,
}

#[derive(Debug, Error)]
pub enum ReceiverError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("authentication rejected: {0}")]
    Authentication(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("response contained no text content")]
    NoText,
    #[error("could not build request: {0}")]
    Request(String),
}

impl ReceiverError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingApiKey | Self::Authentication(_) => FailureKind::Authentication,
            Self::RateLimited(_) => FailureKind::RateLimit,
            Self::Connection(_) => FailureKind::Connectivity,
            Self::Api { .. } | Self::Malformed(_) | Self::NoText | Self::Request(_) => {
                FailureKind::Unclassified
            }
        }
    }

    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else if err.is_builder() {
            Self::Request(err.to_string())
        } else {
            Self::Connection(err.to_string())
        }
    }

    /// Classify a non-success HTTP status, pulling the message out of the
    /// service's error envelope when there is one.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body.trim().to_string()
                }
            });
        match status {
            StatusCode::UNAUTHORIZED => Self::Authentication(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(message),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Anything that can turn a broadcast request into transmission text.
pub trait Receiver {
    fn receive(&self, request: &BroadcastRequest) -> Result<String, ReceiverError>;
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the first text block out of a Messages API response body.
pub fn extract_text(body: &str) -> Result<String, ReceiverError> {
    let response: MessagesResponse =
        serde_json::from_str(body).map_err(|e| ReceiverError::Malformed(e.to_string()))?;
    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or(ReceiverError::NoText)
}

/// Blocking client for the Anthropic Messages API.
pub struct AnthropicReceiver {
    client: Client,
    config: ReceiverConfig,
}

impl AnthropicReceiver {
    pub fn new(config: ReceiverConfig) -> Result<Self, ReceiverError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ReceiverError::Request(e.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    /// Use a preconfigured HTTP client, e.g. one with proxies disabled.
    pub fn with_client(client: Client, config: ReceiverConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, ReceiverError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ReceiverError::MissingApiKey)?;
        let api_key = HeaderValue::from_str(api_key).map_err(|_| {
            ReceiverError::Authentication("API key is not a valid header value".to_string())
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-api-key", api_key);
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        Ok(headers)
    }
}

impl Receiver for AnthropicReceiver {
    fn receive(&self, request: &BroadcastRequest) -> Result<String, ReceiverError> {
        let headers = self.headers()?;
        let url = format!("{}/v1/messages", self.config.endpoint());
        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: request.system,
            messages: [Message {
                role: "user",
                content: &request.user,
            }],
        };

        debug!(%url, model = %self.config.model, prompt_len = request.user.len(), "sending broadcast request");

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .map_err(ReceiverError::from_transport)?;

        let status = response.status();
        let text = response.text().map_err(ReceiverError::from_transport)?;
        if !status.is_success() {
            return Err(ReceiverError::from_status(status, &text));
        }

        debug!(%status, response_len = text.len(), "broadcast response received");
        extract_text(&text)
    }
}
