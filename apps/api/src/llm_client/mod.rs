//! Single point of entry for chat completion calls.
//!
//! No other module may call the completion API directly. Model, token budget
//! and temperature are fixed. Failures are classified for logging and then
//! returned as-is; nothing is retried.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

pub mod prompts;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for every reformatting call.
pub const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 1.0;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Completion response contained no choices")]
    EmptyChoices,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [RequestMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// A completion message, passed through verbatim. Fields other than `role`
/// and `content` are kept in `extra` so nothing the provider sends is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn build_request<'a>(system: &'a str, text: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model: MODEL,
        messages: [
            RequestMessage {
                role: "system",
                content: system,
            },
            RequestMessage {
                role: "user",
                content: text,
            },
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Chat completions client shared by all request handlers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url,
        }
    }

    /// Sends the profile-format instruction plus `text` and returns the first
    /// choice's message unchanged.
    pub async fn reformat(&self, text: &str) -> Result<ChatMessage, LlmError> {
        self.complete(prompts::PROFILE_FORMAT_SYSTEM, text).await
    }

    /// Makes one call with a system message and a user message.
    async fn complete(&self, system: &str, text: &str) -> Result<ChatMessage, LlmError> {
        let request_body = build_request(system, text);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Completion request failed: {e}");
                LlmError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log_upstream_failure(status, &body);
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(LlmError::EmptyChoices)
    }
}

/// Classifies a non-2xx response for the logs. Callers still receive the error.
fn log_upstream_failure(status: StatusCode, body: &str) {
    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Rate limit exceeded, please try again later.")
        }
        StatusCode::FORBIDDEN => {
            warn!("Quota exceeded, please check your billing and plan details.")
        }
        _ => error!("Completion API returned {status}: {body}"),
    }
}
