//! Chat-completions client for chord suggestions

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ProviderConfig;

const USER_AGENT: &str = concat!("chordsmith/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("API request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Response had no choices")]
    NoChoices,
    #[error("Could not find a JSON object in the response")]
    NoJson,
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that turns a prompt into the model's text reply
pub trait SuggestionProvider {
    fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    role: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage>,
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Blocking chat-completions client
pub struct ChatClient {
    config: ProviderConfig,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(config: ProviderConfig, api_key: Option<String>) -> Self {
        Self { config, api_key }
    }

    /// Build a client, reading the API key from the configured environment variable.
    ///
    /// A missing key is reported by [`SuggestionProvider::complete`], not here.
    pub fn from_config(config: ProviderConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!(var = %config.api_key_env, "No API key set, suggestions will use the defaults");
        }
        Self::new(config, api_key)
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn request<'a>(&'a self, prompt: &str) -> ChatRequest<'a> {
        ChatRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

impl SuggestionProvider for ChatClient {
    fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingApiKey(self.config.api_key_env.clone()))?;
        info!(endpoint = %self.config.endpoint, model = %self.config.model, "Requesting chord suggestions");

        let result = ureq::post(&self.config.endpoint)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {api_key}"))
            .set("User-Agent", USER_AGENT)
            .send_json(self.request(prompt));

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let status_text = response.status_text().to_string();
                let body = response.into_string().unwrap_or_default();
                let message = error_message(&body, &status_text);
                return Err(ProviderError::Status { status, message });
            }
            Err(e) => return Err(ProviderError::Transport(e.to_string())),
        };

        let body: ChatResponse = response.into_json()?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::NoChoices)?;

        debug!(chars = content.len(), "Received completion");
        Ok(content)
    }
}

/// The API's `{"error": {"message": ...}}` text, or the HTTP status text
fn error_message(body: &str, status_text: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .map(|detail| detail.message)
        .unwrap_or_else(|| status_text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let client = ChatClient::new(ProviderConfig::default(), Some("key".to_string()));
        let body = serde_json::to_value(client.request("hello")).unwrap();
        assert_eq!(body["model"], "llama3.1-8b");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_response_body() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{}"}}]}"#,
        )
        .unwrap();
        assert_eq!(body.choices[0].message.content, "{}");

        let body: ChatResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(body.choices.is_empty());
    }

    #[test]
    fn test_missing_api_key() {
        let config = ProviderConfig {
            api_key_env: "CHORDSMITH_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            // Unroutable, so a request that slipped through would fail as Transport
            endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ..Default::default()
        };
        let client = ChatClient::from_config(config);
        match client.complete("hello") {
            Err(ProviderError::MissingApiKey(var)) => assert_eq!(var, "CHORDSMITH_TEST_KEY_THAT_IS_NEVER_SET"),
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }

    #[test]
    fn test_error_message_from_body() {
        let body = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error"}}"#;
        assert_eq!(error_message(body, "Unauthorized"), "Invalid API key");

        assert_eq!(error_message(r#"{"detail":"nope"}"#, "Too Many Requests"), "Too Many Requests");
        assert_eq!(error_message(r#"{"error":null}"#, "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message("<html>502</html>", "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message("", "Internal Server Error"), "Internal Server Error");
    }
}
