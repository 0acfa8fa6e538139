use std::time::Duration;

use catalog_logging::{catalog_debug, catalog_warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("no api key available for the assistant")]
    MissingApiKey,
    #[error("invalid assistant endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("assistant returned http status {0}: {1}")]
    HttpStatus(u16, String),
    #[error("assistant request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed assistant response: {0}")]
    MalformedResponse(String),
    #[error("failed to start async runtime: {0}")]
    Runtime(String),
}

/// Text produced by a model for a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub total_tokens: Option<u64>,
}

#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Completion, AssistantError>;
}

#[derive(Debug, Clone)]
pub struct AssistantSettings {
    /// Base url; `chat/completions` is appended.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl AssistantSettings {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Non-streaming client for any service speaking the OpenAI chat completions shape.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleModel {
    settings: AssistantSettings,
    client: reqwest::Client,
}

impl OpenAiCompatibleModel {
    pub fn new(settings: AssistantSettings) -> Result<Self, AssistantError> {
        if settings.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(AssistantError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| AssistantError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn completions_url(&self) -> Result<reqwest::Url, AssistantError> {
        let base = format!("{}/", self.settings.endpoint.trim_end_matches('/'));
        reqwest::Url::parse(&base)
            .and_then(|url| url.join("chat/completions"))
            .map_err(|err| AssistantError::InvalidEndpoint(err.to_string()))
    }
}

#[async_trait::async_trait]
impl ChatModel for OpenAiCompatibleModel {
    async fn complete(&self, prompt: &str) -> Result<Completion, AssistantError> {
        let url = self.completions_url()?;
        let body = json!({
            "model": self.settings.model,
            "messages": [{ "role": "user", "content": prompt }],
        });
        let api_key = self.settings.api_key.as_deref().unwrap_or_default();

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .body(body.to_string())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(ToOwned::to_owned))
                .unwrap_or(text);
            catalog_warn!("Assistant request failed with {}: {}", status, message);
            return Err(AssistantError::HttpStatus(status.as_u16(), message));
        }

        let completion = parse_completion(&text)?;
        catalog_debug!(
            "Assistant answered {} chars, total_tokens={:?}",
            completion.text.len(),
            completion.total_tokens
        );
        Ok(completion)
    }
}

fn parse_completion(text: &str) -> Result<Completion, AssistantError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| AssistantError::MalformedResponse(err.to_string()))?;
    let answer = value["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            AssistantError::MalformedResponse("missing choices[0].message.content".into())
        })?;
    Ok(Completion {
        text: answer.to_string(),
        total_tokens: value["usage"]["total_tokens"].as_u64(),
    })
}

fn map_reqwest_error(err: reqwest::Error) -> AssistantError {
    if err.is_timeout() {
        return AssistantError::Timeout;
    }
    AssistantError::Network(err.to_string())
}

/// One question and the answer it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

/// Conversation history around a [`ChatModel`].
///
/// Each question is sent on its own; earlier turns are kept for display only.
pub struct ChatSession {
    model: Box<dyn ChatModel>,
    history: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new(model: Box<dyn ChatModel>) -> Self {
        Self {
            model,
            history: Vec::new(),
        }
    }

    /// Sends `question` and appends the resulting turn. History is untouched on error.
    pub async fn ask(&mut self, question: &str) -> Result<&ChatTurn, AssistantError> {
        let completion = self.model.complete(question).await?;
        self.history.push(ChatTurn {
            question: question.to_string(),
            answer: completion.text,
        });
        let last = self.history.len() - 1;
        Ok(&self.history[last])
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }
}

/// Blocking front for callers without an async runtime of their own.
pub struct AssistantHandle {
    runtime: tokio::runtime::Runtime,
    session: ChatSession,
}

impl AssistantHandle {
    pub fn new(model: Box<dyn ChatModel>) -> Result<Self, AssistantError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|err| AssistantError::Runtime(err.to_string()))?;
        Ok(Self {
            runtime,
            session: ChatSession::new(model),
        })
    }

    pub fn ask(&mut self, question: &str) -> Result<ChatTurn, AssistantError> {
        let session = &mut self.session;
        self.runtime
            .block_on(async { session.ask(question).await.cloned() })
    }

    pub fn history(&self) -> &[ChatTurn] {
        self.session.history()
    }
}
