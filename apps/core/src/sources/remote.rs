use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use super::prompts::{build_user_message, parse_analysis, QUESTION_SYSTEM_PROMPT};
use super::traits::QuestionSource;
use crate::config::{ApiConfig, API_KEY_ENV};
use crate::error::AppError;
use crate::models::Question;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Question source backed by a chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct RemoteQuestionSource {
    client: Client,
    config: ApiConfig,
}

impl RemoteQuestionSource {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::new("system", QUESTION_SYSTEM_PROMPT),
                ChatMessage::new("user", build_user_message(prompt)),
            ],
            max_completion_tokens: self.config.max_completion_tokens,
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap, AppError> {
        let token = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Config(format!("{} is not set", API_KEY_ENV)))?;

        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| AppError::Config(format!("Invalid API key: {}", e)))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Sends the request and returns the assistant message content.
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let headers = self.auth_headers()?;
        let url = self.config.completions_url()?;
        let payload = self.build_request(prompt);

        let res = self
            .client
            .post(url)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Remote(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let body: ChatCompletionResponse = res
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Unexpected response body: {}", e)))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            error!("Question generation returned empty content");
            return Err(AppError::Parse("response content is empty".to_string()));
        }

        Ok(content)
    }
}

#[async_trait]
impl QuestionSource for RemoteQuestionSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    async fn request_questions(&self, prompt: &str) -> Result<Vec<Question>, AppError> {
        let content = self.complete(prompt).await?;
        let analysis = parse_analysis(&content)?;

        info!(
            intent = %analysis.detected_intent,
            complexity = %analysis.complexity,
            count = analysis.suggested_questions.len(),
            "Received remote questions"
        );

        Ok(analysis.suggested_questions)
    }
}
