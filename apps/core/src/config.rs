use std::env;
use std::fmt;
use tracing::warn;
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const API_URL_ENV: &str = "OPENAI_API_URL";
pub const MODEL_ENV: &str = "OPENAI_MODEL";
pub const MAX_TOKENS_ENV: &str = "OPENAI_MAX_COMPLETION_TOKENS";

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-5";
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 8000;

/// Settings for the chat-completion service used to generate questions.
#[derive(Clone, Validate)]
pub struct ApiConfig {
    /// Bearer token. Without it the remote source fails fast and the local one is used.
    pub api_key: Option<String>,
    /// Base URL the `/chat/completions` path is appended to.
    #[validate(url)]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 1, max = 128000))]
    pub max_completion_tokens: u32,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_completion_tokens", &self.max_completion_tokens)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
        }
    }
}

impl ApiConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if api_key.is_none() {
            warn!("{} is not set, questions will be generated locally", API_KEY_ENV);
        }

        let base_url = env::var(API_URL_ENV)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let model = env::var(MODEL_ENV)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_completion_tokens = match env::var(MAX_TOKENS_ENV) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::Config(format!("{} must be a positive integer: {}", MAX_TOKENS_ENV, e))
            })?,
            Err(_) => DEFAULT_MAX_COMPLETION_TOKENS,
        };

        let config = Self {
            api_key,
            base_url,
            model,
            max_completion_tokens,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the chat-completion endpoint
    pub fn completions_url(&self) -> Result<Url, AppError> {
        let base = Url::parse(self.base_url.trim_end_matches('/'))?;
        Ok(Url::parse(&format!("{}/chat/completions", base.as_str().trim_end_matches('/')))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset(
            [API_KEY_ENV, API_URL_ENV, MODEL_ENV, MAX_TOKENS_ENV],
            || {
                let config = ApiConfig::from_env().unwrap();
                assert!(config.api_key.is_none());
                assert_eq!(config.base_url, DEFAULT_API_URL);
                assert_eq!(config.model, DEFAULT_MODEL);
                assert_eq!(config.max_completion_tokens, DEFAULT_MAX_COMPLETION_TOKENS);
            },
        );
    }

    #[test]
    fn test_reads_env() {
        temp_env::with_vars(
            [
                (API_KEY_ENV, Some("sk-test")),
                (API_URL_ENV, Some("http://localhost:9999/v1/")),
                (MODEL_ENV, Some("gpt-4o-mini")),
                (MAX_TOKENS_ENV, Some("2000")),
            ],
            || {
                let config = ApiConfig::from_env().unwrap();
                assert_eq!(config.api_key.as_deref(), Some("sk-test"));
                assert_eq!(config.model, "gpt-4o-mini");
                assert_eq!(config.max_completion_tokens, 2000);
                assert_eq!(
                    config.completions_url().unwrap().as_str(),
                    "http://localhost:9999/v1/chat/completions"
                );
            },
        );
    }

    #[test]
    fn test_blank_key_is_absent() {
        temp_env::with_var(API_KEY_ENV, Some("   "), || {
            let config = ApiConfig::from_env().unwrap();
            assert!(config.api_key.is_none());
        });
    }

    #[test]
    fn test_invalid_values_rejected() {
        temp_env::with_var(MAX_TOKENS_ENV, Some("lots"), || {
            assert!(matches!(ApiConfig::from_env(), Err(AppError::Config(_))));
        });

        temp_env::with_var(MAX_TOKENS_ENV, Some("0"), || {
            assert!(matches!(ApiConfig::from_env(), Err(AppError::Config(_))));
        });

        temp_env::with_var(API_URL_ENV, Some("not a url"), || {
            assert!(matches!(ApiConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ApiConfig::default().with_api_key("sk-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
