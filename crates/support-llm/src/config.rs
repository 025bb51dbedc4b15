//! Configuration for the LLM classifier

use crate::error::{LlmError, Result};
use crate::prompt::Language;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the LLM classifier
///
/// The API base can point at any OpenAI-compatible endpoint (Azure, local
/// llama.cpp/vLLM deployments, etc.).
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the chat API (default: "https://api.openai.com/v1")
    pub api_base: String,

    /// Model identifier (default: "gpt-4o-mini")
    pub model: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,

    /// Sampling temperature; low by default since the output is structured
    pub temperature: f32,

    /// Prompt language
    pub language: Language,
}

impl LlmConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: 0.0,
            language: Language::default(),
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the API key from `OPENAI_API_KEY`; `OPENAI_API_BASE` and
    /// `OPENAI_MODEL` override the defaults when set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            LlmError::ConfigurationError("OPENAI_API_KEY environment variable not set".to_string())
        })?;

        let mut config = Self::new(api_key);
        if let Ok(api_base) = std::env::var("OPENAI_API_BASE") {
            config.api_base = api_base;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        Ok(config)
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the prompt language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(LlmError::ConfigurationError(
                "model must not be empty".to_string(),
            ));
        }
        if self.api_base.trim().is_empty() {
            return Err(LlmError::ConfigurationError(
                "api_base must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(LlmError::ConfigurationError(format!(
                "temperature {} outside 0.0..=1.0",
                self.temperature
            )));
        }
        Ok(())
    }
}
