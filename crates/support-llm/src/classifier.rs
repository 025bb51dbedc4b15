//! LLM-backed implementation of the `Classifier` trait

use crate::client::ChatClient;
use crate::config::LlmConfig;
use crate::error::Result as LlmResult;
use crate::payload::parse_classification;
use crate::prompt::{COORDINATOR_SYSTEM, coordinator_prompt};
use async_trait::async_trait;
use support_core::{ClassificationResult, Classifier, Result, SessionState};
use tracing::{debug, warn};

/// Classifier that delegates to an OpenAI-compatible chat model
///
/// Renders the coordinator prompt with the current utterance and the prior
/// session's known slots, calls the model, and decodes its JSON reply. Any
/// failure (transport, malformed payload) surfaces as a classification
/// error; the router converts that into the degraded general fallback.
pub struct LlmClassifier {
    client: ChatClient,
}

impl LlmClassifier {
    /// Create a classifier with the given configuration
    pub fn with_config(config: LlmConfig) -> LlmResult<Self> {
        Ok(Self {
            client: ChatClient::with_config(config)?,
        })
    }

    /// Create a classifier from environment variables
    pub fn from_env() -> LlmResult<Self> {
        Ok(Self {
            client: ChatClient::from_env()?,
        })
    }

    async fn classify_inner(
        &self,
        query: &str,
        prior: &SessionState,
    ) -> LlmResult<ClassificationResult> {
        let language = self.client.config().language;
        let prompt = coordinator_prompt(language, query, prior)?;

        let raw = self.client.complete(COORDINATOR_SYSTEM, &prompt).await?;
        debug!(raw_len = raw.len(), "decoding classifier payload");

        parse_classification(&raw)
    }
}

#[async_trait]
impl Classifier for LlmClassifier {
    async fn classify(&self, query: &str, prior: &SessionState) -> Result<ClassificationResult> {
        self.classify_inner(query, prior).await.map_err(|e| {
            warn!(error = %e, "LLM classification failed");
            e.into()
        })
    }

    fn name(&self) -> &str {
        "llm"
    }
}
