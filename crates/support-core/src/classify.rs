//! Classification contract between the router and its classifier collaborator

use crate::error::Result;
use crate::state::{Intent, SessionState};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Degraded reply used whenever classification cannot be trusted
pub const FALLBACK_REPLY: &str = "I didn't understand. Could you rephrase?";

/// Result of classifying a single utterance
///
/// Produced by a [`Classifier`] once per turn and consumed by the slot
/// merger. Slot fields are only populated when the value is explicitly
/// present in the utterance; `reply` is only populated for general intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Classified intent, already normalized to the enumerated set
    #[serde(default)]
    pub intent: Intent,

    /// Customer name extracted from the utterance, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Invoice amount extracted from the utterance, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_invoice: Option<f64>,

    /// Direct reply to the user, present only for general intent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl ClassificationResult {
    /// Degraded result substituted when the classifier output cannot be
    /// parsed or the classifier call fails.
    ///
    /// The router must never crash the session over a single bad turn, so
    /// this routes to the general branch with a re-prompt.
    pub fn fallback() -> Self {
        Self {
            intent: Intent::General,
            customer_name: None,
            amount_invoice: None,
            reply: Some(FALLBACK_REPLY.to_string()),
        }
    }
}

/// Trait for intent classifiers
///
/// The router treats classification as an opaque capability: given the
/// current utterance and the accumulated session state, produce a
/// [`ClassificationResult`] or fail. How the classification happens (LLM
/// call, keyword rules) is up to the implementation.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify one utterance in the context of the prior session state
    async fn classify(&self, query: &str, prior: &SessionState) -> Result<ClassificationResult>;

    /// Get the classifier's name (e.g., "llm", "keyword")
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_general_with_reply() {
        let result = ClassificationResult::fallback();
        assert_eq!(result.intent, Intent::General);
        assert!(result.customer_name.is_none());
        assert!(result.amount_invoice.is_none());
        assert_eq!(result.reply.as_deref(), Some(FALLBACK_REPLY));
    }

    #[test]
    fn test_result_tolerates_missing_fields() {
        // Wire payloads may omit any field; defaults must kick in.
        let result: ClassificationResult = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(result.intent, Intent::Unknown);
        assert!(result.reply.is_none());
    }
}
