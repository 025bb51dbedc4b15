//! Turn engine and dispatch state machine
//!
//! Every turn starts fresh from the classification step; there is no
//! persistent "current branch" across turns. The only state carried between
//! turns is the slot values in `SessionState`.

use crate::merge::merge;
use std::sync::Arc;
use support_core::{
    BillingHandler, ClassificationResult, Classifier, Intent, Result, SessionState,
    TechnicalHandler,
};
use tracing::{debug, info, warn};

/// Default reply for a general turn that produced no classifier reply
pub const DEFAULT_GREETING: &str = "How can I help you today?";

/// Apology shown when a downstream handler fails
const HANDLER_APOLOGY: &str =
    "Sorry, something went wrong while handling your request. Please try again.";

/// Routing decision for one turn
///
/// All valid transitions out of the classification step are enumerated
/// here; the dispatch table below is the only consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Billing branch (requires both billing slots)
    Billing,
    /// Technical branch (no preconditions)
    Technical,
    /// General branch (terminal, no handler)
    General,
}

/// Map a merged intent to its routing decision
///
/// Pure and total: every intent routes somewhere, and anything outside the
/// routable set lands on the general branch.
pub fn route(intent: Intent) -> RouteDecision {
    match intent {
        Intent::Billing => RouteDecision::Billing,
        Intent::Technical => RouteDecision::Technical,
        Intent::General | Intent::Unknown => RouteDecision::General,
    }
}

/// Re-prompt asking for the billing slots that are still missing
fn missing_slot_prompt(state: &SessionState) -> String {
    let missing = state.missing_billing_slots();
    format!(
        "Please provide the {} so I can proceed.",
        missing.join(" and ")
    )
}

/// The intent router
///
/// Owns references to its three collaborators: the classifier and the two
/// branch handlers. Processes one turn at a time; the caller awaits each
/// turn to completion before submitting the next.
pub struct Router {
    classifier: Arc<dyn Classifier>,
    billing: Arc<dyn BillingHandler>,
    technical: Arc<dyn TechnicalHandler>,
}

impl Router {
    /// Create a router from its collaborators
    pub fn new(
        classifier: Arc<dyn Classifier>,
        billing: Arc<dyn BillingHandler>,
        technical: Arc<dyn TechnicalHandler>,
    ) -> Self {
        Self {
            classifier,
            billing,
            technical,
        }
    }

    /// Process one turn: classify, merge, dispatch, render
    ///
    /// Updates `state` in place and returns the user-visible reply (also
    /// stored in `state.final_result`). Classifier failures are absorbed
    /// into the degraded general path; handler failures degrade to an
    /// apology. This function only errors on conditions the session cannot
    /// continue from, which the current collaborators never produce.
    pub async fn turn(&self, state: &mut SessionState, input: &str) -> Result<String> {
        state.user_query = input.to_string();

        let result = match self.classifier.classify(input, state).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "classifier failed, taking degraded fallback");
                ClassificationResult::fallback()
            }
        };
        let had_reply = result.reply.is_some();

        let mut merged = merge(state, &result);
        let decision = route(merged.intent);
        info!(intent = %merged.intent, ?decision, "routing turn");

        match decision {
            RouteDecision::Billing => {
                if merged.has_billing_slots() {
                    let name = merged.customer_name.clone().unwrap_or_default();
                    let amount = merged.amount_invoice.unwrap_or_default();

                    merged.final_result = match self
                        .billing
                        .handle(&merged.user_query, &name, amount)
                        .await
                    {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(error = %e, handler = self.billing.name(), "handler failed");
                            HANDLER_APOLOGY.to_string()
                        }
                    };
                } else {
                    debug!(missing = ?merged.missing_billing_slots(), "billing precondition not met");
                    merged.final_result = missing_slot_prompt(&merged);
                }
            }
            RouteDecision::Technical => {
                merged.final_result = match self.technical.handle(&merged.user_query).await {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(error = %e, handler = self.technical.name(), "handler failed");
                        HANDLER_APOLOGY.to_string()
                    }
                };
            }
            RouteDecision::General => {
                // Merger already placed the reply when there was one
                if !had_reply {
                    merged.final_result = DEFAULT_GREETING.to_string();
                }
            }
        }

        *state = merged;
        Ok(state.final_result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use support_core::{Error, FALLBACK_REPLY};

    mock! {
        pub TestClassifier {}

        #[async_trait]
        impl Classifier for TestClassifier {
            async fn classify(
                &self,
                query: &str,
                prior: &SessionState,
            ) -> Result<ClassificationResult>;
            fn name(&self) -> &str;
        }
    }

    mock! {
        pub TestBilling {}

        #[async_trait]
        impl BillingHandler for TestBilling {
            async fn handle(&self, query: &str, customer_name: &str, amount: f64) -> Result<String>;
            fn name(&self) -> &str;
        }
    }

    mock! {
        pub TestTechnical {}

        #[async_trait]
        impl TechnicalHandler for TestTechnical {
            async fn handle(&self, issue: &str) -> Result<String>;
            fn name(&self) -> &str;
        }
    }

    fn router_with(
        classifier: MockTestClassifier,
        billing: MockTestBilling,
        technical: MockTestTechnical,
    ) -> Router {
        Router::new(Arc::new(classifier), Arc::new(billing), Arc::new(technical))
    }

    #[test]
    fn test_route_table() {
        assert_eq!(route(Intent::Billing), RouteDecision::Billing);
        assert_eq!(route(Intent::Technical), RouteDecision::Technical);
        assert_eq!(route(Intent::General), RouteDecision::General);
        assert_eq!(route(Intent::Unknown), RouteDecision::General);
        // Deterministic
        assert_eq!(route(Intent::Billing), route(Intent::Billing));
    }

    #[tokio::test]
    async fn test_billing_without_slots_reprompts() {
        let mut classifier = MockTestClassifier::new();
        classifier.expect_classify().returning(|_, _| {
            Ok(ClassificationResult {
                intent: Intent::Billing,
                ..ClassificationResult::default()
            })
        });

        let mut billing = MockTestBilling::new();
        billing.expect_handle().never();

        let router = router_with(classifier, billing, MockTestTechnical::new());
        let mut state = SessionState::new();

        let reply = router.turn(&mut state, "I need an invoice").await.expect("turn");
        assert!(reply.contains("customer name"));
        assert!(reply.contains("invoice amount"));
        assert_eq!(state.intent, Intent::Billing);
    }

    #[tokio::test]
    async fn test_billing_reprompt_names_only_missing_slot() {
        let mut classifier = MockTestClassifier::new();
        classifier.expect_classify().returning(|_, _| {
            Ok(ClassificationResult {
                intent: Intent::Billing,
                customer_name: Some("John Smith".to_string()),
                ..ClassificationResult::default()
            })
        });

        let mut billing = MockTestBilling::new();
        billing.expect_handle().never();

        let router = router_with(classifier, billing, MockTestTechnical::new());
        let mut state = SessionState::new();

        let reply = router.turn(&mut state, "An invoice for John Smith").await.expect("turn");
        assert!(reply.contains("invoice amount"));
        assert!(!reply.contains("customer name"));
    }

    #[tokio::test]
    async fn test_billing_with_slots_invokes_handler() {
        let mut classifier = MockTestClassifier::new();
        classifier.expect_classify().returning(|_, _| {
            Ok(ClassificationResult {
                intent: Intent::Billing,
                customer_name: Some("John Smith".to_string()),
                amount_invoice: Some(150.0),
                ..ClassificationResult::default()
            })
        });

        let mut billing = MockTestBilling::new();
        billing
            .expect_handle()
            .withf(|_, name, amount| name == "John Smith" && (*amount - 150.0).abs() < f64::EPSILON)
            .returning(|_, _, _| Ok("Invoice created.".to_string()));

        let router = router_with(classifier, billing, MockTestTechnical::new());
        let mut state = SessionState::new();

        let reply = router
            .turn(&mut state, "John Smith, $150")
            .await
            .expect("turn");
        assert_eq!(reply, "Invoice created.");
        assert_eq!(state.final_result, "Invoice created.");
    }

    #[tokio::test]
    async fn test_technical_always_invocable() {
        let mut classifier = MockTestClassifier::new();
        classifier.expect_classify().returning(|_, _| {
            Ok(ClassificationResult {
                intent: Intent::Technical,
                ..ClassificationResult::default()
            })
        });

        let mut technical = MockTestTechnical::new();
        technical
            .expect_handle()
            .returning(|issue| Ok(format!("Diagnosed: {issue}")));

        let router = router_with(classifier, MockTestBilling::new(), technical);
        let mut state = SessionState::new();

        let reply = router.turn(&mut state, "My internet is down").await.expect("turn");
        assert_eq!(reply, "Diagnosed: My internet is down");
    }

    #[tokio::test]
    async fn test_classifier_failure_takes_fallback() {
        let mut classifier = MockTestClassifier::new();
        classifier
            .expect_classify()
            .returning(|_, _| Err(Error::Classification("boom".to_string())));

        let router = router_with(classifier, MockTestBilling::new(), MockTestTechnical::new());
        let mut state = SessionState::new();
        state.customer_name = Some("John Smith".to_string());

        let reply = router.turn(&mut state, "???").await.expect("turn");
        assert_eq!(reply, FALLBACK_REPLY);
        assert_eq!(state.intent, Intent::General);
        // Sticky slot survives the bad turn
        assert_eq!(state.customer_name.as_deref(), Some("John Smith"));
    }

    #[tokio::test]
    async fn test_general_without_reply_greets() {
        let mut classifier = MockTestClassifier::new();
        classifier.expect_classify().returning(|_, _| {
            Ok(ClassificationResult {
                intent: Intent::General,
                ..ClassificationResult::default()
            })
        });

        let router = router_with(classifier, MockTestBilling::new(), MockTestTechnical::new());
        let mut state = SessionState::new();

        let reply = router.turn(&mut state, "hmm").await.expect("turn");
        assert_eq!(reply, DEFAULT_GREETING);
    }

    #[tokio::test]
    async fn test_handler_failure_degrades_to_apology() {
        let mut classifier = MockTestClassifier::new();
        classifier.expect_classify().returning(|_, _| {
            Ok(ClassificationResult {
                intent: Intent::Technical,
                ..ClassificationResult::default()
            })
        });

        let mut technical = MockTestTechnical::new();
        technical
            .expect_handle()
            .returning(|_| Err(Error::Handler("backend offline".to_string())));
        technical.expect_name().return_const("technical-desk".to_string());

        let router = router_with(classifier, MockTestBilling::new(), technical);
        let mut state = SessionState::new();

        let reply = router.turn(&mut state, "It crashed").await.expect("turn");
        assert!(reply.contains("Sorry"));
    }
}
