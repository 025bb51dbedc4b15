//! Slot merger: folds one turn's classification into the session state
//!
//! Pure function. The slot fields are sticky: a previously filled value
//! survives unless the classification explicitly supplies a usable
//! replacement.

use support_core::{ClassificationResult, Intent, SessionState};

/// Whether an extracted amount is usable as a replacement value
///
/// Zero, negatives, and non-finite values count as "no replacement
/// supplied"; the prior sticky value survives them.
fn usable_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Merge a classification result into the prior session state
///
/// Per-field rules:
/// - `intent`: the result's intent, normalized into the enumerated set
/// - `customer_name`: replaced only by a non-empty extracted name
/// - `amount_invoice`: replaced only by a positive finite extracted amount
/// - `final_result`: the reply when the intent is general and a reply is
///   present; otherwise carried over for the dispatcher to overwrite
/// - `user_query` is carried from `prior` (the turn engine sets it)
pub fn merge(prior: &SessionState, result: &ClassificationResult) -> SessionState {
    let intent = match result.intent {
        Intent::Unknown => Intent::General,
        intent => intent,
    };

    let customer_name = result
        .customer_name
        .as_ref()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| prior.customer_name.clone());

    let amount_invoice = result
        .amount_invoice
        .filter(|amount| usable_amount(*amount))
        .or(prior.amount_invoice);

    let final_result = match (intent, &result.reply) {
        (Intent::General, Some(reply)) => reply.clone(),
        _ => prior.final_result.clone(),
    };

    SessionState {
        user_query: prior.user_query.clone(),
        intent,
        customer_name,
        amount_invoice,
        final_result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_core::FALLBACK_REPLY;

    fn billing_result(name: Option<&str>, amount: Option<f64>) -> ClassificationResult {
        ClassificationResult {
            intent: Intent::Billing,
            customer_name: name.map(str::to_string),
            amount_invoice: amount,
            reply: None,
        }
    }

    #[test]
    fn test_slots_fill_when_supplied() {
        let prior = SessionState::new();
        let merged = merge(&prior, &billing_result(Some("John Smith"), Some(150.0)));

        assert_eq!(merged.intent, Intent::Billing);
        assert_eq!(merged.customer_name.as_deref(), Some("John Smith"));
        assert_eq!(merged.amount_invoice, Some(150.0));
    }

    #[test]
    fn test_sticky_slots_survive_empty_turn() {
        let mut prior = SessionState::new();
        prior.customer_name = Some("John Smith".to_string());
        prior.amount_invoice = Some(150.0);

        let merged = merge(&prior, &billing_result(None, None));
        assert_eq!(merged.customer_name.as_deref(), Some("John Smith"));
        assert_eq!(merged.amount_invoice, Some(150.0));
    }

    #[test]
    fn test_sticky_slot_replaced_by_new_value() {
        let mut prior = SessionState::new();
        prior.customer_name = Some("John Smith".to_string());

        let merged = merge(&prior, &billing_result(Some("Maria Silva"), None));
        assert_eq!(merged.customer_name.as_deref(), Some("Maria Silva"));
    }

    #[test]
    fn test_blank_name_does_not_clear_slot() {
        let mut prior = SessionState::new();
        prior.customer_name = Some("John Smith".to_string());

        let merged = merge(&prior, &billing_result(Some("   "), None));
        assert_eq!(merged.customer_name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_zero_amount_is_not_a_replacement() {
        let mut prior = SessionState::new();
        prior.amount_invoice = Some(150.0);

        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let merged = merge(&prior, &billing_result(None, Some(bad)));
            assert_eq!(merged.amount_invoice, Some(150.0), "amount {bad} replaced slot");
        }
    }

    #[test]
    fn test_unknown_intent_normalizes_to_general() {
        let result = ClassificationResult {
            intent: Intent::Unknown,
            ..ClassificationResult::default()
        };
        let merged = merge(&SessionState::new(), &result);
        assert_eq!(merged.intent, Intent::General);
    }

    #[test]
    fn test_general_reply_lands_in_final_result() {
        let result = ClassificationResult {
            intent: Intent::General,
            reply: Some("Hello there!".to_string()),
            ..ClassificationResult::default()
        };
        let merged = merge(&SessionState::new(), &result);
        assert_eq!(merged.final_result, "Hello there!");
    }

    #[test]
    fn test_reply_ignored_for_routable_intents() {
        let result = ClassificationResult {
            intent: Intent::Billing,
            reply: Some("should not surface".to_string()),
            ..ClassificationResult::default()
        };
        let merged = merge(&SessionState::new(), &result);
        assert!(merged.final_result.is_empty());
    }

    #[test]
    fn test_fallback_merges_to_safe_general() {
        let mut prior = SessionState::new();
        prior.customer_name = Some("John Smith".to_string());

        let merged = merge(&prior, &ClassificationResult::fallback());
        assert_eq!(merged.intent, Intent::General);
        assert_eq!(merged.final_result, FALLBACK_REPLY);
        // Fallback never clears sticky slots
        assert_eq!(merged.customer_name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_merge_is_deterministic() {
        let mut prior = SessionState::new();
        prior.customer_name = Some("John Smith".to_string());
        let result = billing_result(None, Some(99.5));

        let first = merge(&prior, &result);
        let second = merge(&prior, &result);
        assert_eq!(first, second);
    }
}
