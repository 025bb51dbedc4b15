//! Session state for the support router
//!
//! A session owns exactly one `SessionState`. It is created at session start,
//! updated in place every turn, and discarded at session end. The two slot
//! fields are sticky: once filled they survive later turns unless a turn
//! supplies a replacement value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Intent categories the classifier can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Invoices, payments, money
    Billing,
    /// Bugs, errors, system failures
    Technical,
    /// Greetings and everything without a specific task
    General,
    /// Pristine state before the first classification of a session
    #[default]
    Unknown,
}

impl Intent {
    /// Normalize a free-form label into an intent.
    ///
    /// Anything outside the enumerated set maps to `General`; the classifier
    /// is never allowed to leave the session with an unroutable intent.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "billing" => Self::Billing,
            "technical" => Self::Technical,
            _ => Self::General,
        }
    }

    /// Lowercase wire label for this intent
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Billing => "billing",
            Self::Technical => "technical",
            Self::General => "general",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated state for one chat session
///
/// `customer_name` and `amount_invoice` are the sticky slots; `user_query`
/// and `final_result` are overwritten every turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current turn's raw input
    pub user_query: String,
    /// Last computed classification
    pub intent: Intent,
    /// Sticky slot: customer name, filled opportunistically
    pub customer_name: Option<String>,
    /// Sticky slot: invoice amount, filled opportunistically
    pub amount_invoice: Option<f64>,
    /// Last user-visible response
    pub final_result: String,
}

impl SessionState {
    /// Create a fresh session state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether both slots required by the billing branch are filled
    pub fn has_billing_slots(&self) -> bool {
        self.customer_name.is_some() && self.amount_invoice.is_some()
    }

    /// Names of the billing slots that are still empty
    pub fn missing_billing_slots(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.customer_name.is_none() {
            missing.push("customer name");
        }
        if self.amount_invoice.is_none() {
            missing.push("invoice amount");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_normalization() {
        assert_eq!(Intent::from_label("billing"), Intent::Billing);
        assert_eq!(Intent::from_label(" Technical "), Intent::Technical);
        assert_eq!(Intent::from_label("GENERAL"), Intent::General);
        assert_eq!(Intent::from_label("refund"), Intent::General);
        assert_eq!(Intent::from_label(""), Intent::General);
        assert_eq!(Intent::from_label("unknown"), Intent::General);
    }

    #[test]
    fn test_intent_serde_labels() {
        let json = serde_json::to_string(&Intent::Billing).expect("serialize");
        assert_eq!(json, "\"billing\"");
        let parsed: Intent = serde_json::from_str("\"technical\"").expect("deserialize");
        assert_eq!(parsed, Intent::Technical);
    }

    #[test]
    fn test_fresh_session_defaults() {
        let state = SessionState::new();
        assert_eq!(state.intent, Intent::Unknown);
        assert!(state.customer_name.is_none());
        assert!(state.amount_invoice.is_none());
        assert!(state.final_result.is_empty());
    }

    #[test]
    fn test_missing_billing_slots() {
        let mut state = SessionState::new();
        assert_eq!(
            state.missing_billing_slots(),
            vec!["customer name", "invoice amount"]
        );

        state.customer_name = Some("John Smith".to_string());
        assert_eq!(state.missing_billing_slots(), vec!["invoice amount"]);
        assert!(!state.has_billing_slots());

        state.amount_invoice = Some(150.0);
        assert!(state.missing_billing_slots().is_empty());
        assert!(state.has_billing_slots());
    }
}
