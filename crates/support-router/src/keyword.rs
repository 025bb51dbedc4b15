//! Keyword-based offline classifier
//!
//! A rule-based stand-in for the LLM classifier, useful for demos without
//! network access and for deterministic tests. Supports English and
//! Portuguese keyword sets and extracts the billing slots with light
//! heuristics.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use support_core::{ClassificationResult, Classifier, Intent, Result, SessionState};

/// Keywords for intent classification (English)
mod keywords_en {
    pub const BILLING: &[&str] = &[
        "invoice",
        "billing",
        "payment",
        "charge",
        "refund",
        "money",
        "bill",
        "pay",
        "amount due",
    ];

    pub const TECHNICAL: &[&str] = &[
        "bug",
        "error",
        "crash",
        "broken",
        "failure",
        "not working",
        "doesn't work",
        "internet",
        "down",
        "slow",
        "timeout",
        "freeze",
    ];

    pub const GREETING: &[&str] = &["hello", "hi ", "hey", "good morning", "good afternoon", "thanks", "thank you"];
}

/// Keywords for intent classification (Portuguese)
mod keywords_pt {
    pub const BILLING: &[&str] = &[
        "fatura",
        "cobrança",
        "pagamento",
        "boleto",
        "dinheiro",
        "reembolso",
        "pagar",
    ];

    pub const TECHNICAL: &[&str] = &[
        "erro",
        "bug",
        "falha",
        "travou",
        "quebrado",
        "caiu",
        "não funciona",
        "nao funciona",
        "lento",
    ];

    pub const GREETING: &[&str] = &["ola", "olá", "oi", "bom dia", "boa tarde", "obrigado", "obrigada"];
}

// Requires a currency marker ("$150", "R$ 99,90") or a unit suffix
// ("150 dollars", "99,90 reais"); bare numbers are not amounts
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:R\$\s*|\$\s*)(\d+(?:[.,]\d{1,2})?)|\b(\d+(?:[.,]\d{1,2})?)\s*(?:dollars|reais)\b")
        .expect("amount regex")
});

// "my name is John Smith" / "meu nome é Maria Silva"
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:my name is|i am|i'm|me chamo|meu nome é|meu nome e)\s+([[:upper:]][[:alpha:]]+(?:\s+[[:upper:]][[:alpha:]]+){0,2})")
        .expect("name regex")
});

// Leading "John Smith, $150" style: capitalized words before a comma+amount
static NAME_BEFORE_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([[:upper:]][[:alpha:]]+(?:\s+[[:upper:]][[:alpha:]]+){0,2})\s*,")
        .expect("name-before-amount regex")
});

/// Rule-based classifier over bilingual keyword sets
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Create a new keyword classifier
    pub fn new() -> Self {
        Self
    }

    /// Check if query contains any of the keywords
    fn matches_any(query: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| query.contains(kw))
    }

    fn is_billing(query: &str) -> bool {
        Self::matches_any(query, keywords_en::BILLING)
            || Self::matches_any(query, keywords_pt::BILLING)
    }

    fn is_technical(query: &str) -> bool {
        Self::matches_any(query, keywords_en::TECHNICAL)
            || Self::matches_any(query, keywords_pt::TECHNICAL)
    }

    fn is_greeting(query: &str) -> bool {
        Self::matches_any(query, keywords_en::GREETING)
            || Self::matches_any(query, keywords_pt::GREETING)
    }

    /// Extract an invoice amount from the raw (case-preserved) input
    fn extract_amount(raw: &str) -> Option<f64> {
        let captures = AMOUNT_RE.captures(raw)?;
        let digits = captures.get(1).or_else(|| captures.get(2))?.as_str();
        digits.replace(',', ".").parse::<f64>().ok()
    }

    /// Extract a customer name from the raw (case-preserved) input
    fn extract_name(raw: &str) -> Option<String> {
        if let Some(captures) = NAME_RE.captures(raw) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
        NAME_BEFORE_AMOUNT_RE
            .captures(raw)
            .and_then(|captures| captures.get(1).map(|m| m.as_str().to_string()))
    }
}

#[async_trait]
impl Classifier for KeywordClassifier {
    async fn classify(&self, query: &str, prior: &SessionState) -> Result<ClassificationResult> {
        let lowered = query.to_lowercase();

        let customer_name = Self::extract_name(query);
        let amount_invoice = Self::extract_amount(query);

        // Technical wins over billing: "error in my invoice portal" is a
        // bug report first.
        let intent = if Self::is_technical(&lowered) {
            Intent::Technical
        } else if Self::is_billing(&lowered) {
            Intent::Billing
        } else if customer_name.is_some() || amount_invoice.is_some() {
            // A bare slot value mid-conversation continues the billing flow
            match prior.intent {
                Intent::Billing | Intent::Unknown => Intent::Billing,
                intent => intent,
            }
        } else {
            Intent::General
        };

        let reply = if intent == Intent::General && Self::is_greeting(&lowered) {
            Some("Hello! How can I help you today?".to_string())
        } else {
            None
        };

        Ok(ClassificationResult {
            intent,
            customer_name,
            amount_invoice,
            reply,
        })
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
