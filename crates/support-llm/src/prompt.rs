//! Coordinator prompt for intent classification
//!
//! The prompt asks for a strict JSON object so the payload decoder can do
//! its job. Templates are MiniJinja and come in English and Portuguese
//! variants; known slot values from the prior session state are passed so
//! the model does not re-ask for information it already has.

use crate::error::Result;
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use serde_json::json;
use support_core::SessionState;

/// Prompt language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    English,
    /// Portuguese (Brazilian)
    Portuguese,
}

impl Language {
    /// Get ISO 639-1 language code
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    /// Parse from ISO 639-1 code or common name; defaults to English
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => Language::Portuguese,
            _ => Language::English,
        }
    }
}

/// System prompt shared by both languages
pub const COORDINATOR_SYSTEM: &str = "You are a Support Coordinator. Output ONLY JSON.";

const COORDINATOR_EN: &str = r#"Task:
1. Analyze the User Request.
2. Classify intent into ONE of: ['billing', 'technical', 'general'].
3. Extract 'customer_name' and 'amount_invoice' ONLY if explicitly present in the text. Never invent values; use null when absent.

- If the user greets or chats without a specific task, intent is 'general'.
- If the user asks about invoices, payments, or money, intent is 'billing'.
- If the user reports a bug, error, or system failure, intent is 'technical'.

{% if known_name or known_amount %}Already known from earlier turns (do not re-extract unless the user gives a new value):
{% if known_name %}- customer_name: {{ known_name }}
{% endif %}{% if known_amount %}- amount_invoice: {{ known_amount }}
{% endif %}{% endif %}Output strictly in JSON format:
{
    "intent": "billing" | "technical" | "general",
    "customer_name": "name" or null,
    "amount_invoice": 100.0 or null,
    "reply": "Your response to the user if intent is general" or null
}

User Request: {{ user_query }}"#;

const COORDINATOR_PT: &str = r#"Tarefa:
1. Analise a solicitação do usuário.
2. Classifique a intenção em UMA de: ['billing', 'technical', 'general'].
3. Extraia 'customer_name' e 'amount_invoice' SOMENTE se estiverem explícitos no texto. Nunca invente valores; use null quando ausentes.

- Se o usuário disser "ola", "oi" ou conversar sem uma tarefa específica, a intenção é 'general'.
- Se o usuário perguntar sobre faturas, pagamentos ou dinheiro, a intenção é 'billing'.
- Se o usuário relatar um bug, erro ou falha de sistema, a intenção é 'technical'.

{% if known_name or known_amount %}Já conhecido de turnos anteriores (não re-extraia, a menos que o usuário informe um novo valor):
{% if known_name %}- customer_name: {{ known_name }}
{% endif %}{% if known_amount %}- amount_invoice: {{ known_amount }}
{% endif %}{% endif %}Responda estritamente em formato JSON:
{
    "intent": "billing" | "technical" | "general",
    "customer_name": "nome" or null,
    "amount_invoice": 100.0 or null,
    "reply": "Sua resposta ao usuário se a intenção for general" or null
}

Solicitação do usuário: {{ user_query }}"#;

/// Render the coordinator prompt for one turn
pub fn coordinator_prompt(
    language: Language,
    user_query: &str,
    prior: &SessionState,
) -> Result<String> {
    let template = match language {
        Language::English => COORDINATOR_EN,
        Language::Portuguese => COORDINATOR_PT,
    };

    let mut env = Environment::new();
    env.add_template("coordinator", template)?;

    let rendered = env.get_template("coordinator")?.render(json!({
        "user_query": user_query,
        "known_name": prior.customer_name,
        "known_amount": prior.amount_invoice,
    }))?;

    Ok(rendered)
}
