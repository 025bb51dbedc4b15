//! Lenient decoding of the classifier's JSON payload
//!
//! Models wrap JSON in markdown fences, omit fields, or add extra ones; all
//! of that is tolerated. What is not tolerated is a known field carrying a
//! foreign type: that makes the whole payload untrustworthy and the caller
//! falls back to the degraded general path.

use crate::error::{LlmError, Result};
use serde_json::Value;
use support_core::{ClassificationResult, Intent};

/// Strip markdown code fences the model may wrap around the JSON
fn strip_code_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

fn string_field(payload: &Value, key: &str) -> Result<Option<String>> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(other) => Err(LlmError::MalformedPayload(format!(
            "field '{key}' has unexpected type: {other}"
        ))),
    }
}

fn amount_field(payload: &Value, key: &str) -> Result<Option<f64>> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        // Models frequently quote numbers; accept a parseable numeric string
        Some(Value::String(s)) => match s.trim().trim_start_matches('$').parse::<f64>() {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => Err(LlmError::MalformedPayload(format!(
                "field '{key}' is not a number: {s:?}"
            ))),
        },
        Some(other) => Err(LlmError::MalformedPayload(format!(
            "field '{key}' has unexpected type: {other}"
        ))),
    }
}

/// Parse the raw model output into a [`ClassificationResult`]
///
/// Missing fields default (intent defaults to general); unknown intent
/// labels normalize to general; extra fields are ignored.
pub fn parse_classification(raw: &str) -> Result<ClassificationResult> {
    let stripped = strip_code_fences(raw);

    let payload: Value = serde_json::from_str(stripped)
        .map_err(|e| LlmError::MalformedPayload(format!("invalid JSON: {e}")))?;

    if !payload.is_object() {
        return Err(LlmError::MalformedPayload(format!(
            "expected a JSON object, got: {payload}"
        )));
    }

    let intent = match payload.get("intent") {
        None | Some(Value::Null) => Intent::General,
        Some(Value::String(label)) => Intent::from_label(label),
        Some(other) => {
            return Err(LlmError::MalformedPayload(format!(
                "field 'intent' has unexpected type: {other}"
            )));
        }
    };

    Ok(ClassificationResult {
        intent,
        customer_name: string_field(&payload, "customer_name")?,
        amount_invoice: amount_field(&payload, "amount_invoice")?,
        reply: string_field(&payload, "reply")?,
    })
}
