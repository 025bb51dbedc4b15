//! Billing tools and the billing desk handler

use crate::tool::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use support_core::{BillingHandler, Error, Result};
use tracing::debug;

/// Queries the billing system database for invoice or payment information
pub struct BillingSystemDb;

#[derive(Debug, Deserialize)]
struct BillingDbParams {
    query: String,
}

#[async_trait]
impl Tool for BillingSystemDb {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: BillingDbParams = serde_json::from_value(params)
            .map_err(|e| Error::Other(format!("invalid parameters: {e}")))?;

        // Mock lookup standing in for a real billing backend
        let result = format!(
            "Mock Billing DB Result for '{}': Invoice #9999 paid on 2023-12-01. Balance: $20.00.",
            params.query
        );
        Ok(json!({ "result": result }))
    }

    fn name(&self) -> &str {
        "billing_system_db"
    }

    fn description(&self) -> &str {
        "Queries the billing system database for invoice or payment information"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query or invoice ID"
                }
            },
            "required": ["query"]
        })
    }
}

/// Generates a new invoice for a customer
pub struct InvoiceGenerator;

#[derive(Debug, Deserialize)]
struct InvoiceParams {
    customer_name: String,
    amount: f64,
}

#[async_trait]
impl Tool for InvoiceGenerator {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: InvoiceParams = serde_json::from_value(params)
            .map_err(|e| Error::Other(format!("invalid parameters: {e}")))?;

        let result = format!(
            "Mock Invoice Generator: Created Invoice #10001 for {} with amount ${}.",
            params.customer_name, params.amount
        );
        Ok(json!({ "result": result }))
    }

    fn name(&self) -> &str {
        "invoice_generator"
    }

    fn description(&self) -> &str {
        "Generates a new invoice for a customer"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "customer_name": {
                    "type": "string",
                    "description": "Name of the customer"
                },
                "amount": {
                    "type": "number",
                    "description": "The amount to be billed"
                }
            },
            "required": ["customer_name", "amount"]
        })
    }
}

/// Billing desk: looks up billing records and issues an invoice
///
/// Composes [`BillingSystemDb`] and [`InvoiceGenerator`] the way the
/// billing branch of the support flow uses them.
pub struct BillingDesk {
    db: BillingSystemDb,
    generator: InvoiceGenerator,
}

impl BillingDesk {
    pub fn new() -> Self {
        Self {
            db: BillingSystemDb,
            generator: InvoiceGenerator,
        }
    }
}

impl Default for BillingDesk {
    fn default() -> Self {
        Self::new()
    }
}

fn tool_text(output: &Value) -> String {
    output
        .get("result")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl BillingHandler for BillingDesk {
    async fn handle(&self, query: &str, customer_name: &str, amount: f64) -> Result<String> {
        debug!(customer_name, amount, "billing desk invoked");

        let billing_info = self.db.execute(json!({ "query": query })).await?;
        let invoice = self
            .generator
            .execute(json!({ "customer_name": customer_name, "amount": amount }))
            .await?;

        Ok(format!("{}\n{}", tool_text(&billing_info), tool_text(&invoice)))
    }

    fn name(&self) -> &str {
        "billing-desk"
    }
}
