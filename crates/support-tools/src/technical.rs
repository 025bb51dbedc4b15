//! Technical support tools and the technical desk handler

use crate::tool::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use support_core::{Error, Result, TechnicalHandler};
use tracing::debug;

/// Runs system diagnostics to troubleshoot technical issues
pub struct DiagnosticTool;

#[derive(Debug, Deserialize)]
struct DiagnosticParams {
    issue: String,
}

#[async_trait]
impl Tool for DiagnosticTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: DiagnosticParams = serde_json::from_value(params)
            .map_err(|e| Error::Other(format!("invalid parameters: {e}")))?;

        let result = format!(
            "Mock Diagnostic Report for '{}': System latency normal. No packet loss detected. Suggest clearing cache.",
            params.issue
        );
        Ok(json!({ "result": result }))
    }

    fn name(&self) -> &str {
        "diagnostic_tool"
    }

    fn description(&self) -> &str {
        "Runs system diagnostics to troubleshoot technical issues"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "issue": {
                    "type": "string",
                    "description": "Description of the technical issue"
                }
            },
            "required": ["issue"]
        })
    }
}

/// Searches the technical support knowledge base for articles and solutions
pub struct KnowledgeBase;

#[derive(Debug, Deserialize)]
struct KnowledgeBaseParams {
    query: String,
}

#[async_trait]
impl Tool for KnowledgeBase {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: KnowledgeBaseParams = serde_json::from_value(params)
            .map_err(|e| Error::Other(format!("invalid parameters: {e}")))?;

        let result = format!(
            "Mock Knowledge Base Result for '{}': Article 1, Article 2.",
            params.query
        );
        Ok(json!({ "result": result }))
    }

    fn name(&self) -> &str {
        "knowledge_base"
    }

    fn description(&self) -> &str {
        "Searches the technical support knowledge base for articles and solutions"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The topic or error message to search for"
                }
            },
            "required": ["query"]
        })
    }
}

/// Technical desk: runs diagnostics and searches the knowledge base
pub struct TechnicalDesk {
    diagnostics: DiagnosticTool,
    knowledge_base: KnowledgeBase,
}

impl TechnicalDesk {
    pub fn new() -> Self {
        Self {
            diagnostics: DiagnosticTool,
            knowledge_base: KnowledgeBase,
        }
    }
}

impl Default for TechnicalDesk {
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
impl TechnicalHandler for TechnicalDesk {
    async fn handle(&self, issue: &str) -> Result<String> {
        debug!(issue, "technical desk invoked");

        let diagnostics = self.diagnostics.execute(json!({ "issue": issue })).await?;
        let articles = self.knowledge_base.execute(json!({ "query": issue })).await?;

        Ok(format!("{}\n{}", tool_text(&diagnostics), tool_text(&articles)))
    }

    fn name(&self) -> &str {
        "technical-desk"
    }
}
