//! Tool trait definition

use async_trait::async_trait;
use serde_json::Value;
use support_core::Result;

/// Trait for tools the desk handlers can execute
///
/// Each tool must provide a name, description, and JSON schema for its
/// input. The schemas describe the contract even though the current tools
/// are mocks; a future LLM-driven desk can expose them for function calling.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;
}
