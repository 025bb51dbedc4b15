//! Tool framework for support-rs
//!
//! This crate provides the `Tool` trait and registry, the mock support tools
//! (billing database, invoice generator, diagnostics, knowledge base), and
//! the two desk handlers that compose them. The tools are string-template
//! mocks standing in for real backends; the desks implement the handler
//! traits the router dispatches to.

pub mod billing;
pub mod registry;
pub mod technical;
pub mod tool;

pub use billing::{BillingDesk, BillingSystemDb, InvoiceGenerator};
pub use registry::ToolRegistry;
pub use technical::{DiagnosticTool, KnowledgeBase, TechnicalDesk};
pub use tool::Tool;

use std::sync::Arc;

/// Build a registry containing every support tool
pub fn default_registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry.register(Arc::new(BillingSystemDb));
    registry.register(Arc::new(InvoiceGenerator));
    registry.register(Arc::new(DiagnosticTool));
    registry.register(Arc::new(KnowledgeBase));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = default_registry();
        assert_eq!(registry.len(), 4);
        assert!(registry.get("billing_system_db").is_some());
        assert!(registry.get("invoice_generator").is_some());
        assert!(registry.get("diagnostic_tool").is_some());
        assert!(registry.get("knowledge_base").is_some());
    }
}
