//! Handler traits for the downstream support branches
//!
//! Handlers are external collaborators from the router's perspective: it
//! calls them with the relevant slots and assigns the returned display
//! string to the session's `final_result`.

use crate::error::Result;
use async_trait::async_trait;

/// Trait for the billing branch
///
/// Only invoked when both billing slots (customer name and invoice amount)
/// are present in the merged session state.
#[async_trait]
pub trait BillingHandler: Send + Sync {
    /// Handle a billing inquiry for a known customer and amount
    async fn handle(&self, query: &str, customer_name: &str, amount: f64) -> Result<String>;

    /// Get the handler's name
    fn name(&self) -> &str;
}

/// Trait for the technical branch
///
/// Always invocable; has no slot preconditions.
#[async_trait]
pub trait TechnicalHandler: Send + Sync {
    /// Troubleshoot a reported technical issue
    async fn handle(&self, issue: &str) -> Result<String>;

    /// Get the handler's name
    fn name(&self) -> &str;
}
