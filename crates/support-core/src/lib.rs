//! Core abstractions for the support intent router
//!
//! This crate defines the fundamental types shared across the support-rs
//! workspace: the per-session state, the classification result produced each
//! turn, and the traits implemented by the classifier and handler
//! collaborators.

pub mod classify;
pub mod error;
pub mod handler;
pub mod state;

pub use classify::{ClassificationResult, Classifier, FALLBACK_REPLY};
pub use error::{Error, Result};
pub use handler::{BillingHandler, TechnicalHandler};
pub use state::{Intent, SessionState};
