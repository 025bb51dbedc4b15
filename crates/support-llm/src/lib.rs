//! LLM-backed intent classification for support-rs
//!
//! This crate implements the router's classifier collaborator on top of an
//! OpenAI-compatible chat completions API. It includes:
//!
//! - A chat client with timeout and error mapping
//! - The coordinator prompt (bilingual, MiniJinja)
//! - Lenient decoding of the model's JSON payload
//! - The [`LlmClassifier`] implementing `support_core::Classifier`

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod prompt;

pub use classifier::LlmClassifier;
pub use client::ChatClient;
pub use config::LlmConfig;
pub use error::{LlmError, Result};
pub use payload::parse_classification;
pub use prompt::Language;
