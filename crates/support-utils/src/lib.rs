//! Shared utilities for support-rs
//!
//! This crate provides common functionality used across the support-rs
//! workspace, currently logging setup.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with};
