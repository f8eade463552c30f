//! Shared Utilities
//!
//! Error types and request validation helpers used across layers.

pub mod error;
pub mod validation;
