//! Unified error types for the Remarque library.
//!
//! This module provides a unified error type that encompasses errors from
//! deck parsing and navigation, presenting a consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
