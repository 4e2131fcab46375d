//! Unified error types for the Remarque library.
//!
//! This module provides a unified error type covering both deck parsing and
//! navigation, presenting a consistent API to users.
use thiserror::Error;

/// Main error type for Remarque operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error occurred
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Navigation target outside the deck bounds
    #[error("Slide index {index} out of range (deck has {len} slides)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Named slide lookup failed
    #[error("Slide '{0}' not found")]
    SlideNotFound(String),
}

/// Result type for Remarque operations.
pub type Result<T> = std::result::Result<T, Error>;
