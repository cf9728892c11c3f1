//! Error handling for the huffwire library
//!
//! This module provides the crate-wide error type with detailed error
//! information for all codec operations.

use thiserror::Error;

/// Main error type for the huffwire library
#[derive(Error, Debug)]
pub enum HuffwireError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialized tree header is truncated or structurally invalid
    #[error("malformed header: {message}")]
    MalformedHeader {
        /// Error message describing the issue
        message: String,
    },

    /// A body bit stream ended before the end-of-stream mark was reached
    #[error("malformed body: {message}")]
    MalformedBody {
        /// Error message describing the issue
        message: String,
    },

    /// Caller-supplied data violates the codec's alphabet or table contract
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Error message describing the issue
        message: String,
    },
}

impl HuffwireError {
    /// Create a malformed header error
    pub fn malformed_header<S: Into<String>>(message: S) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a malformed body error
    pub fn malformed_body<S: Into<String>>(message: S) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::MalformedHeader { .. } => "header",
            Self::MalformedBody { .. } => "body",
            Self::InvalidInput { .. } => "input",
        }
    }

    /// Check if the operation that produced this error can be retried
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock
            ),
            // corrupt headers, truncated bodies, and bad input do not heal on retry
            Self::MalformedHeader { .. } | Self::MalformedBody { .. } | Self::InvalidInput { .. } => {
                false
            }
        }
    }
}

/// Result type alias using HuffwireError
pub type Result<T> = std::result::Result<T, HuffwireError>;
