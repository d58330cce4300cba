//! Error types for the native core.
//!
//! Every fallible operation in this crate returns [`Result`]. The binding
//! layer maps each variant onto a Python exception at a single point, so
//! no variant here knows anything about Python.

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried across the dispatch boundary
pub type DispatchSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error types
#[derive(Error, Debug)]
pub enum Error {
    /// A business rule failed; the message is surfaced verbatim.
    #[error("{0}")]
    OperationFailed(String),

    /// Integer arithmetic left the representable range
    #[error("integer overflow in {operation}")]
    Overflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// An argument was outside the accepted domain
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// An aggregate over an empty input has no value
    #[error("{operation} of empty sequence")]
    EmptyInput {
        /// Operation that needed at least one element
        operation: &'static str,
    },

    /// A dynamically dispatched method failed in its implementation.
    ///
    /// The source is kept intact so the caller can recover the original
    /// error value (for instance a foreign exception) by downcasting.
    #[error("{method}() failed: {source}")]
    Dispatch {
        /// Method that was dispatched
        method: &'static str,
        /// Error raised by the implementation
        #[source]
        source: DispatchSource,
    },
}

impl Error {
    /// Create an operation failed error
    pub fn failed(message: impl Into<String>) -> Self {
        Error::OperationFailed(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create a dispatch error wrapping the implementation's error
    pub fn dispatch<E>(method: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Dispatch {
            method,
            source: Box::new(source),
        }
    }
}
