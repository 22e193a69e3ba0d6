//! Error handling for the edukyber ecosystem

pub mod validate;

// Re-export validation utilities module
pub use validate as validation;

use thiserror::Error as ThisError;

/// Primary error type for edukyber operations.
///
/// Every variant describes caller misuse. Nothing here is transient, so no
/// operation retries internally.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// An operation was invoked before the phase it depends on.
    #[error("{operation} requires {missing}")]
    Precondition {
        /// The operation that was attempted
        operation: &'static str,
        /// The artifact that has not been produced yet
        missing: &'static str,
    },

    /// A caller-supplied value is outside its domain (e.g. a message bit of 2).
    #[error("invalid input for {context}: {message}")]
    InvalidInput {
        /// Where the value was rejected
        context: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// A runtime parameter (module rank, noise width) is unsupported.
    #[error("invalid parameter for {context}: {message}")]
    InvalidParameter {
        /// Parameter name
        context: &'static str,
        /// Why it was rejected
        message: String,
    },
}

impl Error {
    /// Shorthand to create a precondition error
    pub fn precondition(operation: &'static str, missing: &'static str) -> Self {
        Error::Precondition { operation, missing }
    }

    /// Shorthand to create an invalid-input error
    pub fn input<M: Into<String>>(context: &'static str, message: M) -> Self {
        Error::InvalidInput {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an invalid-parameter error
    pub fn param<M: Into<String>>(context: &'static str, message: M) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// True for errors caused by calling the protocol phases out of order.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition { .. })
    }
}

/// Result type for edukyber operations
pub type Result<T> = core::result::Result<T, Error>;
