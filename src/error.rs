//! Pool error types with numeric error codes.
//!
//! [`PoolError`] is the central error type of the crate. Every failing
//! operation returns one of its variants synchronously and leaves the pool
//! in the state it had before the call.

use crate::domain::Identity;

/// Error enum for pool operations.
///
/// # Error Code Ranges
///
/// | Range     | Category        |
/// |-----------|-----------------|
/// | 1000–1999 | Validation      |
/// | 2000–2999 | Lifecycle state |
/// | 3000–3999 | Authorization   |
/// | 5000–5999 | Configuration   |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// `initialize` was called on a pool that is already initialized.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// A metadata mutation was attempted before initialization.
    #[error("pool is not initialized")]
    NotInitialized,

    /// The caller does not hold the `owner` role.
    #[error("caller {caller} is not authorized")]
    NotAuthorized {
        /// Identity that attempted the operation.
        caller: Identity,
    },

    /// An identity or metadata value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or is out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PoolError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidArgument(_) => 1001,
            Self::AlreadyInitialized => 2001,
            Self::NotInitialized => 2002,
            Self::NotAuthorized { .. } => 3001,
            Self::Config(_) => 5001,
        }
    }
}
