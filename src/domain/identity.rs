//! Caller identity.
//!
//! [`Identity`] names the account invoking an operation. It is the value
//! stored in a pool's `founder` and `owner` fields and compared against on
//! every owner-gated call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PoolError;

/// Opaque, non-empty caller identity (an account or address string).
///
/// Construction always goes through [`Identity::new`], so an empty or
/// blank identity cannot exist, including after deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Creates an identity from the given value.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidArgument`] if the value is empty or
    /// consists only of whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, PoolError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PoolError::InvalidArgument(
                "identity must not be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = PoolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}
