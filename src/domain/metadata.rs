//! Pool metadata: the `(name, description)` pair.

use serde::Serialize;

use crate::error::PoolError;

/// Length limits applied to metadata, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataLimits {
    /// Maximum name length.
    pub max_name_len: usize,
    /// Maximum description length.
    pub max_description_len: usize,
}

impl Default for MetadataLimits {
    fn default() -> Self {
        Self {
            max_name_len: 64,
            max_description_len: 1024,
        }
    }
}

/// Validated name and description of a pool.
///
/// The default value (both fields empty) is the metadata of a pool whose
/// owner has never called `set_metadata`. A non-default value always has a
/// non-empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoolMetadata {
    name: String,
    description: String,
}

impl PoolMetadata {
    /// Validates `name` and `description` against `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidArgument`] if the name is blank or either
    /// field exceeds its limit.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        limits: &MetadataLimits,
    ) -> Result<Self, PoolError> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(PoolError::InvalidArgument(
                "name must not be empty".to_string(),
            ));
        }
        let name_len = name.chars().count();
        if name_len > limits.max_name_len {
            return Err(PoolError::InvalidArgument(format!(
                "name is {name_len} characters, limit is {}",
                limits.max_name_len
            )));
        }
        let description_len = description.chars().count();
        if description_len > limits.max_description_len {
            return Err(PoolError::InvalidArgument(format!(
                "description is {description_len} characters, limit is {}",
                limits.max_description_len
            )));
        }

        Ok(Self { name, description })
    }

    /// Pool name, `""` if never set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pool description, `""` if never set.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
