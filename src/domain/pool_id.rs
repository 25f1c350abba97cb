//! Pool address.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Address of one pool.
///
/// The factory draws a fresh UUID v4 for every pool it creates; the id
/// then tags that pool's [`super::PoolEvent`]s and its
/// [`super::PoolSnapshot`], so a subscriber listening to a shared bus can
/// tell which pool a founder, owner or metadata change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(uuid::Uuid);

impl PoolId {
    /// Draws a fresh address.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Rebuilds an address received from a host, e.g. in a request.
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for PoolId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
