//! Domain events reflecting pool state mutations.
//!
//! Every successful mutation emits a [`PoolEvent`] through the
//! [`super::EventBus`], giving an audit trail of who created, initialized,
//! renamed or handed over a pool.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Identity, PoolId};

/// Domain event emitted after every successful state mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum PoolEvent {
    /// Emitted when the factory creates a pool.
    PoolCreated {
        /// Pool identifier.
        pool_id: PoolId,
        /// Creator, who is both founder and first owner.
        founder: Identity,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted once, when the pool leaves the uninitialized state.
    PoolInitialized {
        /// Pool identifier.
        pool_id: PoolId,
        /// Owner that performed the initialization.
        initialized_by: Identity,
        /// Initialization timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after the owner replaces name and description.
    MetadataUpdated {
        /// Pool identifier.
        pool_id: PoolId,
        /// New pool name.
        name: String,
        /// New pool description.
        description: String,
        /// Update timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when the owner role moves to another identity.
    OwnershipTransferred {
        /// Pool identifier.
        pool_id: PoolId,
        /// Owner before the transfer.
        previous_owner: Identity,
        /// Owner after the transfer.
        new_owner: Identity,
        /// Transfer timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl PoolEvent {
    /// Returns the pool ID associated with this event.
    #[must_use]
    pub fn pool_id(&self) -> PoolId {
        match self {
            Self::PoolCreated { pool_id, .. }
            | Self::PoolInitialized { pool_id, .. }
            | Self::MetadataUpdated { pool_id, .. }
            | Self::OwnershipTransferred { pool_id, .. } => *pool_id,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::PoolCreated { .. } => "pool_created",
            Self::PoolInitialized { .. } => "pool_initialized",
            Self::MetadataUpdated { .. } => "metadata_updated",
            Self::OwnershipTransferred { .. } => "ownership_transferred",
        }
    }
}
