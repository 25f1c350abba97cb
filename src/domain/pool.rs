//! The pool entity: founder, owner, one-time initialization and metadata.
//!
//! A [`Pool`] is one unit of shared mutable state. All mutable fields sit
//! behind a single [`RwLock`], so each mutating operation validates and
//! commits while holding the write guard and no caller can observe a half
//! applied change. The founder is stored outside the lock because it never
//! changes after construction.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::metadata::{MetadataLimits, PoolMetadata};
use super::{EventBus, Identity, PoolEvent, PoolId};
use crate::error::PoolError;

/// Initialization state of a pool.
///
/// The only transition is `Uninitialized -> Initialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    /// Freshly created; metadata cannot be set yet.
    Uninitialized,
    /// `initialize` has succeeded. Terminal.
    Initialized,
}

#[derive(Debug)]
struct PoolState {
    owner: Identity,
    status: PoolStatus,
    metadata: PoolMetadata,
}

/// Consistent point-in-time view of a pool, taken under one read lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolSnapshot {
    /// Pool identifier.
    pub pool_id: PoolId,
    /// Immutable creator identity.
    pub founder: Identity,
    /// Current owner.
    pub owner: Identity,
    /// Initialization state.
    pub status: PoolStatus,
    /// Pool name, `""` if never set.
    pub name: String,
    /// Pool description, `""` if never set.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A pool created by [`super::PoolFactory`].
///
/// # Concurrency
///
/// - Reads may run concurrently with each other.
/// - `initialize`, `set_metadata` and `transfer_ownership` are serialized;
///   each either commits fully or returns an error with state untouched.
/// - Concurrent `initialize` calls resolve to exactly one success.
#[derive(Debug)]
pub struct Pool {
    id: PoolId,
    founder: Identity,
    created_at: DateTime<Utc>,
    limits: MetadataLimits,
    state: RwLock<PoolState>,
    event_bus: EventBus,
}

impl Pool {
    /// Creates an uninitialized pool owned by its founder.
    pub(crate) fn new(founder: Identity, limits: MetadataLimits, event_bus: EventBus) -> Self {
        Self {
            id: PoolId::new(),
            state: RwLock::new(PoolState {
                owner: founder.clone(),
                status: PoolStatus::Uninitialized,
                metadata: PoolMetadata::default(),
            }),
            founder,
            created_at: Utc::now(),
            limits,
            event_bus,
        }
    }

    /// Pool identifier.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// The identity that created the pool. Never changes.
    #[must_use]
    pub const fn founder(&self) -> &Identity {
        &self.founder
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> Identity {
        self.read().owner.clone()
    }

    /// Returns `true` if `identity` currently holds the owner role.
    #[must_use]
    pub fn is_owner(&self, identity: &Identity) -> bool {
        self.read().owner == *identity
    }

    /// Current initialization state.
    #[must_use]
    pub fn status(&self) -> PoolStatus {
        self.read().status
    }

    /// Returns `true` once `initialize` has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.status() == PoolStatus::Initialized
    }

    /// Name from the last successful `set_metadata`, or `""`.
    #[must_use]
    pub fn name(&self) -> String {
        self.read().metadata.name().to_string()
    }

    /// Description from the last successful `set_metadata`, or `""`.
    #[must_use]
    pub fn description(&self) -> String {
        self.read().metadata.description().to_string()
    }

    /// Name and description, read together.
    #[must_use]
    pub fn metadata(&self) -> PoolMetadata {
        self.read().metadata.clone()
    }

    /// Takes a consistent snapshot of the whole pool.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        let state = self.read();
        PoolSnapshot {
            pool_id: self.id,
            founder: self.founder.clone(),
            owner: state.owner.clone(),
            status: state.status,
            name: state.metadata.name().to_string(),
            description: state.metadata.description().to_string(),
            created_at: self.created_at,
        }
    }

    /// Moves the pool to [`PoolStatus::Initialized`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::AlreadyInitialized`] if the pool was initialized
    ///   before, whoever the caller is.
    /// - [`PoolError::NotAuthorized`] if `caller` is not the owner.
    pub fn initialize(&self, caller: &Identity) -> Result<(), PoolError> {
        let mut state = self.write();
        if state.status == PoolStatus::Initialized {
            tracing::debug!(pool_id = %self.id, %caller, "initialize rejected: already initialized");
            return Err(PoolError::AlreadyInitialized);
        }
        ensure_owner(&state, caller)?;

        state.status = PoolStatus::Initialized;

        // Published under the lock so event order matches commit order.
        let _ = self.event_bus.publish(PoolEvent::PoolInitialized {
            pool_id: self.id,
            initialized_by: caller.clone(),
            timestamp: Utc::now(),
        });
        drop(state);

        tracing::info!(pool_id = %self.id, %caller, "pool initialized");
        Ok(())
    }

    /// Replaces name and description together.
    ///
    /// # Errors
    ///
    /// - [`PoolError::NotAuthorized`] if `caller` is not the owner.
    /// - [`PoolError::NotInitialized`] before `initialize` has succeeded.
    /// - [`PoolError::InvalidArgument`] if the name is blank or a field is
    ///   over its length limit.
    pub fn set_metadata(
        &self,
        caller: &Identity,
        name: &str,
        description: &str,
    ) -> Result<(), PoolError> {
        let mut state = self.write();
        ensure_owner(&state, caller)?;
        if state.status != PoolStatus::Initialized {
            tracing::debug!(pool_id = %self.id, %caller, "set_metadata rejected: not initialized");
            return Err(PoolError::NotInitialized);
        }
        let metadata = PoolMetadata::new(name, description, &self.limits)?;

        state.metadata = metadata;

        let _ = self.event_bus.publish(PoolEvent::MetadataUpdated {
            pool_id: self.id,
            name: name.to_string(),
            description: description.to_string(),
            timestamp: Utc::now(),
        });
        drop(state);

        tracing::info!(pool_id = %self.id, %caller, name, "pool metadata updated");
        Ok(())
    }

    /// Hands the owner role to `new_owner`. The founder is unaffected.
    ///
    /// Allowed in either initialization state.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NotAuthorized`] if `caller` is not the owner.
    pub fn transfer_ownership(
        &self,
        caller: &Identity,
        new_owner: Identity,
    ) -> Result<(), PoolError> {
        let mut state = self.write();
        ensure_owner(&state, caller)?;

        let previous_owner = std::mem::replace(&mut state.owner, new_owner.clone());

        let _ = self.event_bus.publish(PoolEvent::OwnershipTransferred {
            pool_id: self.id,
            previous_owner: previous_owner.clone(),
            new_owner: new_owner.clone(),
            timestamp: Utc::now(),
        });
        drop(state);

        tracing::info!(
            pool_id = %self.id,
            %previous_owner,
            %new_owner,
            "pool ownership transferred"
        );
        Ok(())
    }

    // Mutations validate before writing and cannot panic half way, so a
    // poisoned lock still guards a valid state.
    fn read(&self) -> RwLockReadGuard<'_, PoolState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PoolState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn ensure_owner(state: &PoolState, caller: &Identity) -> Result<(), PoolError> {
    if state.owner == *caller {
        Ok(())
    } else {
        tracing::debug!(%caller, owner = %state.owner, "caller is not the owner");
        Err(PoolError::NotAuthorized {
            caller: caller.clone(),
        })
    }
}
