//! Pool creation.

use std::sync::Arc;

use chrono::Utc;

use super::metadata::MetadataLimits;
use super::{EventBus, Identity, Pool, PoolEvent};
use crate::config::CoreConfig;

/// Creates independent [`Pool`]s.
///
/// The factory keeps no record of the pools it creates: each call to
/// [`PoolFactory::create`] returns a fresh handle and nothing else. Every
/// pool shares the factory's [`EventBus`] and metadata limits.
#[derive(Debug, Clone, Default)]
pub struct PoolFactory {
    event_bus: EventBus,
    limits: MetadataLimits,
}

impl PoolFactory {
    /// Creates a factory publishing to `event_bus`.
    #[must_use]
    pub const fn new(event_bus: EventBus, limits: MetadataLimits) -> Self {
        Self { event_bus, limits }
    }

    /// Creates a factory from loaded configuration.
    #[must_use]
    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(
            EventBus::new(config.event_bus_capacity),
            config.metadata_limits(),
        )
    }

    /// Returns the bus every created pool publishes to.
    #[must_use]
    pub const fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Creates an uninitialized pool whose founder and owner are `creator`.
    #[must_use]
    pub fn create(&self, creator: Identity) -> Arc<Pool> {
        let pool = Pool::new(creator, self.limits, self.event_bus.clone());
        let pool_id = pool.id();

        let _ = self.event_bus.publish(PoolEvent::PoolCreated {
            pool_id,
            founder: pool.founder().clone(),
            timestamp: Utc::now(),
        });

        tracing::info!(%pool_id, founder = %pool.founder(), "pool created");
        Arc::new(pool)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::PoolStatus;

    fn identity(value: &str) -> Identity {
        let Ok(id) = Identity::new(value) else {
            panic!("valid identity");
        };
        id
    }

    #[test]
    fn create_binds_creator_as_founder_and_owner() {
        let factory = PoolFactory::default();
        let pool = factory.create(identity("owner"));

        assert_eq!(pool.founder(), &identity("owner"));
        assert_eq!(pool.owner(), identity("owner"));
        assert_eq!(pool.status(), PoolStatus::Uninitialized);
        assert_eq!(pool.name(), "");
        assert_eq!(pool.description(), "");
    }

    #[test]
    fn pools_are_independent() {
        let factory = PoolFactory::default();
        let a = factory.create(identity("owner"));
        let b = factory.create(identity("owner"));
        assert_ne!(a.id(), b.id());

        assert!(a.initialize(&identity("owner")).is_ok());
        assert!(a.is_initialized());
        assert!(!b.is_initialized());
    }

    #[tokio::test]
    async fn create_emits_event() {
        let factory = PoolFactory::default();
        let mut rx = factory.event_bus().subscribe();

        let pool = factory.create(identity("wallet3"));

        let Ok(event) = rx.recv().await else {
            panic!("expected event");
        };
        assert_eq!(event.event_type_str(), "pool_created");
        assert_eq!(event.pool_id(), pool.id());
    }

    #[test]
    fn from_config_applies_limits() {
        let config = CoreConfig {
            max_name_len: 4,
            ..CoreConfig::default()
        };
        let factory = PoolFactory::from_config(&config);
        let owner = identity("owner");
        let pool = factory.create(owner.clone());
        assert!(pool.initialize(&owner).is_ok());

        assert!(pool.set_metadata(&owner, "pool", "").is_ok());
        assert!(pool.set_metadata(&owner, "pools", "").is_err());
    }
}
