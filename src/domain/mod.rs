//! Domain layer: identities, the pool entity, its factory and events.
//!
//! This module contains the pool model: caller identity, pool identity,
//! validated metadata, the pool state machine with its owner gate, the
//! factory that hands out new pools, and the event bus that broadcasts
//! every committed mutation.

pub mod event_bus;
pub mod identity;
pub mod metadata;
pub mod pool;
pub mod pool_event;
pub mod pool_factory;
pub mod pool_id;

pub use event_bus::EventBus;
pub use identity::Identity;
pub use metadata::{MetadataLimits, PoolMetadata};
pub use pool::{Pool, PoolSnapshot, PoolStatus};
pub use pool_event::PoolEvent;
pub use pool_factory::PoolFactory;
pub use pool_id::PoolId;
