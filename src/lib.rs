//! # pool-core
//!
//! A pool entity with a one-time initialization step, a permanent founder,
//! a transferable owner and owner-gated metadata.
//!
//! Funding, accounting and membership are not part of this crate; a host
//! (RPC layer, ledger, test harness) wraps the operations below without
//! changing their contracts.
//!
//! ## Architecture
//!
//! ```text
//! Callers (any host)
//!     │
//!     ├── PoolFactory::create(creator) ──► Arc<Pool>
//!     │
//!     ├── Pool (domain/)
//!     │     initialize / set_metadata / transfer_ownership
//!     │     one RwLock per pool, owner check before mutation
//!     │
//!     └── EventBus (domain/) ──► subscribers
//! ```
//!
//! ## Example
//!
//! ```
//! use pool_core::domain::{Identity, PoolFactory};
//!
//! # fn main() -> Result<(), pool_core::error::PoolError> {
//! let owner = Identity::new("owner")?;
//! let pool = PoolFactory::default().create(owner.clone());
//!
//! pool.initialize(&owner)?;
//! pool.set_metadata(&owner, "creditPool", "Great Pool")?;
//!
//! assert_eq!(pool.owner(), *pool.founder());
//! assert_eq!(pool.name(), "creditPool");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
