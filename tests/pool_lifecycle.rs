//! End-to-end pool lifecycle and concurrency behavior.

#![allow(clippy::panic)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pool_core::domain::{Identity, Pool, PoolFactory, PoolStatus};
use pool_core::error::PoolError;
use tokio_test::assert_ok;

fn identity(value: &str) -> Identity {
    let Ok(id) = Identity::new(value) else {
        panic!("valid identity");
    };
    id
}

/// Created by `owner`, initialized, named "creditPool".
fn credit_pool() -> (Arc<Pool>, Identity) {
    let owner = identity("owner");
    let pool = PoolFactory::default().create(owner.clone());
    assert_ok!(pool.initialize(&owner));
    assert_ok!(pool.set_metadata(&owner, "creditPool", "Great Pool"));
    (pool, owner)
}

#[test]
fn should_have_proper_owner() {
    let (pool, owner) = credit_pool();
    assert_eq!(pool.owner(), *pool.founder());
    assert_eq!(pool.owner(), owner);
}

#[test]
fn should_have_proper_name() {
    let (pool, _) = credit_pool();
    assert_eq!(pool.name(), "creditPool");
}

#[test]
fn should_have_proper_description() {
    let (pool, _) = credit_pool();
    assert_eq!(pool.description(), "Great Pool");
}

#[test]
fn handover_keeps_founder_as_audit_anchor() {
    let (pool, owner) = credit_pool();
    let wallet1 = identity("wallet1");
    let wallet2 = identity("wallet2");

    assert_ok!(pool.transfer_ownership(&owner, wallet1.clone()));
    assert_ok!(pool.transfer_ownership(&wallet1, wallet2.clone()));

    assert_eq!(pool.owner(), wallet2);
    assert_eq!(pool.founder(), &owner);
    assert!(matches!(
        pool.set_metadata(&wallet1, "x", "y"),
        Err(PoolError::NotAuthorized { .. })
    ));
    assert_ok!(pool.set_metadata(&wallet2, "secondPool", "Still great"));

    let snapshot = pool.snapshot();
    assert_eq!(snapshot.status, PoolStatus::Initialized);
    assert_eq!(snapshot.name, "secondPool");
    assert_eq!(snapshot.description, "Still great");
}

#[test]
fn concurrent_initialize_succeeds_exactly_once() {
    let owner = identity("owner");
    let pool = PoolFactory::default().create(owner.clone());
    let successes = AtomicUsize::new(0);
    let already = AtomicUsize::new(0);

    std::thread::scope(|s| {
        for _ in 0..16 {
            s.spawn(|| match pool.initialize(&owner) {
                Ok(()) => {
                    successes.fetch_add(1, Ordering::SeqCst);
                }
                Err(PoolError::AlreadyInitialized) => {
                    already.fetch_add(1, Ordering::SeqCst);
                }
                Err(other) => panic!("unexpected error: {other}"),
            });
        }
    });

    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(already.load(Ordering::SeqCst), 15);
    assert!(pool.is_initialized());
}

#[test]
fn concurrent_set_metadata_never_interleaves() {
    let (pool, owner) = credit_pool();

    std::thread::scope(|s| {
        for i in 0..8 {
            let pool = &pool;
            let owner = &owner;
            s.spawn(move || {
                for round in 0..50 {
                    let name = format!("pool-{i}-{round}");
                    let description = format!("description-{i}-{round}");
                    assert_ok!(pool.set_metadata(owner, &name, &description));

                    let meta = pool.metadata();
                    let suffix = meta.name().trim_start_matches("pool-");
                    assert_eq!(meta.description(), format!("description-{suffix}"));
                }
            });
        }
    });

    let snapshot = pool.snapshot();
    let suffix = snapshot.name.trim_start_matches("pool-");
    assert_eq!(snapshot.description, format!("description-{suffix}"));
}

#[tokio::test]
async fn subscribers_see_full_audit_trail() {
    let factory = PoolFactory::default();
    let mut rx = factory.event_bus().subscribe();
    let owner = identity("owner");

    let pool = factory.create(owner.clone());
    assert_ok!(pool.initialize(&owner));
    assert_ok!(pool.set_metadata(&owner, "creditPool", "Great Pool"));
    assert_ok!(pool.transfer_ownership(&owner, identity("wallet1")));

    let mut kinds = Vec::new();
    for _ in 0..4 {
        let Ok(event) = rx.recv().await else {
            panic!("expected event");
        };
        assert_eq!(event.pool_id(), pool.id());
        kinds.push(event.event_type_str());
    }
    assert_eq!(
        kinds,
        [
            "pool_created",
            "pool_initialized",
            "metadata_updated",
            "ownership_transferred"
        ]
    );
}
