//! Concurrency tests for the catalog cache.
//!
//! Run with: cargo test --test metadata_cache_concurrency_test

use ccxt_core::base_exchange::{Catalog, CatalogLoad, RefreshPolicy};
use ccxt_core::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

async fn slow_loader(calls: Arc<AtomicUsize>, value: u32) -> Result<HashMap<String, u32>> {
    calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(50)).await;
    Ok(HashMap::from([("BTC".to_string(), value)]))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_loads_fetch_once() {
    let catalog: Arc<Catalog<u32>> = Arc::new(Catalog::new("currencies"));
    let calls = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for i in 0..16 {
        let catalog = Arc::clone(&catalog);
        let calls = Arc::clone(&calls);
        handles.push(tokio::spawn(async move {
            catalog
                .load_with(false, RefreshPolicy::ReturnNothing, || slow_loader(calls, i))
                .await
        }));
    }

    let mut refreshed = 0;
    let mut busy = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            CatalogLoad::Refreshed(_) => refreshed += 1,
            CatalogLoad::Busy => busy += 1,
            // a task scheduled after the refresh finished sees the snapshot
            CatalogLoad::Cached(_) => {}
        }
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(refreshed, 1);
    assert!(busy > 0);
    assert!(!catalog.is_refreshing());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_await_in_flight_waiters_share_one_fetch() {
    let catalog: Arc<Catalog<u32>> = Arc::new(Catalog::new("markets"));
    let calls = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for i in 0..8 {
        let catalog = Arc::clone(&catalog);
        let calls = Arc::clone(&calls);
        handles.push(tokio::spawn(async move {
            catalog
                .load_with(false, RefreshPolicy::AwaitInFlight, || slow_loader(calls, i))
                .await
        }));
    }

    for handle in handles {
        let snapshot = handle.await.unwrap().unwrap().into_snapshot();
        assert!(snapshot.is_some_and(|s| s.contains_key("BTC")));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_snapshot_replaced_wholesale() {
    let catalog: Catalog<u32> = Catalog::new("currencies");
    catalog
        .load_with(false, RefreshPolicy::ReturnNothing, || async {
            Ok(HashMap::from([("BTC".to_string(), 1), ("ETH".to_string(), 1)]))
        })
        .await
        .unwrap();
    let before = catalog.snapshot().await.unwrap();

    catalog
        .load_with(true, RefreshPolicy::ReturnNothing, || async {
            Ok(HashMap::from([("BTC".to_string(), 2)]))
        })
        .await
        .unwrap();
    let after = catalog.snapshot().await.unwrap();

    // readers holding the old snapshot keep a consistent view
    assert_eq!(before.len(), 2);
    assert_eq!(after.len(), 1);
    assert_eq!(after["BTC"], 2);
}
