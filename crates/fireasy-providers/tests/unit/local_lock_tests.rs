//! Tests for the in-process lock provider

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fireasy_application::{DistributedLocker, LockOptions};
use fireasy_domain::ports::infrastructure::{LockGuard, LockProvider};
use fireasy_domain::{Error, Result};
use fireasy_providers::lock::LocalLockProvider;
use futures::FutureExt;
use tokio_util::sync::CancellationToken;

const SHORT: Duration = Duration::from_millis(25);
const LONG: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_acquire_and_release() {
    let provider = LocalLockProvider::new();
    let cancel = CancellationToken::new();

    let guard = provider.acquire_lock("orders", LONG, &cancel).await.unwrap();
    assert_eq!(guard.key, "orders");
    assert!(provider.is_locked("orders"));
    assert_eq!(provider.held_count(), 1);

    provider.release_lock(guard).await.unwrap();
    assert!(!provider.is_locked("orders"));
    assert_eq!(provider.held_count(), 0);
}

#[tokio::test]
async fn test_second_acquire_times_out() {
    let provider = LocalLockProvider::new();
    let cancel = CancellationToken::new();
    let guard = provider.acquire_lock("orders", LONG, &cancel).await.unwrap();

    match provider.acquire_lock("orders", SHORT, &cancel).await {
        Err(Error::LockTimeout { key, timeout }) => {
            assert_eq!(key, "orders");
            assert_eq!(timeout, SHORT);
        }
        other => panic!("Expected LockTimeout, got {other:?}"),
    }
    provider.release_lock(guard).await.unwrap();
}

#[tokio::test]
async fn test_distinct_keys_do_not_block() {
    let provider = LocalLockProvider::new();
    let cancel = CancellationToken::new();

    let orders = provider.acquire_lock("orders", SHORT, &cancel).await.unwrap();
    let invoices = provider.acquire_lock("invoices", SHORT, &cancel).await.unwrap();
    assert_eq!(provider.held_count(), 2);

    provider.release_lock(orders).await.unwrap();
    provider.release_lock(invoices).await.unwrap();
}

#[tokio::test]
async fn test_waiter_acquires_after_release() {
    let provider = LocalLockProvider::new();
    let cancel = CancellationToken::new();
    let guard = provider.acquire_lock("orders", LONG, &cancel).await.unwrap();

    let waiter = {
        let provider = provider.clone();
        tokio::spawn(async move {
            let cancel = CancellationToken::new();
            provider.acquire_lock("orders", LONG, &cancel).await
        })
    };
    tokio::time::sleep(SHORT).await;
    provider.release_lock(guard).await.unwrap();

    let second = waiter.await.unwrap().unwrap();
    assert!(provider.is_locked("orders"));
    provider.release_lock(second).await.unwrap();
}

#[tokio::test]
async fn test_cancel_while_waiting() {
    let provider = LocalLockProvider::new();
    let cancel = CancellationToken::new();
    let guard = provider.acquire_lock("orders", LONG, &cancel).await.unwrap();

    let waiting = CancellationToken::new();
    let trigger = waiting.clone();
    tokio::spawn(async move {
        tokio::time::sleep(SHORT).await;
        trigger.cancel();
    });

    let result = provider.acquire_lock("orders", LONG, &waiting).await;
    assert!(matches!(result, Err(Error::Cancelled { .. })));
    provider.release_lock(guard).await.unwrap();
}

#[tokio::test]
async fn test_release_with_unknown_token_fails() {
    let provider = LocalLockProvider::new();
    let cancel = CancellationToken::new();
    let guard = provider.acquire_lock("orders", LONG, &cancel).await.unwrap();

    let forged = LockGuard {
        key: "orders".to_string(),
        token: "forged".to_string(),
    };
    assert!(matches!(
        provider.release_lock(forged).await,
        Err(Error::NotFound { .. })
    ));

    let wrong_key = LockGuard {
        key: "invoices".to_string(),
        token: guard.token.clone(),
    };
    assert!(provider.release_lock(wrong_key).await.is_err());

    provider.release_lock(guard.clone()).await.unwrap();
    assert!(provider.release_lock(guard).await.is_err());
}

#[tokio::test]
async fn test_abandon_frees_the_key() {
    let provider = LocalLockProvider::new();
    let cancel = CancellationToken::new();
    let guard = provider.acquire_lock("orders", LONG, &cancel).await.unwrap();

    provider.abandon_lock(&guard);
    assert!(!provider.is_locked("orders"));
    assert_eq!(provider.held_count(), 0);

    // A second abandon or a late release finds nothing
    provider.abandon_lock(&guard);
    assert!(provider.release_lock(guard).await.is_err());
}

#[tokio::test]
async fn test_dropped_locker_future_unlocks_key() {
    let provider = Arc::new(LocalLockProvider::new());
    let locker = DistributedLocker::new(provider.clone(), &LockOptions::default());
    let cancel = CancellationToken::new();

    let outer = tokio::time::timeout(
        Duration::from_millis(20),
        locker.lock("orders", None, &cancel, || async {
            tokio::time::sleep(LONG).await;
            Ok(())
        }),
    )
    .await;
    assert!(outer.is_err());
    assert!(!provider.is_locked("orders"));
    assert_eq!(provider.held_count(), 0);

    let again = provider
        .acquire_lock("orders", Duration::from_millis(200), &cancel)
        .await
        .unwrap();
    provider.release_lock(again).await.unwrap();
}

#[tokio::test]
async fn test_locker_serializes_critical_sections() {
    let locker = DistributedLocker::new(
        Arc::new(LocalLockProvider::new()),
        &LockOptions {
            default_timeout: LONG,
        },
    );
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let locker = locker.clone();
        let active = active.clone();
        let peak = peak.clone();
        tasks.push(tokio::spawn(async move {
            let cancel = CancellationToken::new();
            locker
                .lock("orders", None, &cancel, || async {
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(2)).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                    Ok(())
                })
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }
    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_locker_fallback_when_held() {
    let provider = Arc::new(LocalLockProvider::new());
    let locker = DistributedLocker::new(provider.clone(), &LockOptions::default());
    let cancel = CancellationToken::new();
    let guard = provider.acquire_lock("orders", LONG, &cancel).await.unwrap();

    let value: Result<&str> = locker
        .try_lock(
            "orders",
            Some(SHORT),
            &cancel,
            || async { Ok("work") },
            Some(Box::new(|_: Error| async { Ok("fallback") }.boxed())),
        )
        .await;
    assert_eq!(value.unwrap(), "fallback");
    provider.release_lock(guard).await.unwrap();
}
