//! Distributed Lock Provider Port
//!
//! Defines the contract for named lock coordination services.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;

/// Lock guard token returned when a lock is acquired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockGuard {
    /// Lock key
    pub key: String,
    /// Unique token for this lock acquisition
    pub token: String,
}

/// Distributed lock provider interface
#[async_trait]
pub trait LockProvider: Send + Sync {
    /// Name of this provider for diagnostics
    fn provider_name(&self) -> &str;

    /// Acquire the named lock, waiting at most `timeout`
    ///
    /// Fails with `Error::LockTimeout` when the wait expires and with
    /// `Error::Cancelled` when `cancel` fires first.
    async fn acquire_lock(
        &self,
        key: &str,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<LockGuard>;

    /// Release a lock previously returned by `acquire_lock`
    async fn release_lock(&self, guard: LockGuard) -> Result<()>;

    /// Release a lock whose holder was dropped before calling `release_lock`
    ///
    /// Runs inside `Drop`, so it must not block or await. Unknown or already
    /// released guards are ignored.
    fn abandon_lock(&self, guard: &LockGuard);
}
