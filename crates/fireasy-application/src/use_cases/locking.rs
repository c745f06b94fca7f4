//! Named lock use case
//!
//! [`DistributedLocker`] runs a unit of work while holding a named lock
//! obtained from any [`LockProvider`]. Cancellation is carried by a
//! `CancellationToken` and observed both while waiting for the lock and
//! while the work runs. Dropping the returned future while the work runs
//! hands the lock back through [`LockProvider::abandon_lock`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::infrastructure::{LockGuard, LockProvider};
use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default time to wait for a lock
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(30);

/// Callback run instead of the work when the lock cannot be obtained
///
/// Receives the acquisition error (`LockTimeout` or `Cancelled`).
pub type LockFallback<T> = Box<dyn FnOnce(Error) -> BoxFuture<'static, Result<T>> + Send>;

/// Options for the locker registered in the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockOptions {
    /// Wait used when a call does not give its own timeout
    pub default_timeout: Duration,
}

impl Default for LockOptions {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

/// Runs work under a named lock
#[derive(Clone)]
pub struct DistributedLocker {
    provider: Arc<dyn LockProvider>,
    default_timeout: Duration,
}

impl DistributedLocker {
    /// Create a locker over `provider`
    pub fn new(provider: Arc<dyn LockProvider>, options: &LockOptions) -> Self {
        Self {
            provider,
            default_timeout: options.default_timeout,
        }
    }

    /// Name of the underlying lock provider
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Wait used when a call passes no timeout
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Acquire `key` within `timeout`, run `work`, release
    ///
    /// Acquisition failures are returned as `LockTimeout` / `Cancelled`.
    pub async fn lock<T, F, Fut>(
        &self,
        key: &str,
        timeout: Option<Duration>,
        cancel: &CancellationToken,
        work: F,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let timeout = timeout.unwrap_or(self.default_timeout);
        let guard = self.provider.acquire_lock(key, timeout, cancel).await?;
        self.run_held(key, guard, cancel, work).await
    }

    /// Like [`Self::lock`], but run `fallback` when the lock is not obtained
    ///
    /// Without a fallback the acquisition failure is returned. Errors raised
    /// by `work` itself never trigger the fallback.
    pub async fn try_lock<T, F, Fut>(
        &self,
        key: &str,
        timeout: Option<Duration>,
        cancel: &CancellationToken,
        work: F,
        fallback: Option<LockFallback<T>>,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let timeout = timeout.unwrap_or(self.default_timeout);
        let guard = match self.provider.acquire_lock(key, timeout, cancel).await {
            Ok(guard) => guard,
            Err(e) if e.is_lock_failure() => {
                return match fallback {
                    Some(fallback) => {
                        debug!(key, error = %e, "Lock not acquired, running fallback");
                        fallback(e).await
                    }
                    None => Err(e),
                };
            }
            Err(e) => return Err(e),
        };
        self.run_held(key, guard, cancel, work).await
    }

    async fn run_held<T, F, Fut>(
        &self,
        key: &str,
        guard: LockGuard,
        cancel: &CancellationToken,
        work: F,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        debug!(key, token = %guard.token, "Lock acquired");
        let mut holder = ReleaseOnDrop {
            provider: self.provider.as_ref(),
            guard: Some(guard.clone()),
        };
        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(Error::cancelled(format!("work under lock '{key}'"))),
            result = work() => result,
        };

        let released = self.provider.release_lock(guard).await;
        holder.disarm();
        if let Err(e) = &released {
            warn!(key, error = %e, "Failed to release lock");
        }
        let value = outcome?;
        released?;
        Ok(value)
    }
}

/// Abandons the held lock if the future running the work is dropped
struct ReleaseOnDrop<'a> {
    provider: &'a dyn LockProvider,
    guard: Option<LockGuard>,
}

impl ReleaseOnDrop<'_> {
    fn disarm(&mut self) {
        self.guard = None;
    }
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        if let Some(guard) = self.guard.take() {
            warn!(key = %guard.key, "Lock holder dropped before release");
            self.provider.abandon_lock(&guard);
        }
    }
}

impl std::fmt::Debug for DistributedLocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistributedLocker")
            .field("provider", &self.provider.provider_name())
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
