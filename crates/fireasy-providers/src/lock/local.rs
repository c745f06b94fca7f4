//! In-process lock provider
//!
//! Named locks backed by one `tokio` mutex per key, kept in a `DashMap`.
//! Locks only coordinate tasks inside one process; a distributed backend
//! implements the same `LockProvider` port.
//!
//! ## Example
//!
//! ```ignore
//! use fireasy_providers::lock::LocalLockProvider;
//!
//! let provider = LocalLockProvider::new();
//! let guard = provider.acquire_lock("orders", Duration::from_secs(5), &cancel).await?;
//! provider.release_lock(guard).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use fireasy_application::services::ServiceCollection;
use fireasy_application::{DistributedLocker, LockOptions};
use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::infrastructure::{LockGuard, LockProvider};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::constants::{BUILTIN_DEPLOYER_PRIORITY, DEPLOYER_LOCKING, LOCAL_LOCK_PROVIDER_NAME};

struct HeldLock {
    key: String,
    _guard: OwnedMutexGuard<()>,
}

/// Lock provider for a single process
///
/// Cloning shares the lock table.
#[derive(Clone, Default)]
pub struct LocalLockProvider {
    /// One mutex per key; entries are dropped once nobody holds or awaits them
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
    /// Held locks by token
    held: Arc<DashMap<String, HeldLock>>,
}

impl LocalLockProvider {
    /// Create an empty lock table
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is currently held
    pub fn is_locked(&self, key: &str) -> bool {
        self.held.iter().any(|entry| entry.key == key)
    }

    /// Number of locks currently held
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    fn mutex_for(&self, key: &str) -> Arc<Mutex<()>> {
        self.locks.entry(key.to_string()).or_default().clone()
    }

    /// Drop the key's mutex when no guard or waiter references it
    fn forget_if_idle(&self, key: &str) {
        self.locks
            .remove_if(key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

#[async_trait]
impl LockProvider for LocalLockProvider {
    fn provider_name(&self) -> &str {
        LOCAL_LOCK_PROVIDER_NAME
    }

    async fn acquire_lock(
        &self,
        key: &str,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<LockGuard> {
        let mutex = self.mutex_for(key);
        trace!(key, ?timeout, "Waiting for lock");

        let acquired = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            acquired = tokio::time::timeout(timeout, mutex.clone().lock_owned()) => Some(acquired),
        };
        drop(mutex);

        let guard = match acquired {
            Some(Ok(guard)) => guard,
            Some(Err(_)) => {
                self.forget_if_idle(key);
                return Err(Error::lock_timeout(key, timeout));
            }
            None => {
                self.forget_if_idle(key);
                return Err(Error::cancelled(format!("acquiring lock '{key}'")));
            }
        };

        let token = Uuid::new_v4().to_string();
        self.held.insert(
            token.clone(),
            HeldLock {
                key: key.to_string(),
                _guard: guard,
            },
        );
        debug!(key, token = %token, "Local lock acquired");
        Ok(LockGuard {
            key: key.to_string(),
            token,
        })
    }

    async fn release_lock(&self, guard: LockGuard) -> Result<()> {
        let removed = self
            .held
            .remove_if(&guard.token, |_, held| held.key == guard.key);
        if removed.is_none() {
            return Err(Error::not_found(format!(
                "lock '{}' with token {}",
                guard.key, guard.token
            )));
        }
        drop(removed);
        self.forget_if_idle(&guard.key);
        debug!(key = %guard.key, "Local lock released");
        Ok(())
    }

    fn abandon_lock(&self, guard: &LockGuard) {
        let removed = self
            .held
            .remove_if(&guard.token, |_, held| held.key == guard.key);
        if removed.is_some() {
            drop(removed);
            self.forget_if_idle(&guard.key);
            warn!(key = %guard.key, token = %guard.token, "Local lock abandoned by its holder");
        }
    }
}

impl std::fmt::Debug for LocalLockProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalLockProvider")
            .field("keys", &self.locks.len())
            .field("held", &self.held.len())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use fireasy_application::ports::registry::{
    SERVICE_DEPLOYERS, ServicesDeployerEntry, TYPE_DESCRIPTORS, TypeDescriptorEntry,
};

/// Register a [`DistributedLocker`] over the local provider
///
/// Uses the `LockOptions` seeded into the collection, or the defaults.
fn deploy_local_locker(services: &mut ServiceCollection) -> Result<()> {
    let options = services
        .options::<LockOptions>()
        .cloned()
        .unwrap_or_default();
    let provider: Arc<dyn LockProvider> = Arc::new(LocalLockProvider::new());
    debug!(
        provider = LOCAL_LOCK_PROVIDER_NAME,
        default_timeout = ?options.default_timeout,
        "Registering distributed locker"
    );
    services.add_singleton(DistributedLocker::new(provider, &options));
    Ok(())
}

#[linkme::distributed_slice(SERVICE_DEPLOYERS)]
static LOCKING_DEPLOYER: ServicesDeployerEntry = ServicesDeployerEntry {
    name: DEPLOYER_LOCKING,
    description: "Distributed locker over the in-process lock provider",
    priority: BUILTIN_DEPLOYER_PRIORITY,
    depends_on: &[],
    configure: deploy_local_locker,
};

#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
static LOCAL_LOCK_TYPE: TypeDescriptorEntry = TypeDescriptorEntry {
    name: "fireasy_providers::lock::LocalLockProvider",
    aliases: &["LocalLockProvider", LOCAL_LOCK_PROVIDER_NAME],
    description: "In-process named lock provider",
    provider_factory: None,
};
