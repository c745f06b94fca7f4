//! Lock Provider Implementations
//!
//! | Provider | Scope | Description |
//! |----------|-------|-------------|
//! | [`LocalLockProvider`] | Process | Per-key `tokio` mutexes |
//!
//! The `locking` deployer registers a `DistributedLocker` over the local
//! provider.

pub mod local;

pub use local::LocalLockProvider;
