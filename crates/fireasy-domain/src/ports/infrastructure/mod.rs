//! Infrastructure service ports

/// Named lock coordination
pub mod lock;

pub use lock::{LockGuard, LockProvider};
