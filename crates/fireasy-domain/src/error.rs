//! Error handling types

use std::time::Duration;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Fireasy
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No provider is registered under the requested name
    #[error("Unknown provider '{name}'. Available providers: {available:?}")]
    ProviderNotFound {
        /// The requested provider name
        name: String,
        /// Names currently registered
        available: Vec<String>,
    },

    /// The provider does not support the requested operation
    #[error("Provider '{provider}' does not implement {operation}")]
    NotImplemented {
        /// Provider name
        provider: String,
        /// Operation that was invoked
        operation: String,
    },

    /// A connection string could not be interpreted
    #[error("Invalid connection string: {message}")]
    InvalidConnectionString {
        /// Description of the problem
        message: String,
    },

    /// A named lock could not be acquired in time
    #[error("Timed out after {timeout:?} waiting for lock '{key}'")]
    LockTimeout {
        /// Lock key
        key: String,
        /// Time spent waiting
        timeout: Duration,
    },

    /// The operation was cancelled by its caller
    #[error("Operation cancelled: {operation}")]
    Cancelled {
        /// The operation that observed the cancellation
        operation: String,
    },

    /// Infrastructure failure with context
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Service container resolution error
    #[error("Injection error: {message}")]
    Injection {
        /// Description of the resolution failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an injection error
    pub fn injection<S: Into<String>>(message: S) -> Self {
        Self::Injection {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Provider error creation methods
impl Error {
    /// Create a provider-not-found error
    pub fn provider_not_found<S: Into<String>>(name: S, available: Vec<String>) -> Self {
        Self::ProviderNotFound {
            name: name.into(),
            available,
        }
    }

    /// Create a not-implemented error for a provider operation
    pub fn not_implemented<P: Into<String>, O: Into<String>>(provider: P, operation: O) -> Self {
        Self::NotImplemented {
            provider: provider.into(),
            operation: operation.into(),
        }
    }

    /// Create an invalid connection string error
    pub fn invalid_connection_string<S: Into<String>>(message: S) -> Self {
        Self::InvalidConnectionString {
            message: message.into(),
        }
    }
}

// Lock error creation methods
impl Error {
    /// Create a lock timeout error
    pub fn lock_timeout<S: Into<String>>(key: S, timeout: Duration) -> Self {
        Self::LockTimeout {
            key: key.into(),
            timeout,
        }
    }

    /// Create a cancellation error
    pub fn cancelled<S: Into<String>>(operation: S) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Whether this error means a lock could not be obtained
    pub fn is_lock_failure(&self) -> bool {
        matches!(self, Self::LockTimeout { .. } | Self::Cancelled { .. })
    }
}
