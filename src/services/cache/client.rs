//! Cache client interface used by cache-backed services (token lookup).
use async_trait::async_trait;
use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache-layer errors (transport/command).
///
/// Kept independent from `AppError`; callers decide how a failure surfaces
/// (the token authority maps it to `AuthorityError::Backend`).
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    BackendConnection(String),
    #[error("cache command error: {0}")]
    BackendCommand(String),
}

/// A minimal read-only cache interface.
///
/// Token lookup only needs `GET`. Implementations must be cheap to clone
/// (typically `Arc<...>` or a connection manager inside).
#[async_trait]
pub trait CacheClient: Clone + Send + Sync + 'static {
    // Returns the cache backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Get UTF-8 string value. `Ok(None)` when the key does not exist.
    async fn get_string(&self, key: &str) -> CacheResult<Option<String>>;
}
