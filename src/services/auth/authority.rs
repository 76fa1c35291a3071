use std::str::FromStr;

use async_trait::async_trait;

use crate::services::auth::types::AccessToken;
use crate::services::cache::CacheError;

/// Token authority lookup:
/// - `Ok(Some(_))`: token is known
/// - `Ok(None)`: unknown / revoked token
/// - `Err(_)`: backend failure (the caller decides via `AuthorityFailurePolicy`)
///
/// Implementations must be safe to call concurrently; any locking lives inside them.
#[async_trait]
pub trait TokenAuthority: Send + Sync {
    // Backend name (for logging).
    fn name(&self) -> &'static str;

    async fn load_access_token(&self, token: &str) -> Result<Option<AccessToken>, AuthorityError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    #[error("token authority backend error: {0}")]
    Backend(String),

    #[error("token authority returned an invalid record: {0}")]
    InvalidRecord(String),

    #[error("token authority lookup timed out")]
    Timeout,
}

impl From<CacheError> for AuthorityError {
    fn from(e: CacheError) -> Self {
        Self::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for AuthorityError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidRecord(e.to_string())
    }
}

/// What the bearer middleware does when the authority lookup fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorityFailurePolicy {
    /// Terminate the request with 503.
    #[default]
    Propagate,
    /// Continue as an anonymous request.
    Anonymous,
}

impl FromStr for AuthorityFailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "anonymous" => Ok(Self::Anonymous),
            _ => Err(()),
        }
    }
}
