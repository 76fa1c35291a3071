//! Bearer credential authentication.
//!
//! `Authorization: Bearer <token>` -> token authority lookup -> expiry check -> `AuthInfo`.
//!
//! Missing header, wrong scheme, unknown token and expired token all yield `Ok(None)`
//! and are indistinguishable from each other. Only the authority can produce `Err`.

use std::{fmt, sync::Arc, time::Duration};

use axum::http::{HeaderMap, header};

use crate::services::auth::authority::{AuthorityError, TokenAuthority};
use crate::services::auth::clock::{Clock, SystemClock};
use crate::services::auth::types::AuthInfo;

/// Scheme prefix, case-sensitive, exactly one space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the raw bearer token from the request headers.
///
/// The remainder after the prefix is returned as-is, even when empty.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
}

pub struct BearerAuthenticator {
    authority: Arc<dyn TokenAuthority>,
    clock: Arc<dyn Clock>,
    lookup_timeout: Option<Duration>,
}

impl BearerAuthenticator {
    pub fn new(authority: Arc<dyn TokenAuthority>) -> Self {
        Self {
            authority,
            clock: Arc::new(SystemClock),
            lookup_timeout: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn authority_name(&self) -> &'static str {
        self.authority.name()
    }

    /// Authenticate a request from its headers.
    ///
    /// Every call goes to the authority; nothing is cached across requests so that
    /// revocation applies on the next request.
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<Option<AuthInfo>, AuthorityError> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };

        let lookup = self.authority.load_access_token(token);
        let record = match self.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, lookup)
                .await
                .map_err(|_| AuthorityError::Timeout)??,
            None => lookup.await?,
        };

        let Some(record) = record else {
            return Ok(None);
        };

        if record.is_expired_at(self.clock.now_epoch_seconds()) {
            return Ok(None);
        }

        Ok(Some(AuthInfo::from(record)))
    }
}

impl fmt::Debug for BearerAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuthenticator")
            .field("authority", &self.authority.name())
            .field("lookup_timeout", &self.lookup_timeout)
            .finish_non_exhaustive()
    }
}
