use std::sync::Arc;

use async_trait::async_trait;

use crate::services::auth::authority::{AuthorityError, TokenAuthority};
use crate::services::auth::types::AccessToken;
use crate::services::cache::{CacheClient, ValkeyClient};

/// Valkey-backed token authority (Redis protocol).
///
/// Records are JSON `AccessToken` values stored under `<prefix>:<token>`.
/// Revocation is a `DEL` on the authority side and takes effect on the next request.
#[derive(Clone)]
pub struct ValkeyTokenAuthority<C: CacheClient> {
    cache: Arc<C>,
    // Key prefix to avoid collisions with other data in the same keyspace
    prefix: String,
}

impl ValkeyTokenAuthority<ValkeyClient> {
    pub async fn new(url: &str, prefix: impl Into<String>) -> Result<Self, AuthorityError> {
        let client = ValkeyClient::new(url).await?;
        Ok(Self::new_with_cache(Arc::new(client), prefix))
    }
}

impl<C: CacheClient> ValkeyTokenAuthority<C> {
    pub fn new_with_cache(cache: Arc<C>, prefix: impl Into<String>) -> Self {
        Self {
            cache,
            prefix: prefix.into(),
        }
    }

    pub fn key(&self, token: &str) -> String {
        format!("{}:{}", self.prefix, token)
    }
}

#[async_trait]
impl<C: CacheClient> TokenAuthority for ValkeyTokenAuthority<C> {
    fn name(&self) -> &'static str {
        self.cache.backend_name()
    }

    async fn load_access_token(&self, token: &str) -> Result<Option<AccessToken>, AuthorityError> {
        let raw = self.cache.get_string(&self.key(token)).await?;

        let record = raw
            .map(|json| serde_json::from_str::<AccessToken>(&json))
            .transpose()?;

        Ok(record)
    }
}
