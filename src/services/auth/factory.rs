//! Factory: build `BearerAuthenticator` from application `Config`.
use std::sync::Arc;

use crate::config::{AuthorityConfig, Config};
use crate::services::auth::{
    AuthorityError, BearerAuthenticator, StaticTokenAuthority, TokenAuthority,
    ValkeyTokenAuthority,
};

pub async fn build_authenticator(config: &Config) -> Result<Arc<BearerAuthenticator>, AuthorityError> {
    let authority: Arc<dyn TokenAuthority> = match &config.authority {
        AuthorityConfig::Static { tokens_file } => {
            let authority = StaticTokenAuthority::from_file(tokens_file)?;
            tracing::info!(
                path = %tokens_file.display(),
                tokens = authority.len(),
                "loaded static token authority"
            );
            Arc::new(authority)
        }
        AuthorityConfig::Valkey { url, prefix } => {
            Arc::new(ValkeyTokenAuthority::new(url, prefix.clone()).await?)
        }
    };

    let authenticator =
        BearerAuthenticator::new(authority).with_lookup_timeout(config.authority_timeout);

    tracing::info!(
        authority = authenticator.authority_name(),
        timeout = ?config.authority_timeout,
        "bearer authenticator ready"
    );

    Ok(Arc::new(authenticator))
}
