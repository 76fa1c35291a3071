use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::services::auth::authority::{AuthorityError, TokenAuthority};
use crate::services::auth::types::AccessToken;

/// In-memory token authority.
///
/// Loaded once at startup from a JSON object mapping token -> record:
///
/// ```json
/// { "tok-123": { "subject_id": "u1", "scopes": ["read"], "expires_at": null } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthority {
    tokens: HashMap<String, AccessToken>,
}

impl StaticTokenAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, record: AccessToken) -> Self {
        self.tokens.insert(token.into(), record);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, AuthorityError> {
        let tokens: HashMap<String, AccessToken> = serde_json::from_str(json)?;
        Ok(Self { tokens })
    }

    pub fn from_file(path: &Path) -> Result<Self, AuthorityError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AuthorityError::Backend(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl TokenAuthority for StaticTokenAuthority {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn load_access_token(&self, token: &str) -> Result<Option<AccessToken>, AuthorityError> {
        Ok(self.tokens.get(token).cloned())
    }
}
