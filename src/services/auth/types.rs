/*
 * Responsibility
 * - Token authority が返すレコード (AccessToken) の型
 * - 認証成功時に request に載せる identity (AuthInfo) の型
 *
 * Notes
 * - AuthInfo は immutable な値。handler / scope 判定はこの値だけを見る
 */
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Record returned by a token authority for a known access token.
///
/// `expires_at` is epoch seconds. `None` means the token never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(alias = "client_id")]
    pub subject_id: String,
    #[serde(default)]
    pub scopes: BTreeSet<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl AccessToken {
    pub fn new<I, S>(subject_id: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject_id: subject_id.into(),
            scopes: scopes.into_iter().map(Into::into).collect(),
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, expires_at: i64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Strictly-before comparison: a token whose `expires_at` equals `now` is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp < now)
    }
}

/// Authenticated identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthInfo {
    pub subject_id: String,
    pub scopes: BTreeSet<String>,
    pub expires_at: Option<i64>,
}

impl AuthInfo {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }
}

impl From<AccessToken> for AuthInfo {
    fn from(token: AccessToken) -> Self {
        Self {
            subject_id: token.subject_id,
            scopes: token.scopes,
            expires_at: token.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_strictly_before_now() {
        let token = AccessToken::new("u1", ["read"]).expiring_at(100);

        assert!(!token.is_expired_at(99));
        assert!(!token.is_expired_at(100));
        assert!(token.is_expired_at(101));
    }

    #[test]
    fn token_without_expiry_never_expires() {
        let token = AccessToken::new("u1", ["read"]);
        assert!(!token.is_expired_at(i64::MAX));
    }

    #[test]
    fn record_deserializes_with_defaults() {
        let token: AccessToken = serde_json::from_str(r#"{"subject_id":"u1"}"#).unwrap();

        assert_eq!(token.subject_id, "u1");
        assert!(token.scopes.is_empty());
        assert_eq!(token.expires_at, None);
    }

    #[test]
    fn record_accepts_client_id_alias() {
        let token: AccessToken =
            serde_json::from_str(r#"{"client_id":"svc","scopes":["read","write"],"expires_at":42}"#)
                .unwrap();

        assert_eq!(token.subject_id, "svc");
        assert_eq!(token.expires_at, Some(42));

        let info = AuthInfo::from(token);
        assert!(info.has_scope("read"));
        assert!(info.has_scope("write"));
        assert!(!info.has_scope("admin"));
    }
}
