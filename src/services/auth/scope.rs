/*
 * Responsibility
 * - route ごとに必要な scope の集合 (RequiredScopes) を保持する
 * - AuthInfo.scopes がそれを満たすかを判定する (pure, I/O なし)
 *
 * Notes
 * - 未認証 (None) と scope 不足は同じ InsufficientScope として扱う
 */
use std::sync::Arc;

use crate::error::AppError;
use crate::services::auth::types::AuthInfo;

/// Check that `auth` grants every scope in `required`.
///
/// Short-circuits on the first missing scope. An empty `required` always passes,
/// even for anonymous requests.
pub fn enforce(auth: Option<&AuthInfo>, required: &[String]) -> Result<(), AppError> {
    for scope in required {
        match auth {
            Some(info) if info.has_scope(scope) => {}
            _ => return Err(AppError::InsufficientScope),
        }
    }
    Ok(())
}

/// Scopes a protected router requires. Fixed at router construction.
#[derive(Debug, Clone)]
pub struct RequiredScopes(Arc<[String]>);

impl RequiredScopes {
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(scopes.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn check(&self, auth: Option<&AuthInfo>) -> Result<(), AppError> {
        enforce(auth, &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::types::AccessToken;

    fn info(scopes: &[&str]) -> AuthInfo {
        AuthInfo::from(AccessToken::new("u1", scopes.iter().copied()))
    }

    #[test]
    fn superset_passes() {
        let required = RequiredScopes::new(["read", "write"]);

        assert!(required.check(Some(&info(&["read", "write"]))).is_ok());
        assert!(required.check(Some(&info(&["admin", "read", "write"]))).is_ok());
    }

    #[test]
    fn missing_scope_is_denied() {
        let required = RequiredScopes::new(["read", "write"]);

        let err = required.check(Some(&info(&["read"]))).unwrap_err();
        assert!(matches!(err, AppError::InsufficientScope));
        assert!(required.check(Some(&info(&[]))).is_err());
    }

    #[test]
    fn anonymous_is_denied_like_under_scoped() {
        let required = RequiredScopes::new(["read"]);

        let err = required.check(None).unwrap_err();
        assert!(matches!(err, AppError::InsufficientScope));
    }

    #[test]
    fn empty_requirement_always_passes() {
        let required = RequiredScopes::new(Vec::<String>::new());

        assert!(required.check(None).is_ok());
        assert!(required.check(Some(&info(&[]))).is_ok());
    }

    #[test]
    fn scope_names_match_exactly() {
        let required = RequiredScopes::new(["read"]);

        assert!(required.check(Some(&info(&["Read"]))).is_err());
        assert!(required.check(Some(&info(&["read:all"]))).is_err());
    }

    #[test]
    fn requirement_preserves_order() {
        let required = RequiredScopes::new(["write", "read"]);
        assert_eq!(required.as_slice(), ["write".to_string(), "read".to_string()]);
    }
}
