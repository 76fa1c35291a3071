use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::AuthInfo;

use super::Authentication;

/// Handler で、認証結果 (匿名を含む) を受け取るための extractor
/// bearer middleware が Authentication を request.extensions() に insert 済みである前提
/// 見つからない場合は 500 (middleware 未設定 = 配線ミス)
pub struct CurrentAuth(pub Option<AuthInfo>);

impl<S> FromRequestParts<S> for CurrentAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Authentication>()
            .map(|auth| CurrentAuth(auth.info().cloned()))
            .ok_or_else(|| {
                tracing::error!("authentication context missing; bearer middleware not installed");
                AppError::Internal
            })
    }
}

/// 認証済みの呼び出し元だけを通す extractor
/// 匿名の場合は scope 不足と同じ 403 を返す
pub struct Authenticated(pub AuthInfo);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentAuth(info) = CurrentAuth::from_request_parts(parts, state).await?;
        info.map(Authenticated).ok_or(AppError::InsufficientScope)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;
    use crate::services::auth::AccessToken;

    fn parts_with(auth: Option<Authentication>) -> Parts {
        let mut req = Request::builder().uri("/").body(()).unwrap();
        if let Some(auth) = auth {
            req.extensions_mut().insert(auth);
        }
        req.into_parts().0
    }

    #[tokio::test]
    async fn current_auth_reads_extension() {
        let info = AuthInfo::from(AccessToken::new("u1", ["read"]));
        let mut parts = parts_with(Some(Authentication::new(Some(info.clone()))));

        let CurrentAuth(found) = CurrentAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(found, Some(info));
    }

    #[tokio::test]
    async fn current_auth_without_middleware_is_internal_error() {
        let mut parts = parts_with(None);

        let err = CurrentAuth::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Internal));
    }

    #[tokio::test]
    async fn authenticated_rejects_anonymous() {
        let mut parts = parts_with(Some(Authentication::anonymous()));

        let err = Authenticated::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::InsufficientScope));
    }
}
