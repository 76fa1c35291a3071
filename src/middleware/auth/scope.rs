//! 必要 scope を満たさないリクエストを handler の手前で 403 にする
//!
//! bearer middleware が入れた Authentication だけを見る。
//! Authentication が無い場合 (bearer 未設定) も匿名として拒否する。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::Authentication;
use crate::error::AppError;
use crate::services::auth::RequiredScopes;

/// Require `scopes` on every route of `router`.
///
/// Uses `route_layer`, so unmatched paths still 404 instead of 403.
///
/// ```ignore
/// let me = Router::new().route("/me", get(me));
/// let me = middleware::auth::scope::require(me, ["read"]);
/// ```
pub fn require<S, I, T>(router: Router<S>, scopes: I) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let required = RequiredScopes::new(scopes);
    router.route_layer(middleware::from_fn_with_state(required, scope_middleware))
}

async fn scope_middleware(
    State(required): State<RequiredScopes>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = req
        .extensions()
        .get::<Authentication>()
        .and_then(Authentication::info);

    if let Err(err) = required.check(auth) {
        tracing::debug!(
            subject_id = auth.map(|info| info.subject_id.as_str()),
            required = ?required.as_slice(),
            "insufficient scope"
        );
        return Err(err);
    }

    Ok(next.run(req).await)
}
