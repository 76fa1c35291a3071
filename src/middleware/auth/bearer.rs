//! bearer token 検証 → Authentication を extensions に入れる
//!
//! - 認証できなくてもリクエストは拒否しない (匿名として次へ渡す)
//! - 拒否は scope middleware / extractor の責務
//! - token authority の障害だけは `AuthorityFailurePolicy` に従う

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
use crate::services::auth::AuthorityFailurePolicy;
use crate::state::AppState;

/// Install bearer authentication on every route of `router`.
///
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::bearer::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, bearer_middleware))
}

async fn bearer_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth = match state.authenticator.authenticate(req.headers()).await {
        Ok(auth) => auth,
        Err(err) => match state.authority_failure {
            AuthorityFailurePolicy::Propagate => {
                tracing::warn!(error = %err, "token authority lookup failed");
                return Err(AppError::AuthorityUnavailable);
            }
            AuthorityFailurePolicy::Anonymous => {
                tracing::warn!(error = %err, "token authority lookup failed; continuing anonymously");
                None
            }
        },
    };

    match &auth {
        Some(info) => tracing::debug!(
            subject_id = %info.subject_id,
            scopes = info.scopes.len(),
            "request authenticated"
        ),
        None => tracing::trace!("anonymous request"),
    }

    // middleware → extractor / scope middleware への受け渡し
    req.extensions_mut().insert(Authentication::new(auth));

    Ok(next.run(req).await)
}
