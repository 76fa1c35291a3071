/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - route ごとの必要 scope をここで決める (scope::require)
 * - bearer 認証そのものは app.rs で v1 全体に掛ける
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{documents::create_document, health::health, me::me};
use crate::middleware::auth::scope;
use crate::state::AppState;

pub const READ_SCOPE: &str = "read";
pub const WRITE_SCOPE: &str = "write";

pub fn routes() -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let profile = scope::require(Router::new().route("/me", get(me)), [READ_SCOPE]);

    let documents = scope::require(
        Router::new().route("/documents", post(create_document)),
        [READ_SCOPE, WRITE_SCOPE],
    );

    public.merge(profile).merge(documents)
}
