/*
 * Responsibility
 * - GET /me (認証済み主体の確認用)
 * - scope "read" は routes 側で要求する
 */
use axum::Json;

use crate::api::v1::dto::me::MeResponse;
use crate::api::v1::extractors::Authenticated;

pub async fn me(Authenticated(auth): Authenticated) -> Json<MeResponse> {
    Json(MeResponse::from(auth))
}
