/*
 * Responsibility
 * - POST /documents
 * - scope "read" + "write" は routes 側で要求する。handler は owner の記録だけ
 */
use axum::{Json, http::StatusCode};

use crate::api::v1::dto::documents::{CreateDocumentRequest, DocumentResponse};
use crate::api::v1::extractors::Authenticated;
use crate::error::AppError;

pub async fn create_document(
    Authenticated(auth): Authenticated,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_DOCUMENT", msg))?;

    tracing::info!(owner = %auth.subject_id, "document created");

    Ok((
        StatusCode::CREATED,
        Json(DocumentResponse {
            title: req.title,
            body: req.body,
            owner: auth.subject_id,
        }),
    ))
}
