use serde::Serialize;

use crate::services::auth::AuthInfo;

/// `GET /me` response: who the caller is and what it may do.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub subject_id: String,
    pub scopes: Vec<String>,
    pub expires_at: Option<i64>,
}

impl From<AuthInfo> for MeResponse {
    fn from(info: AuthInfo) -> Self {
        Self {
            subject_id: info.subject_id,
            scopes: info.scopes.into_iter().collect(),
            expires_at: info.expires_at,
        }
    }
}
