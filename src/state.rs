/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - authenticator: bearer 検証 (token authority 呼び出しを含む)
 *   - authority_failure: authority 障害時の扱い
 * - Clone 前提で持つ (内部は Arc/Copy)
 */
use std::sync::Arc;

use crate::services::auth::{AuthorityFailurePolicy, BearerAuthenticator};

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Arc<BearerAuthenticator>,
    pub authority_failure: AuthorityFailurePolicy,
}

impl AppState {
    pub fn new(
        authenticator: Arc<BearerAuthenticator>,
        authority_failure: AuthorityFailurePolicy,
    ) -> Self {
        Self {
            authenticator,
            authority_failure,
        }
    }
}
