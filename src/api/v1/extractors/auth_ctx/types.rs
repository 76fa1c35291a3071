/*
 * Responsibility
 * - middleware が request extensions に載せる「認証コンテキスト」の型
 * - bearer middleware は匿名リクエストにも必ずこの値を入れる (中身が None)
 *
 * Notes
 * - token 検証ロジックは services/auth 側の責務
 * - scope 判定はこの値の AuthInfo.scopes だけを見る
 */
use crate::services::auth::AuthInfo;

/// Per-request authentication outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authentication(Option<AuthInfo>);

impl Authentication {
    pub fn new(info: Option<AuthInfo>) -> Self {
        Self(info)
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn info(&self) -> Option<&AuthInfo> {
        self.0.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_inner(self) -> Option<AuthInfo> {
        self.0
    }
}
