/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::bearer (認証), auth::scope (認可), cors, http (横断的関心事)
 */
pub mod auth;
pub mod cors;
pub mod http;
