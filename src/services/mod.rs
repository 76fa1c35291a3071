/*
 * Responsibility
 * - 認証サービス (bearer 検証, scope 判定) と、その下で使う cache client
 */
pub mod auth;
pub mod cache;
