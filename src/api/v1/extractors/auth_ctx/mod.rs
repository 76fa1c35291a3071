/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証結果 (Authentication) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - Authentication
 * - CurrentAuth / Authenticated
 */

mod core;
mod types;

pub use self::core::{Authenticated, CurrentAuth};
pub use types::Authentication;
