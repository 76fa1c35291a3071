/*
 * Responsibility
 * - v1 の公開ポイント (routes() / extractors の re-export)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::{READ_SCOPE, WRITE_SCOPE, routes};
