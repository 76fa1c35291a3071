//! Bearer-token authentication gate for axum services.
//!
//! - `middleware::auth::bearer` resolves `Authorization: Bearer <token>` through a
//!   [`services::auth::TokenAuthority`] and attaches an
//!   [`api::v1::extractors::Authentication`] to every request.
//! - `middleware::auth::scope` rejects requests whose identity lacks the route's
//!   required scopes with `403 Insufficient scope`.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
