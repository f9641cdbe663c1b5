//! # warden-api
//!
//! HTTP API layer for Warden built on Axum.
//!
//! Exposes login, logout, session introspection, a protected route, an
//! admin-only route, and health checks. Every protected handler asks the
//! [`SessionAuthority`](warden_auth::SessionAuthority) for a decision and
//! maps its errors onto 401/403 responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
