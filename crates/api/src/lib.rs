//! Unified Routing API
//!
//! Axum-based API with routes and middleware for the unified routing service.

pub mod handlers;
pub mod router;
pub mod security;
pub mod state;

pub use handlers::ErrorResponse;
pub use router::create_router;
pub use state::AppState;
