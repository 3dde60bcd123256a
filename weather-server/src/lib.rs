//! HTTP layer for the weather backend.
//!
//! This crate wires the core library into an axum server: routes, shared
//! state, handlers, and the mapping from failures to HTTP statuses.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
