//! HTTP API module for the task endpoints.

pub mod handlers;
pub mod responses;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
