//! Task management HTTP API.
//!
//! A small axum service over a flat list of tasks persisted as one JSON file.
//! Every request loads the whole collection, and creates rewrite it whole.
//!
//! ```text
//! GET  /            service descriptor
//! GET  /tasks       list (?filter=completed|pending|all)
//! GET  /tasks/:id   single task
//! POST /tasks       create from {"title": "..."}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`task`]: Task model, filters and input parsing
//! - [`store`]: Whole-collection persistence
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod task;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
