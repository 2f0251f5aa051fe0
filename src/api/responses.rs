//! JSON response bodies.

use serde::Serialize;

use crate::task::{Task, TaskFilter};

/// Failure body: `{success: false, message}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Always false.
    pub success: bool,
    /// Caller-facing message.
    pub message: String,
}

impl ErrorBody {
    /// Build a failure body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Service descriptor returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    /// Liveness message.
    pub message: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Available endpoints.
    pub endpoints: Endpoints,
}

/// Endpoint name to method and path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub health: &'static str,
    pub get_all_tasks: &'static str,
    pub get_task_by_id: &'static str,
    pub create_task: &'static str,
}

impl Default for ServiceDescriptor {
    fn default() -> Self {
        Self {
            message: "Task Management API is running",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                health: "GET /",
                get_all_tasks: "GET /tasks (optional: ?filter=completed|pending|all)",
                get_task_by_id: "GET /tasks/:id",
                create_task: "POST /tasks",
            },
        }
    }
}

/// Body of `GET /tasks`.
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub success: bool,
    /// Length of `data`.
    pub count: usize,
    /// Effective filter.
    pub filter: TaskFilter,
    pub data: Vec<Task>,
}

impl TaskListResponse {
    /// Build from an already-filtered list.
    pub fn new(filter: TaskFilter, data: Vec<Task>) -> Self {
        Self {
            success: true,
            count: data.len(),
            filter,
            data,
        }
    }
}

/// Body of `GET /tasks/:id`.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub success: bool,
    pub data: Task,
}

/// Body of a successful `POST /tasks`.
#[derive(Debug, Serialize)]
pub struct TaskCreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: Task,
}
