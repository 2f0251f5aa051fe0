//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::responses::{
    ErrorBody, ServiceDescriptor, TaskCreatedResponse, TaskListResponse, TaskResponse,
};
use crate::error::ApiError;
use crate::metrics::{self, RequestTimer};
use crate::store::TaskStore;
use crate::task::{find_task, next_task_id, NewTask, TaskFilter, TaskId};
use crate::utils::now_millis;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task persistence.
    pub store: Arc<dyn TaskStore>,
    /// Serializes load-append-save so concurrent creates don't lose updates.
    write_lock: Arc<Mutex<()>>,
    /// Prometheus render handle, when a recorder is installed.
    metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state over a store.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Query parameters of `GET /tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// `completed`, `pending` or `all`.
    pub filter: Option<String>,
}

/// Body of `POST /tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateTaskRequest {
    /// Parse a create body the way a JSON body parser would see it.
    ///
    /// A missing body, or one not sent as `application/json`, reads as `{}`.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, ApiError> {
        let is_json = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim_start().to_ascii_lowercase().starts_with("application/json"))
            .unwrap_or(false);

        if !is_json || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| {
            debug!(error = %e, "Rejected create body");
            ApiError::Validation("Invalid request body".to_string())
        })
    }
}

/// Health check handler - static service descriptor.
pub async fn health() -> impl IntoResponse {
    Json(ServiceDescriptor::default())
}

/// List tasks, optionally filtered by completion status.
pub async fn list_tasks(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<TaskListResponse>, ApiError> {
    let _timer = RequestTimer::new("list_tasks");

    let Query(params) = params.map_err(|rejection| {
        debug!(%rejection, "Rejected list query");
        ApiError::Validation(
            "Invalid filter value. Use 'completed', 'pending', or 'all'".to_string(),
        )
    })?;
    let filter = TaskFilter::parse(params.filter.as_deref())?;

    let tasks = state
        .store
        .load()
        .map_err(|e| ApiError::storage("Error reading tasks", e))?;

    Ok(Json(TaskListResponse::new(filter, filter.apply(tasks))))
}

/// Get a single task by id.
pub async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    let _timer = RequestTimer::new("get_task");

    let tasks = state
        .store
        .load()
        .map_err(|e| ApiError::storage("Error retrieving task", e))?;

    let task = find_task(&tasks, TaskId::parse(&raw_id))
        .cloned()
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(TaskResponse {
        success: true,
        data: task,
    }))
}

/// Create a task from `{title}`.
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<TaskCreatedResponse>), ApiError> {
    let _timer = RequestTimer::new("create_task");

    let request = CreateTaskRequest::from_body(&headers, &body)?;
    let new_task = NewTask::parse(request.title.as_deref())?;

    let _guard = state.write_lock.lock().await;

    let mut tasks = state
        .store
        .load()
        .map_err(|e| ApiError::storage("Error saving task", e))?;

    let id = next_task_id(&tasks, now_millis())
        .map_err(|e| ApiError::storage("Error saving task", e))?;
    let task = new_task.into_task(id);
    tasks.push(task.clone());

    state
        .store
        .save(&tasks)
        .map_err(|e| ApiError::storage("Error saving task", e))?;

    metrics::inc_tasks_created();
    info!(id = task.id, title = %task.title, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(TaskCreatedResponse {
            success: true,
            message: "Task added successfully",
            data: task,
        }),
    ))
}

/// Prometheus exposition, or 404 when no recorder is installed.
pub async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Metrics are not enabled")),
        )
            .into_response(),
    }
}
