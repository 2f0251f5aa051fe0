//! Task types.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, StoreError};

/// A persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation time in milliseconds since the Unix epoch.
    pub id: i64,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Completion flag. Always false at creation.
    pub completed: bool,
}

/// A validated title waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
}

impl NewTask {
    /// Validate a raw title from a create request.
    pub fn parse(title: Option<&str>) -> Result<Self, ApiError> {
        match title.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Ok(Self {
                title: trimmed.to_string(),
            }),
            _ => Err(ApiError::Validation("Title is required".to_string())),
        }
    }

    /// Build the task record.
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            completed: false,
        }
    }
}

/// Task id taken from a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskId {
    /// Leading integer of the segment.
    Valid(i64),
    /// Anything else. Matches no task.
    Unparsable,
}

impl TaskId {
    /// Parse a path segment.
    ///
    /// Reads an optional sign and the leading run of digits, ignoring
    /// anything after it, so `"12abc"` is 12. No digits or an out-of-range
    /// value is `Unparsable`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['+', '-']));
        let digits_len = trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if digits_len == 0 {
            return Self::Unparsable;
        }

        trimmed[..sign_len + digits_len]
            .parse::<i64>()
            .map(Self::Valid)
            .unwrap_or(Self::Unparsable)
    }

    /// Whether this id refers to the given task.
    pub fn matches(&self, task: &Task) -> bool {
        matches!(self, Self::Valid(id) if *id == task.id)
    }
}

/// First task with the given id. Linear scan.
pub fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|task| id.matches(task))
}

/// Id for a new task created at `now_ms`.
///
/// Falls forward to one past the largest existing id when the clock has not
/// advanced past it. Fails when that would pass `i64::MAX`.
pub fn next_task_id(tasks: &[Task], now_ms: i64) -> Result<i64, StoreError> {
    match tasks.iter().map(|task| task.id).max() {
        Some(max) if now_ms <= max => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
        _ => Ok(now_ms),
    }
}
