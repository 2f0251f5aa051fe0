//! Completion-status filter for task listings.

use serde::Serialize;
use strum::{Display, EnumString};

use super::types::Task;
use crate::error::ApiError;

/// Query-time predicate on `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, Default)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskFilter {
    /// Tasks with `completed == true`.
    Completed,
    /// Tasks with `completed == false`.
    Pending,
    /// Every task.
    #[default]
    All,
}

impl TaskFilter {
    /// Parse the `filter` query value. Absent or empty means `All`.
    pub fn parse(raw: Option<&str>) -> Result<Self, ApiError> {
        match raw {
            None | Some("") => Ok(Self::All),
            Some(value) => value.parse().map_err(|_| {
                ApiError::Validation(
                    "Invalid filter value. Use 'completed', 'pending', or 'all'".to_string(),
                )
            }),
        }
    }

    /// Check whether a task passes the filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
            Self::All => true,
        }
    }

    /// Keep matching tasks, preserving order.
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        match self {
            Self::All => tasks,
            _ => tasks.into_iter().filter(|task| self.matches(task)).collect(),
        }
    }
}
