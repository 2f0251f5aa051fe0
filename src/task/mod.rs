//! Task records and the input parsing around them.
//!
//! This module handles:
//! - The persisted `Task` type
//! - Title and id parsing for incoming requests
//! - Completion-status filters

pub mod filter;
pub mod types;

pub use filter::TaskFilter;
pub use types::{find_task, next_task_id, NewTask, Task, TaskId};
