//! Task persistence.
//!
//! The whole collection is loaded and saved as one unit:
//! - [`JsonFileStore`]: a single JSON file on disk
//! - [`InMemoryStore`]: a process-local fake for tests

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::error::StoreError;
use crate::task::Task;

/// Whole-collection load/save contract.
pub trait TaskStore: Send + Sync {
    /// Read every task, in insertion order.
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    /// Replace the persisted collection with `tasks`.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
