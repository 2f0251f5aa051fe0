//! In-memory task store for unit testing.
//!
//! Lets handler tests run without touching the filesystem, and can be told
//! to fail so storage error paths are reachable.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::TaskStore;
use crate::error::StoreError;
use crate::task::Task;

/// Process-local task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tasks: Arc<Mutex<Vec<Task>>>,
    fail: Arc<AtomicBool>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `tasks`.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(tasks)),
            ..Self::default()
        }
    }

    /// Make every subsequent load and save fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current contents, bypassing the failure switch.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store set to fail".to_string()));
        }
        Ok(())
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        self.check()?;
        let tasks = self
            .tasks
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(tasks.clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        self.check()?;
        let mut stored = self
            .tasks
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        *stored = tasks.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_contents() {
        let store = InMemoryStore::new();
        let tasks = vec![Task { id: 1, title: "a".into(), completed: false }];

        store.save(&tasks).unwrap();

        assert_eq!(store.load().unwrap(), tasks);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn failing_store_errors_without_mutation() {
        let store = InMemoryStore::with_tasks(vec![Task { id: 1, title: "a".into(), completed: false }]);
        store.set_failing(true);

        assert!(store.load().is_err());
        assert!(store.save(&[]).is_err());
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.save_count(), 0);
    }
}
