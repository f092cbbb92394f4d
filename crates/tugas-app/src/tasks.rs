//! Durable task store.
//!
//! JSON-file-backed CRUD over [`Task`]: list ordered by deadline ascending,
//! create, update-by-id, delete-by-id. Every mutation rewrites the file under
//! an exclusive lock. Drafts are validated by the caller before they reach
//! this store; a store method never sees an invalid task.

use std::path::{Path, PathBuf};

use fs2::FileExt;

use tugas_core::prelude::*;
use tugas_core::Task;

/// Well-known task file name under the data directory.
pub const TASKS_FILENAME: &str = "tasks.json";

/// JSON-file-backed task store.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Load the store from the conventional file under `data_dir`.
    ///
    /// An absent file is an empty store; an unreadable file degrades to an
    /// empty store with a warning rather than refusing to start.
    pub fn load(data_dir: &Path) -> Self {
        Self::load_path(data_dir.join(TASKS_FILENAME))
    }

    /// Load the store from an explicit path.
    pub fn load_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks: Vec<Task> = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                Vec::new()
            }
        };

        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        debug!("Loaded {} tasks from {:?}", tasks.len(), path);
        Self {
            path,
            tasks,
            next_id,
        }
    }

    /// Tasks ordered by deadline ascending, ties broken by id.
    pub fn list(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|t| (t.deadline, t.id));
        tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The id the next created task will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Insert a new task, assigning it the next id. Returns the assigned id.
    ///
    /// A failed write rolls the insertion back: the store only commits state
    /// it has persisted, so a retry after an error cannot duplicate the task.
    pub fn create(&mut self, mut task: Task) -> Result<u64> {
        let id = self.next_id;
        task.id = id;
        self.tasks.push(task);
        if let Err(e) = self.persist() {
            self.tasks.pop();
            return Err(e);
        }
        self.next_id += 1;
        Ok(id)
    }

    /// Replace the fields of the task with `id`. Rolls back on a failed write.
    pub fn update(&mut self, id: u64, mut task: Task) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound { id })?;
        task.id = id;
        let previous = std::mem::replace(&mut self.tasks[index], task);
        if let Err(e) = self.persist() {
            self.tasks[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Delete the task with `id`. Rolls back on a failed write.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound { id })?;
        let removed = self.tasks.remove(index);
        if let Err(e) = self.persist() {
            self.tasks.insert(index, removed);
            return Err(e);
        }
        Ok(())
    }

    /// Rewrite the task file under an exclusive lock.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::store(format!("Failed to create data dir: {e}")))?;
        }

        let content = serde_json::to_string_pretty(&self.tasks)?;

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::store(format!("Failed to open {:?}: {e}", self.path)))?;

        file.lock_exclusive()
            .map_err(|e| Error::store(format!("Failed to lock {:?}: {e}", self.path)))?;

        use std::io::Write;
        let mut file = file;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::store(format!("Failed to write {:?}: {e}", self.path)))?;
        file.flush()
            .map_err(|e| Error::store(format!("Failed to flush {:?}: {e}", self.path)))?;

        // Lock is released when the file handle drops.
        debug!("Saved {} tasks to {:?}", self.tasks.len(), self.path);
        Ok(())
    }
}
