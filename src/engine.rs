//! The reconciliation engine.
//!
//! Owns the canonical in-memory snapshot of tasks and categories and is
//! its sole writer. Mutations go through the backing stores first and the
//! snapshot only ever adopts store responses, so on any failure the last
//! published snapshot stays in place and readers never observe a
//! half-applied change.
//!
//! Concurrent mutations to different tasks proceed independently and land
//! in resolution order. There is no per-id queue: two concurrent updates
//! to the same task resolve last-response-wins. Known limitation, kept
//! deliberately simple.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Category, Task, TaskDraft, TaskId, TaskPatch};
use crate::store::{CategoryStore, TaskStore};

/// Immutable view of the canonical collections. Published as a whole and
/// never mutated afterwards; readers hold an `Arc` to a fixed snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Newest task first; the engine prepends on create.
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
}

/// Single source of truth for the task and category collections.
///
/// Constructed once at application start with its two stores and passed
/// by reference to consumers; there is no global instance.
pub struct Engine {
    tasks: Arc<dyn TaskStore>,
    categories: Arc<dyn CategoryStore>,
    state: RwLock<Arc<Snapshot>>,
}

impl Engine {
    pub fn new(tasks: Arc<dyn TaskStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            tasks,
            categories,
            state: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// Current canonical snapshot. Cheap; the returned snapshot never
    /// changes under the caller.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch both collections concurrently and swap them in together.
    /// On any failure the last-known-good snapshot stays published
    /// (possibly empty on first load).
    pub async fn load(&self) -> Result<Arc<Snapshot>> {
        let (tasks, categories) = tokio::join!(self.tasks.list(), self.categories.list());
        match (tasks, categories) {
            (Ok(tasks), Ok(categories)) => {
                debug!(
                    tasks = tasks.len(),
                    categories = categories.len(),
                    "collections loaded"
                );
                Ok(self.publish(Snapshot { tasks, categories }))
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(%err, "load failed, keeping previous snapshot");
                Err(err)
            }
        }
    }

    /// Validate and create a task, then prepend the store's record to the
    /// canonical list (newest first). Whitespace-only titles are rejected
    /// before any store round-trip.
    pub async fn add_task(&self, draft: TaskDraft) -> Result<Arc<Snapshot>> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        let task = self.tasks.create(TaskDraft { title, ..draft }).await?;
        debug!(id = task.id, "task added");
        Ok(self.mutate_tasks(move |tasks| tasks.insert(0, task)))
    }

    /// Flip a task's completed flag through the store and adopt the record
    /// the store returns, so the canonical copy matches backing-store
    /// truth even if the store transforms the update.
    pub async fn toggle_complete(&self, id: TaskId) -> Result<Arc<Snapshot>> {
        let current = self.snapshot();
        let task = current
            .tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let updated = self
            .tasks
            .update(id, TaskPatch::completed(!task.completed))
            .await?;
        debug!(id, completed = updated.completed, "task toggled");
        Ok(self.mutate_tasks(move |tasks| {
            if let Some(slot) = tasks.iter_mut().find(|task| task.id == id) {
                *slot = updated;
            }
        }))
    }

    /// Delete through the store, then drop the task from canonical state.
    /// A task already deleted by another caller surfaces the store's
    /// not-found error and leaves the snapshot untouched.
    pub async fn delete_task(&self, id: TaskId) -> Result<Arc<Snapshot>> {
        self.tasks.delete(id).await?;
        debug!(id, "task removed");
        Ok(self.mutate_tasks(move |tasks| tasks.retain(|task| task.id != id)))
    }

    fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot.clone();
        snapshot
    }

    /// Apply a resolved mutation against the then-current snapshot under
    /// the write lock, so each store response lands on the latest state.
    fn mutate_tasks(&self, apply: impl FnOnce(&mut Vec<Task>)) -> Arc<Snapshot> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = (**guard).clone();
        apply(&mut next.tasks);
        let next = Arc::new(next);
        *guard = next.clone();
        next
    }
}
