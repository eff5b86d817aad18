//! In-memory CRUD stores for tasks and categories.
//!
//! Both stores implement the same contract: `list` returns defensive
//! copies, `get`/`update`/`delete` fail with a not-found error for absent
//! identifiers, `create` assigns identifiers as `max + 1`, and `update`
//! shallow-merges the patch onto the stored record. Every operation is
//! async and pauses per the injected latency profile before touching the
//! collection, so the lock is never held across an await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::latency::LatencyProfile;
use crate::model::{
    Category, CategoryDraft, CategoryPatch, Task, TaskDraft, TaskId, TaskPatch,
};

const DEFAULT_CATEGORY_COLOR: &str = "from-slate-500 to-slate-600";
const DEFAULT_CATEGORY_ICON: &str = "Tag";

/// CRUD boundary for the task collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>>;
    async fn get(&self, id: TaskId) -> Result<Task>;
    async fn create(&self, draft: TaskDraft) -> Result<Task>;
    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task>;
    async fn delete(&self, id: TaskId) -> Result<()>;
}

/// CRUD boundary for the category collection.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>>;
    async fn get(&self, id: &str) -> Result<Category>;
    async fn create(&self, draft: CategoryDraft) -> Result<Category>;
    async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Category>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Task store backed by a plain in-memory collection.
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
    latency: LatencyProfile,
    available: AtomicBool,
}

impl MemoryTaskStore {
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_seed(Vec::new(), latency)
    }

    pub fn with_seed(tasks: Vec<Task>, latency: LatencyProfile) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            latency,
            available: AtomicBool::new(true),
        }
    }

    /// Simulate a backend outage: while unavailable every operation fails
    /// with `StoreUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(Error::StoreUnavailable("task store".to_string()))
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Task>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>> {
        LatencyProfile::pause(self.latency.list).await;
        self.check_available()?;
        Ok(self.lock().clone())
    }

    async fn get(&self, id: TaskId) -> Result<Task> {
        LatencyProfile::pause(self.latency.get).await;
        self.check_available()?;
        let tasks = self.lock();
        tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or(Error::TaskNotFound(id))
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task> {
        LatencyProfile::pause(self.latency.create).await;
        self.check_available()?;
        let mut tasks = self.lock();
        let task = Task {
            id: tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1,
            title: draft.title,
            category: draft.category,
            due_date: draft.due_date,
            completed: false,
            created_at: Utc::now(),
            order: tasks.iter().map(|task| task.order).max().unwrap_or(0) + 1,
        };
        tasks.push(task.clone());
        debug!(id = task.id, order = task.order, "task created");
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        LatencyProfile::pause(self.latency.update).await;
        self.check_available()?;
        let mut tasks = self.lock();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        patch.apply(task);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<()> {
        LatencyProfile::pause(self.latency.delete).await;
        self.check_available()?;
        let mut tasks = self.lock();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(Error::TaskNotFound(id));
        }
        debug!(id, "task deleted");
        Ok(())
    }
}

/// Category store backed by a plain in-memory collection.
pub struct MemoryCategoryStore {
    categories: Mutex<Vec<Category>>,
    latency: LatencyProfile,
    available: AtomicBool,
}

impl MemoryCategoryStore {
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_seed(Vec::new(), latency)
    }

    pub fn with_seed(categories: Vec<Category>, latency: LatencyProfile) -> Self {
        Self {
            categories: Mutex::new(categories),
            latency,
            available: AtomicBool::new(true),
        }
    }

    /// Simulate a backend outage: while unavailable every operation fails
    /// with `StoreUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(Error::StoreUnavailable("category store".to_string()))
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Category>> {
        self.categories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn list(&self) -> Result<Vec<Category>> {
        LatencyProfile::pause(self.latency.list).await;
        self.check_available()?;
        Ok(self.lock().clone())
    }

    async fn get(&self, id: &str) -> Result<Category> {
        LatencyProfile::pause(self.latency.get).await;
        self.check_available()?;
        let categories = self.lock();
        categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))
    }

    async fn create(&self, draft: CategoryDraft) -> Result<Category> {
        LatencyProfile::pause(self.latency.create).await;
        self.check_available()?;
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Validation("category name must not be empty".to_string()));
        }
        let mut categories = self.lock();
        let id = draft.id.unwrap_or_else(|| slugify(&name));
        if categories.iter().any(|category| category.id == id) {
            return Err(Error::Validation(format!("category id already exists: {id}")));
        }
        if categories
            .iter()
            .any(|category| category.name.eq_ignore_ascii_case(&name))
        {
            return Err(Error::Validation(format!("category name already exists: {name}")));
        }
        let category = Category {
            id,
            name,
            color: draft
                .color
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            icon: draft
                .icon
                .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
        };
        categories.push(category.clone());
        debug!(id = %category.id, "category created");
        Ok(category)
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Category> {
        LatencyProfile::pause(self.latency.update).await;
        self.check_available()?;
        let mut categories = self.lock();
        let category = categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))?;
        patch.apply(category);
        Ok(category.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        LatencyProfile::pause(self.latency.delete).await;
        self.check_available()?;
        let mut categories = self.lock();
        let before = categories.len();
        categories.retain(|category| category.id != id);
        if categories.len() == before {
            return Err(Error::CategoryNotFound(id.to_string()));
        }
        debug!(id, "category deleted");
        Ok(())
    }
}

/// Derive a category id from its display name: lowercased, runs of
/// whitespace collapsed to a single `-`.
fn slugify(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("Deep  Work   Blocks"), "deep-work-blocks");
        assert_eq!(slugify("  Errands "), "errands");
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one_even_with_gaps() {
        let store = MemoryTaskStore::new(LatencyProfile::zero());
        let first = store.create(TaskDraft::titled("one")).await.unwrap();
        let second = store.create(TaskDraft::titled("two")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let third = store.create(TaskDraft::titled("three")).await.unwrap();
        assert_eq!(second.id, first.id + 1);
        assert_eq!(third.id, second.id + 1);
        assert_eq!(third.order, second.order + 1);
    }

    #[tokio::test]
    async fn list_returns_defensive_copies() {
        let store = MemoryTaskStore::new(LatencyProfile::zero());
        store.create(TaskDraft::titled("keep me")).await.unwrap();
        let mut listed = store.list().await.unwrap();
        listed[0].title = "mutated copy".to_string();
        listed.clear();
        let again = store.list().await.unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].title, "keep me");
    }

    #[tokio::test]
    async fn category_create_defaults_and_slug() {
        let store = MemoryCategoryStore::new(LatencyProfile::zero());
        let category = store
            .create(CategoryDraft {
                name: "Side Projects".to_string(),
                ..CategoryDraft::default()
            })
            .await
            .unwrap();
        assert_eq!(category.id, "side-projects");
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(category.icon, DEFAULT_CATEGORY_ICON);
    }

    #[tokio::test]
    async fn category_create_rejects_duplicate_name() {
        let store = MemoryCategoryStore::new(LatencyProfile::zero());
        store
            .create(CategoryDraft {
                name: "Work".to_string(),
                ..CategoryDraft::default()
            })
            .await
            .unwrap();
        let duplicate = store
            .create(CategoryDraft {
                id: Some("work-2".to_string()),
                name: "work".to_string(),
                ..CategoryDraft::default()
            })
            .await;
        assert!(matches!(duplicate, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn outage_fails_every_operation() {
        let store = MemoryTaskStore::new(LatencyProfile::zero());
        store.set_available(false);
        assert!(matches!(
            store.list().await,
            Err(Error::StoreUnavailable(_))
        ));
        assert!(matches!(
            store.create(TaskDraft::titled("nope")).await,
            Err(Error::StoreUnavailable(_))
        ));
        store.set_available(true);
        assert!(store.list().await.unwrap().is_empty());
    }
}
