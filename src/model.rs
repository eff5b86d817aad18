//! Task and category records.
//!
//! Records serialize to the JSON shape the backing store speaks: tasks as
//! `{identifier, title, categoryRef, dueDate, completed, createdAt, order}`
//! and categories as `{identifier, name, color, icon}`. The engine and
//! projection layers only ever see these types; the wire names are a serde
//! concern.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task identifiers are monotonically assigned positive integers.
pub type TaskId = u64;

/// Category identifiers are opaque strings (slugs derived from the name).
pub type CategoryId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(rename = "identifier")]
    pub id: TaskId,
    pub title: String,
    /// Id of an existing category; `None` means uncategorized. A ref to a
    /// category that no longer exists is tolerated (see `projection`).
    #[serde(rename = "categoryRef", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Strictly increasing per creation, never reused. Stable recency key
    /// independent of wall-clock timestamps.
    pub order: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "identifier")]
    pub id: CategoryId,
    pub name: String,
    /// Presentation hint, opaque to the core.
    pub color: String,
    /// Presentation hint, opaque to the core.
    pub icon: String,
}

/// Fields a caller supplies when creating a task. Identifier, `order`,
/// `completed`, and `created_at` are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(rename = "categoryRef", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial task update. Fields left `None` are preserved by the store's
/// shallow merge; nullable fields carry a second `Option` layer so a patch
/// can clear them explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "categoryRef", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<CategoryId>>,
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that flips only the completed flag.
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

    /// Shallow merge onto an existing record: present fields overwrite,
    /// absent fields are preserved.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(due_date) = &self.due_date {
            task.due_date = *due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// Fields for creating a category. When `id` is absent the store derives a
/// slug from the name; color and icon fall back to neutral defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDraft {
    #[serde(rename = "identifier", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Partial category update, same shallow-merge semantics as `TaskPatch`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryPatch {
    pub fn apply(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
        if let Some(icon) = &self.icon {
            category.icon = icon.clone();
        }
    }
}
