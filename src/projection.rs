//! Derived read-only views of the canonical snapshot.
//!
//! Everything here is a pure function of its inputs: the same tasks,
//! categories, filter, and query always produce the same list and counts.
//! Nothing mutates the snapshot.
//!
//! Category association uses the category id as the join key everywhere.
//! A task whose ref points at a category that no longer exists only shows
//! under the "all" filter and never contributes to a per-category count.

use std::collections::{HashMap, HashSet};

use crate::model::{Category, CategoryId, Task};

/// Category selector for a projection: everything, or one category by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveCategory {
    #[default]
    All,
    Category(CategoryId),
}

impl ActiveCategory {
    pub fn category(id: impl Into<CategoryId>) -> Self {
        ActiveCategory::Category(id.into())
    }
}

/// Incomplete-task counts over the unfiltered snapshot. The search query
/// never feeds into these, so badge counts stay stable while the user
/// types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    /// One entry per category present in the category snapshot.
    pub by_category: HashMap<CategoryId, usize>,
}

/// A filtered, sorted task list plus the global counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub tasks: Vec<Task>,
    pub counts: TaskCounts,
}

/// Project the canonical collections through the active category filter
/// and search query.
///
/// Sort is two-key: incomplete tasks before completed ones, then `order`
/// descending. `order` is unique so the ordering is total.
pub fn project(
    tasks: &[Task],
    categories: &[Category],
    active: &ActiveCategory,
    query: &str,
) -> Projection {
    let known: HashSet<&str> = categories.iter().map(|category| category.id.as_str()).collect();

    let mut filtered: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_category(task, active, &known))
        .cloned()
        .collect();

    let query_norm = normalize_text(query);
    if !query_norm.is_empty() {
        filtered.retain(|task| normalize_text(&task.title).contains(&query_norm));
    }

    filtered.sort_by(|left, right| {
        left.completed
            .cmp(&right.completed)
            .then_with(|| right.order.cmp(&left.order))
    });

    Projection {
        tasks: filtered,
        counts: count_incomplete(tasks, categories),
    }
}

fn normalize_text(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

fn matches_category(task: &Task, active: &ActiveCategory, known: &HashSet<&str>) -> bool {
    match active {
        ActiveCategory::All => true,
        ActiveCategory::Category(id) => task
            .category
            .as_deref()
            .map(|category| category == id && known.contains(category))
            .unwrap_or(false),
    }
}

fn count_incomplete(tasks: &[Task], categories: &[Category]) -> TaskCounts {
    let mut counts = TaskCounts {
        all: tasks.iter().filter(|task| !task.completed).count(),
        by_category: categories
            .iter()
            .map(|category| (category.id.clone(), 0))
            .collect(),
    };
    for task in tasks.iter().filter(|task| !task.completed) {
        if let Some(category) = task.category.as_deref() {
            if let Some(slot) = counts.by_category.get_mut(category) {
                *slot += 1;
            }
        }
    }
    counts
}
