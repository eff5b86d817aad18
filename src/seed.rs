//! Seed data for the in-memory stores.
//!
//! Mirrors the category pack the application ships with so a fresh
//! engine has something to show before the user creates anything.

use chrono::Utc;

use crate::model::{Category, Task};

pub fn default_categories() -> Vec<Category> {
    [
        ("work", "Work", "from-blue-500 to-blue-600", "Briefcase"),
        ("personal", "Personal", "from-purple-500 to-purple-600", "User"),
        (
            "shopping",
            "Shopping",
            "from-emerald-500 to-emerald-600",
            "ShoppingCart",
        ),
        ("health", "Health", "from-rose-500 to-rose-600", "Heart"),
    ]
    .into_iter()
    .map(|(id, name, color, icon)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// A handful of demo tasks referencing the default categories. Ids and
/// orders start at 1 and increase together, matching what the store
/// would have assigned.
pub fn demo_tasks() -> Vec<Task> {
    let now = Utc::now();
    [
        ("Review quarterly goals", Some("work"), false),
        ("Book dentist appointment", Some("health"), false),
        ("Buy milk and eggs", Some("shopping"), true),
        ("Call grandma", Some("personal"), false),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (title, category, completed))| Task {
        id: index as u64 + 1,
        title: title.to_string(),
        category: category.map(str::to_string),
        due_date: None,
        completed,
        created_at: now,
        order: index as u64 + 1,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tasks_reference_default_categories() {
        let categories = default_categories();
        for task in demo_tasks() {
            if let Some(category) = &task.category {
                assert!(
                    categories.iter().any(|c| &c.id == category),
                    "unknown category {category}"
                );
            }
        }
    }

    #[test]
    fn demo_orders_are_unique_and_increasing() {
        let tasks = demo_tasks();
        for pair in tasks.windows(2) {
            assert!(pair[1].order > pair[0].order);
            assert!(pair[1].id > pair[0].id);
        }
    }
}
