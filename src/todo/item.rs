//! The todo record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One task in the todo list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque unique token. A v4 UUID: collisions are not eliminated,
    /// only made statistically unlikely.
    pub id: String,
    /// Non-empty trimmed title.
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a fresh, uncompleted item. The caller is responsible for
    /// trimming and rejecting empty titles.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}
