use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder content given to a freshly created task.
pub const DEFAULT_TASK_CONTENT: &str = "Enter task content";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    /// Back-reference to the owning column, not ownership.
    pub column_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(column_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            column_id,
            content: DEFAULT_TASK_CONTENT.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
    }
}
