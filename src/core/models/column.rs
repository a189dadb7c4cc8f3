use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder title given to a freshly created column.
pub const DEFAULT_COLUMN_TITLE: &str = "Enter column name";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_COLUMN_TITLE.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }
}
