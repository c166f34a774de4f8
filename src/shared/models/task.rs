use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task_status::TaskStatus;

/// A task record. Exists in full or not at all; `task_id` and `created_at`
/// never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The mutable slice of a task, stamped with the update time. Doubles as the
/// 200 body of a successful update (the updated attributes only).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Apply an update, leaving `task_id` and `created_at` untouched.
    pub fn apply(&mut self, update: &TaskUpdate) {
        self.title = update.title.clone();
        self.description = update.description.clone();
        self.status = update.status;
        self.updated_at = Some(update.updated_at);
    }
}
