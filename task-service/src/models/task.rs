/// Task entity and its inputs
///
/// A task belongs to one user (by id) and moves through three statuses.
/// There is no enforced transition order; any status may be patched to any
/// other.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('PENDING', 'IN_PROGRESS', 'COMPLETED');
///
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     title VARCHAR(255) NOT NULL,
///     description TEXT,
///     user_id BIGINT NOT NULL,
///     status task_status NOT NULL DEFAULT 'PENDING',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```
/// use task_service::models::task::{CreateTask, TaskStatus, UpdateTask};
///
/// let new_task = CreateTask {
///     title: "Write report".to_string(),
///     description: Some("Quarterly numbers".to_string()),
///     user_id: 1,
///     status: TaskStatus::default(),
/// };
/// assert_eq!(new_task.status, TaskStatus::Pending);
///
/// let patch = UpdateTask {
///     status: Some(TaskStatus::InProgress),
///     ..Default::default()
/// };
/// assert!(patch.title.is_none());
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Task progress
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "task_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started; every new task begins here
    #[default]
    Pending,

    /// Being worked on
    InProgress,

    /// Done
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(TaskStatus::Pending),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "COMPLETED" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

/// A persisted task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Assigned by storage on insert, never changed afterwards
    pub id: i64,

    pub title: String,

    pub description: Option<String>,

    /// Owning user; fixed at creation
    pub user_id: i64,

    pub status: TaskStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task
///
/// `status` defaults to `PENDING` when omitted from a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub user_id: i64,

    #[serde(default)]
    pub status: TaskStatus,
}

/// Partial update for a task
///
/// Only fields that are present and, for strings, not blank are applied.
/// The owning user cannot be changed; a `userId` in a request body is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub status: Option<TaskStatus>,
}

impl UpdateTask {
    /// True when applying this patch would change nothing
    pub fn is_empty(&self) -> bool {
        non_blank(self.title.as_deref()).is_none()
            && non_blank(self.description.as_deref()).is_none()
            && self.status.is_none()
    }
}

impl Task {
    /// Merges `patch` into this task
    ///
    /// Blank strings count as absent, so a description cannot be cleared
    /// through a patch. `id`, `user_id` and the timestamps are untouched;
    /// storage refreshes `updated_at` on save.
    pub fn apply_update(&mut self, patch: UpdateTask) {
        if let Some(title) = patch.title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        if let Some(description) = patch.description.filter(|d| !d.trim().is_empty()) {
            self.description = Some(description);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
