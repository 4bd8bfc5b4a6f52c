//! Task Entity
//!
//! Represents a task record as served by the remote API, plus the
//! creation and partial-update payloads the client sends back.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Task lifecycle status
///
/// Exactly one holds at a time; any state is reachable from any other
/// via an explicit update. Variant names are the wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Next status in the fixed cycle Todo -> InProgress -> Done -> Todo
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// A task record (server-assigned id and timestamps)
///
/// `updated_at` stays null until the record is first modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the server
    pub id: u32,
    /// Task title
    pub title: String,
    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Owning user id
    pub owner_id: String,
    /// Creation time (server clock)
    pub created_at: NaiveDateTime,
    /// Last modification time, if any
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload for creating a new task
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub owner_id: String,
}

impl TaskDraft {
    /// New draft with default status and no description
    pub fn new(title: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            owner_id: owner_id.into(),
        }
    }
}

/// Partial-field update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Patch that only changes the status
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Apply the given fields to a task in place
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}
