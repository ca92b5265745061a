//! Task model shared by the store and the HTTP layer.
//!
//! A task is an id plus four free-form text fields. Nothing here is parsed or
//! validated: `due_date` is kept as the client sent it and `status` is not
//! restricted to any set of values.

use serde::{Deserialize, Serialize};

/// A persisted task record.
///
/// The `id` is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: String,
}

/// The writable part of a task, as received in create and update bodies.
///
/// Missing fields default to empty strings. Unknown fields, including a
/// client-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: String,
}

impl TaskInput {
    pub fn new(title: &str, description: &str, due_date: &str, status: &str) -> Self {
        TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            due_date: due_date.to_string(),
            status: status.to_string(),
        }
    }

    /// Attaches a database id, producing the full record.
    pub fn with_id(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        }
    }
}

impl From<Task> for TaskInput {
    fn from(task: Task) -> Self {
        TaskInput {
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status,
        }
    }
}
