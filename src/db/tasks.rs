//! Storage for task records.
//!
//! `Tasks` owns the `tasks` table schema and wraps the process-wide SQLite
//! connection. The handle is cheap to clone; all clones share one connection
//! behind a mutex, so statements from concurrent requests run one at a time.
//!
//! Update and delete report [`StoreError::NotFound`] when no row carries the
//! requested id, rather than silently succeeding on zero affected rows.

use super::db::Db;
use crate::libs::task::{Task, TaskInput};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// SQL schema for the tasks table.
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    description TEXT,
    due_date TEXT,
    status TEXT
);";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, status) VALUES (?1, ?2, ?3, ?4)";
/// No ORDER BY: list order is whatever SQLite yields and is not stable.
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, status FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, due_date, status FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?1, description = ?2, due_date = ?3, status = ?4 WHERE id = ?5";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Errors produced by task storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row has the requested id.
    #[error("task {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Shared handle to the `tasks` table.
#[derive(Clone)]
pub struct Tasks {
    conn: Arc<Mutex<Connection>>,
}

impl Tasks {
    /// Ensures the `tasks` table exists and takes ownership of the connection.
    ///
    /// Called once at startup. A failure here means the service cannot run;
    /// the caller decides whether to abort.
    pub fn init(db: Db) -> Result<Tasks> {
        db.conn.execute(SCHEMA_TASKS, [])?;
        debug!("tasks schema ready");

        Ok(Tasks {
            conn: Arc::new(Mutex::new(db.conn)),
        })
    }

    /// Inserts a new row and returns the id SQLite assigned to it.
    pub fn insert(&self, task: &TaskInput) -> Result<i64> {
        let conn = self.conn.lock();
        conn.execute(INSERT_TASK, params![task.title, task.description, task.due_date, task.status])?;

        Ok(conn.last_insert_rowid())
    }

    /// Fetches one task by id.
    pub fn get_by_id(&self, id: i64) -> Result<Task> {
        let conn = self.conn.lock();
        conn.query_row(SELECT_TASK_BY_ID, params![id], map_row)
            .optional()?
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrites all four text fields of the row with the given id.
    pub fn update(&self, id: i64, task: &TaskInput) -> Result<()> {
        let affected = self
            .conn
            .lock()
            .execute(UPDATE_TASK, params![task.title, task.description, task.due_date, task.status, id])?;

        match affected {
            0 => Err(StoreError::NotFound(id)),
            _ => Ok(()),
        }
    }

    /// Removes the row with the given id.
    pub fn delete(&self, id: i64) -> Result<()> {
        let affected = self.conn.lock().execute(DELETE_TASK, params![id])?;

        match affected {
            0 => Err(StoreError::NotFound(id)),
            _ => Ok(()),
        }
    }

    /// Returns every task in storage order, which callers must not rely on.
    pub fn fetch_all(&self) -> Result<Vec<Task>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], map_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn count(&self) -> Result<i64> {
        let count = self.conn.lock().query_row(COUNT_TASKS, [], |row| row.get(0))?;

        Ok(count)
    }
}

/// NULL text columns (rows written by other tools) read back as empty strings.
fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        due_date: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        status: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
