//! Database layer for taskd.
//!
//! A single SQLite file holds a single `tasks` table. Every operation is one
//! parameterized, autocommit statement; nothing here opens a transaction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskd::db::{db::Db, tasks::Tasks};
//! use taskd::libs::task::TaskInput;
//!
//! let tasks = Tasks::init(Db::open("./task.db")?)?;
//! let id = tasks.insert(&TaskInput::new("Write docs", "", "2024-01-01", "open"))?;
//! let task = tasks.get_by_id(id)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Connection management.
pub mod db;

/// CRUD operations on the `tasks` table.
pub mod tasks;
