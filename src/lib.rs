//! # taskd
//!
//! A small HTTP/JSON service for task records (title, description, due date,
//! status) stored in a local SQLite file.
//!
//! ## Endpoints
//!
//! - `POST /tasks`: create a task
//! - `GET /tasks/:id`: fetch one task
//! - `PUT /tasks/:id`: overwrite a task
//! - `DELETE /tasks/:id`: remove a task
//! - `GET /tasks`: list every task, in no particular order
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use taskd::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::parse().menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
