//! Display implementation for taskd messages.
//!
//! All message text is defined here so that the HTTP error bodies and the log
//! lines stay consistent. The task texts are part of the API: clients see
//! them in `{"error": ...}` and `{"message": ...}` bodies.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskDeletedWithId(id) => format!("Task {} deleted", id),
            Message::TaskNotFound => "Task not found".to_string(),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskFetchFailed => "Failed to retrieve task".to_string(),
            Message::TasksFetchFailed => "Failed to retrieve tasks".to_string(),
            Message::TasksListed(count) => format!("Listed {} tasks", count),
            Message::InvalidTaskBody(error) => format!("Rejected task body: {}", error),

            // === DATABASE MESSAGES ===
            Message::DbOpened(path) => format!("Database opened at {}", path),
            Message::DbQueryFailed(error) => format!("Database query failed: {}", error),
            Message::DbInitFailed(error) => format!("Failed to initialize database: {}", error),
            Message::DbSchemaReady(count) => format!("Tasks table ready ({} rows)", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigFileNotFound(path) => format!("No configuration file at {}, using defaults", path),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),

            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Listening on http://{}", addr),
            Message::ServerBindFailed(addr) => format!("Failed to bind {}", addr),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ShutdownSignalReceived => "Shutdown signal received, finishing in-flight requests".to_string(),
            Message::ShutdownSignalFailed(error) => format!("Unable to listen for shutdown signal: {}", error),
        };
        write!(f, "{}", text)
    }
}
