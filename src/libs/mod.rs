//! Shared building blocks: the task model, configuration and the message
//! catalogue used for logs and API error bodies.

pub mod config;
pub mod messages;
pub mod task;
