//! Logging macros that take [`Message`](super::Message) values.
//!
//! Each macro forwards to the matching `tracing` level, so output format and
//! filtering are controlled by the subscriber installed in `main`.
//!
//! ```rust
//! use taskd::{msg_info, msg_error};
//! use taskd::libs::messages::Message;
//!
//! msg_info!(Message::ServerStarting("0.0.0.0:8080".to_string()));
//! msg_error!(Message::TaskCreateFailed);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether verbose logging was requested through the environment.
///
/// True when either `TASKD_DEBUG` or `RUST_LOG` is set. Cached after the
/// first call.
/// Forces debug mode on or off, e.g. from a `--verbose` flag.
///
/// Only takes effect before the first [`is_debug_mode`] call; returns whether
/// the value was applied.
#[doc(hidden)]
pub fn set_debug_mode(enabled: bool) -> bool {
    DEBUG_MODE.set(enabled).is_ok()
}

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKD_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        tracing::info!("{}", $msg)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        tracing::error!("{}", $msg)
    };
}

/// Debug-level message, only evaluated when [`is_debug_mode`] is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("{}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` carrying the message text.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}
