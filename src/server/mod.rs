//! HTTP front end.
//!
//! Binds the five `/tasks` routes to their handlers and runs the axum server
//! until Ctrl-C. The store handle is passed in as router state; handlers never
//! reach for global state.

pub mod error;
pub mod handlers;

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info};
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router over the given store.
pub fn router(tasks: Tasks) -> Router {
    Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/tasks/:id",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(tasks)
}

/// Binds `addr` and serves until a shutdown signal arrives.
pub async fn serve(addr: SocketAddr, tasks: Tasks) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| Message::ServerBindFailed(addr.to_string()))?;
    msg_info!(Message::ServerStarting(listener.local_addr()?.to_string()));

    axum::serve(listener, router(tasks))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    msg_info!(Message::ServerStopped);

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => msg_info!(Message::ShutdownSignalReceived),
        Err(e) => {
            // Without a signal handler the server simply runs until killed.
            msg_error!(Message::ShutdownSignalFailed(e.to_string()));
            std::future::pending::<()>().await;
        }
    }
}
