//! Request handlers for the `/tasks` routes.
//!
//! Each handler runs exactly one store operation. Store calls are synchronous
//! SQLite work, so they are moved onto tokio's blocking pool.
//!
//! | Route              | Success                     | Failure                  |
//! |--------------------|-----------------------------|--------------------------|
//! | `POST /tasks`      | 201 created task            | 400 bad body, 500        |
//! | `GET /tasks/:id`   | 200 task                    | 404, 500                 |
//! | `PUT /tasks/:id`   | 200 submitted task          | 400 bad body, 404        |
//! | `DELETE /tasks/:id`| 200 `{"message": ...}`      | 404                      |
//! | `GET /tasks`       | 200 array, possibly empty   | 500                      |

use super::error::ApiError;
use crate::db::tasks::{StoreError, Tasks};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskInput};
use crate::{msg_debug, msg_error};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

const NOT_AN_OBJECT: &str = "request body must be a JSON object";

/// Confirmation body returned by delete.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// POST /tasks
pub async fn create_task(State(tasks): State<Tasks>, body: Bytes) -> Result<(StatusCode, Json<Task>), ApiError> {
    let input = parse_body(&body)?;

    let stored = input.clone();
    let id = blocking(&tasks, move |tasks| tasks.insert(&stored)).await.map_err(|e| {
        msg_error!(Message::DbQueryFailed(e.to_string()));
        ApiError::Internal(Message::TaskCreateFailed)
    })?;
    msg_debug!(Message::TaskCreated(id));

    Ok((StatusCode::CREATED, Json(input.with_id(id))))
}

/// GET /tasks/:id
pub async fn get_task(State(tasks): State<Tasks>, Path(id): Path<String>) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&id)?;

    let task = blocking(&tasks, move |tasks| tasks.get_by_id(id)).await.map_err(|e| match e {
        StoreError::NotFound(_) => ApiError::NotFound,
        StoreError::Sqlite(e) => {
            msg_error!(Message::DbQueryFailed(e.to_string()));
            ApiError::Internal(Message::TaskFetchFailed)
        }
    })?;

    Ok(Json(task))
}

/// PUT /tasks/:id
///
/// Responds with the submitted fields rather than re-reading the row.
pub async fn update_task(
    State(tasks): State<Tasks>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Task>, ApiError> {
    let input = parse_body(&body)?;
    let id = parse_id(&id)?;

    let stored = input.clone();
    blocking(&tasks, move |tasks| tasks.update(id, &stored))
        .await
        .map_err(not_found)?;
    msg_debug!(Message::TaskUpdated(id));

    Ok(Json(input.with_id(id)))
}

/// DELETE /tasks/:id
pub async fn delete_task(State(tasks): State<Tasks>, Path(id): Path<String>) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(&id)?;

    blocking(&tasks, move |tasks| tasks.delete(id)).await.map_err(not_found)?;
    msg_debug!(Message::TaskDeletedWithId(id));

    Ok(Json(MessageBody {
        message: Message::TaskDeleted.to_string(),
    }))
}

/// GET /tasks
///
/// Order is whatever SQLite returns and may change between calls.
pub async fn list_tasks(State(tasks): State<Tasks>) -> Result<Json<Vec<Task>>, ApiError> {
    let all = blocking(&tasks, |tasks| tasks.fetch_all()).await.map_err(|e| {
        msg_error!(Message::DbQueryFailed(e.to_string()));
        ApiError::Internal(Message::TasksFetchFailed)
    })?;
    msg_debug!(Message::TasksListed(all.len()));

    Ok(Json(all))
}

/// Parses a create/update body. Any serde error becomes a 400 carrying its text.
///
/// The body must be a JSON object. Serde would otherwise fill `TaskInput`
/// positionally from an array.
fn parse_body(body: &[u8]) -> Result<TaskInput, ApiError> {
    let parsed: Result<TaskInput, String> = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => serde_json::from_value(Value::Object(map)).map_err(|e| e.to_string()),
        Ok(_) => Err(NOT_AN_OBJECT.to_string()),
        Err(e) => Err(e.to_string()),
    };

    parsed.map_err(|e| {
        msg_debug!(Message::InvalidTaskBody(e.clone()));
        ApiError::BadRequest(e)
    })
}

/// Ids that are not integers cannot match any row.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// Update and delete answer 404 for both a missing row and a storage failure.
fn not_found(e: StoreError) -> ApiError {
    if let StoreError::Sqlite(e) = &e {
        msg_error!(Message::DbQueryFailed(e.to_string()));
    }
    ApiError::NotFound
}

/// Runs a store operation on the blocking pool.
///
/// A panic inside the operation is resumed on this task, where the
/// catch-panic layer turns it into a 500.
async fn blocking<T, F>(tasks: &Tasks, op: F) -> Result<T, StoreError>
where
    F: FnOnce(&Tasks) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let tasks = tasks.clone();
    match tokio::task::spawn_blocking(move || op(&tasks)).await {
        Ok(result) => result,
        Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
    }
}
