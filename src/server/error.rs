//! Errors returned to HTTP clients.
//!
//! Every failure is rendered as `{"error": "<text>"}` with the matching status.

use crate::libs::messages::Message;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was not a valid task document. Carries the parser's message.
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", Message::TaskNotFound)]
    NotFound,

    /// Storage failed. Only the generic message reaches the client.
    #[error("{0}")]
    Internal(Message),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
