use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UnknownExercise,
    MismatchedUpdate,
    InvalidDate,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

use crate::{
    domain::EntryStoreError, repositories::RepositoryError, utils::date_format::DateFormatError,
    views::ViewSessionError,
};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                Self::internal("storage operation failed")
            }
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
        }
    }
}

impl From<EntryStoreError> for ApiError {
    fn from(err: EntryStoreError) -> Self {
        match err {
            EntryStoreError::NotFound(_) => Self::not_found(err.to_string()),
            EntryStoreError::MismatchedUpdate(_) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::MismatchedUpdate)
            }
            EntryStoreError::Repository(e) => e.into(),
        }
    }
}

impl From<DateFormatError> for ApiError {
    fn from(err: DateFormatError) -> Self {
        Self::bad_request(err.to_string()).with_code(ErrorCode::InvalidDate)
    }
}

impl From<ViewSessionError> for ApiError {
    fn from(err: ViewSessionError) -> Self {
        match err {
            ViewSessionError::Store(e) => e.into(),
            ViewSessionError::InvalidDate(e) => e.into(),
            ViewSessionError::MalformedIntent(e) => Self::bad_request(e.to_string()),
        }
    }
}
