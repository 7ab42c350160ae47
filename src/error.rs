//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{category::CategoryId, question::QuestionId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required question field was missing, empty or falsy (e.g., a
    /// difficulty of zero).
    #[error("invalid question data")]
    InvalidQuestionData,

    /// An empty string was used as a category type.
    #[error("category type cannot be empty")]
    InvalidCategoryData,

    /// The request body, query string or path could not be parsed.
    ///
    /// Callers should pass in the rejection text from the extractor.
    #[error("could not parse request: {0}")]
    InvalidRequest(String),

    /// The search request did not include a search term.
    #[error("the search term is missing")]
    MissingSearchTerm,

    /// The category ID does not refer to a category in the store.
    #[error("the category {0} could not be found")]
    CategoryNotFound(CategoryId),

    /// The requested page lies beyond the last page of questions.
    #[error("page {0} is out of range")]
    InvalidPage(u64),

    /// Tried to delete a category that questions still refer to.
    #[error("the category {0} still has questions")]
    CategoryInUse(CategoryId),

    /// The store failed to save a new question.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("failed to save question: {0}")]
    CreateQuestionFailed(String),

    /// The store failed to save a new category.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("failed to save category: {0}")]
    CreateCategoryFailed(String),

    /// The store failed while deleting a question.
    #[error("failed to delete question {0}")]
    DeleteQuestionFailed(QuestionId),

    /// The store failed while deleting a category.
    #[error("failed to delete category {0}")]
    DeleteCategoryFailed(CategoryId),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A handler's response body could not be read back for logging.
    #[error("could not read response body: {0}")]
    ResponseBodyUnreadable(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason for the status code, e.g. "Bad Request".
    pub error: String,
    /// A human readable description of what went wrong.
    pub details: String,
}

impl Error {
    fn status_and_details(&self) -> (StatusCode, String) {
        match self {
            Error::InvalidQuestionData => (
                StatusCode::BAD_REQUEST,
                "Invalid question data.".to_owned(),
            ),
            Error::InvalidCategoryData => (
                StatusCode::BAD_REQUEST,
                "Invalid category data.".to_owned(),
            ),
            Error::InvalidRequest(reason) => {
                (StatusCode::BAD_REQUEST, format!("Invalid data: {reason}"))
            }
            Error::MissingSearchTerm => (
                StatusCode::BAD_REQUEST,
                "A search term is required.".to_owned(),
            ),
            Error::CategoryNotFound(_) => (
                StatusCode::BAD_REQUEST,
                "Specified category not found.".to_owned(),
            ),
            Error::InvalidPage(_) => (StatusCode::BAD_REQUEST, "Invalid Page Number".to_owned()),
            Error::CategoryInUse(_) => (
                StatusCode::BAD_REQUEST,
                "Cannot delete a category that still has questions. \
                Delete its questions first."
                    .to_owned(),
            ),
            Error::DeleteQuestionFailed(_) => (
                StatusCode::BAD_REQUEST,
                "Failed to delete question with requested id".to_owned(),
            ),
            Error::DeleteCategoryFailed(_) => (
                StatusCode::BAD_REQUEST,
                "Failed to delete category with requested id".to_owned(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested resource could not be found.".to_owned(),
            ),
            Error::CreateQuestionFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save question".to_owned(),
            ),
            Error::CreateCategoryFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save category".to_owned(),
            ),
            Error::SqlError(_) | Error::DatabaseLockError | Error::ResponseBodyUnreadable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            ),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, details) = self.status_and_details();

        if status_code.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        } else {
            tracing::debug!("Rejecting request: {}", self);
        }

        let body = ErrorBody {
            code: status_code.as_u16(),
            error: status_code
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_owned(),
            details,
        };

        (status_code, Json(body)).into_response()
    }
}
