use super::StoreError;
use crate::queries::MAX_QUESTION_COUNT;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error as ThisError;

/// Validation and lookup failures on the read path.
#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("count must be between 1 and {MAX_QUESTION_COUNT}")]
    InvalidCount,

    #[error("category does not exist")]
    UnknownCategory,

    #[error("question does not exist")]
    UnknownQuestion,

    #[error("selected option index is invalid")]
    InvalidOptionIndex,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QueryError {
    fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidCount => "invalid_count",
            QueryError::UnknownCategory => "unknown_category",
            QueryError::UnknownQuestion => "unknown_question",
            QueryError::InvalidOptionIndex => "invalid_option_index",
            QueryError::Store(_) => "internal",
        }
    }
}

#[derive(Debug, Serialize)]
struct QueryErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            QueryError::Store(err) => {
                tracing::error!(error = %err, "query failed against the store");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
            other => (StatusCode::BAD_REQUEST, other.to_string()),
        };

        let body = QueryErrorBody {
            code: self.code(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
