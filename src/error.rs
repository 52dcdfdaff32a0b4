use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TrackerError {
    #[error("malformed JSON body: {0}")]
    MalformedJson(serde_json::Error),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("database handle is not available")]
    NoDatabase,

    #[error("company {0} already exists")]
    DuplicateCompany(i64),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    pub fn status(&self) -> StatusCode {
        match self {
            TrackerError::Config(_) | TrackerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::MalformedJson(_) => "MALFORMED_JSON",
            TrackerError::InvalidBody(_) => "INVALID_BODY",
            TrackerError::NoDatabase => "NO_DB",
            TrackerError::DuplicateCompany(_) => "DUPLICATE_COMPANY",
            TrackerError::Database(_) => "STORAGE_ERROR",
            TrackerError::Config(_) | TrackerError::Io(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        // Storage details stay in the logs.
        let message = match &self {
            TrackerError::NoDatabase => "NO DB".to_string(),
            TrackerError::Database(_) => "Bad Request!".to_string(),
            TrackerError::Config(_) | TrackerError::Io(_) => {
                "An internal server error occurred.".to_string()
            }
            other => other.to_string(),
        };
        let body = ApiErrorBody {
            code: self.code().to_string(),
            message,
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_map_to_bad_request() {
        assert_eq!(TrackerError::NoDatabase.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            TrackerError::DuplicateCompany(3).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TrackerError::Database(SqlxError::RowNotFound).code(),
            "STORAGE_ERROR"
        );
    }

    #[test]
    fn startup_errors_are_internal() {
        let err = TrackerError::Io(std::io::Error::other("bind failed"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
