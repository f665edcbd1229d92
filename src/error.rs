use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogisticsError {
    /// Request body was not JSON or failed schema validation.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Request body could not be read.
    #[error("Unreadable request body: {0}")]
    BodyRead(#[from] BytesRejection),

    /// Path parameter was not an integer.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("Job not found: {0}")]
    JobNotFound(i64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LogisticsError>;

impl LogisticsError {
    pub fn status(&self) -> StatusCode {
        match self {
            LogisticsError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LogisticsError::BodyRead(rejection) => rejection.status(),
            LogisticsError::InvalidPath(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LogisticsError::JobNotFound(_) => StatusCode::NOT_FOUND,
            LogisticsError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message placed in the `detail` field.
    pub fn detail(&self) -> String {
        match self {
            LogisticsError::InvalidBody(e) => e.to_string(),
            LogisticsError::BodyRead(rejection) => rejection.body_text(),
            LogisticsError::InvalidPath(rejection) => rejection.body_text(),
            LogisticsError::JobNotFound(_) => "Job not found".to_string(),
            LogisticsError::Io(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for LogisticsError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_not_found_maps_to_404() {
        let err = LogisticsError::JobNotFound(42);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Job not found");
        assert_eq!(err.to_string(), "Job not found: 42");
    }

    #[test]
    fn malformed_body_maps_to_422() {
        let parse_err = serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err();
        let err = LogisticsError::from(parse_err);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.detail().contains("line 1"));
    }

    #[test]
    fn io_error_hides_details_from_client() {
        let err = LogisticsError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Internal server error");
    }
}
