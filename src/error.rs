use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// JSON envelope for handler failures.
///
/// `InvalidInput` keeps its display prefix so callers see what was rejected.
/// `NotFound` and `Upstream` carry messages already sanitized at the call
/// site; upstream detail never leaves the server log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Upstream(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            // Config failures abort startup and should never reach a handler
            AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn envelope(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_keeps_its_fixed_message() {
        let (status, body) = envelope(AppError::NotFound("No data found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "No data found");
    }

    #[tokio::test]
    async fn invalid_input_reports_the_rejected_field() {
        let (status, body) =
            envelope(AppError::InvalidInput("expected 7 values, received 3".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("expected 7 values"), "got: {}", message);
    }

    #[tokio::test]
    async fn upstream_and_config_map_to_500() {
        let (status, body) =
            envelope(AppError::Upstream("Failed to write to Google Sheets".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to write to Google Sheets");

        let config_err = AppError::Config("GOOGLE_SHEET_ID is not set".to_string());
        let (status, body) = envelope(config_err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }
}
