//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::GenerationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::PayloadTooLarge(msg) | ApiError::Internal(msg) => {
                msg
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 详细错误已在转换时记录，状态码由请求日志中间件记录
        tracing::debug!(status = status.as_u16(), error = %self.message(), "API error response");

        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        if e.is_client_error() {
            return ApiError::BadRequest(e.public_message());
        }

        // 内部细节只写日志
        tracing::error!(detail = %e, "Generation request failed");
        ApiError::Internal(e.public_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MISSING_DESCRIPTION;

    #[test]
    fn test_missing_input_maps_to_bad_request() {
        let err: ApiError = GenerationError::missing_input(MISSING_DESCRIPTION).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), MISSING_DESCRIPTION);
    }

    #[test]
    fn test_failure_hides_detail() {
        let err: ApiError = GenerationError::failure("connection refused at 10.0.0.3:8001").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("10.0.0.3"));
    }

    #[tokio::test]
    async fn test_into_response_writes_error_envelope() {
        let response = ApiError::Internal("Generation failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Generation failed"}));
    }

    #[test]
    fn test_empty_generation_is_internal() {
        let err: ApiError = GenerationError::EmptyGeneration("audio").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Generated audio is empty");
    }
}
