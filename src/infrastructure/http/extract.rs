//! 请求体提取器
//!
//! 与 `axum::Json` 的区别：
//! - 不检查 Content-Type
//! - 空请求体按 `{}` 处理（所有字段取默认值）
//! - JSON 无法解析时返回 `{"error": ...}` 而不是纯文本拒绝

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// 宽松的 JSON 请求体
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge("Request body too large".to_string())
            } else {
                ApiError::Internal(rejection.body_text())
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::warn!(error = %e, body_len = bytes.len(), "Failed to parse JSON body");
            ApiError::Internal("Invalid JSON body".to_string())
        })
    }
}
