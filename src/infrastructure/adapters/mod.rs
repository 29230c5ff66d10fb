//! Infrastructure Adapters
//!
//! 推理端口的适配器实现：HTTP sidecar 客户端 + 离线 fake

pub mod audio;
pub mod text;

pub use audio::*;
pub use text::*;

use crate::application::ports::InferenceError;

/// reqwest 错误 → 推理错误
pub(crate) fn map_reqwest_error(e: reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::Timeout
    } else if e.is_connect() {
        InferenceError::NetworkError(format!("Cannot connect to inference service: {}", e))
    } else {
        InferenceError::NetworkError(e.to_string())
    }
}
