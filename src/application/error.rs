//! 应用层错误定义
//!
//! 生成流水线每个阶段都返回 `Result<_, GenerationError>`，
//! 只在请求边界（HTTP 层）统一映射为错误响应

use thiserror::Error;

use crate::application::ports::InferenceError;
use crate::domain::music::AudioError;

/// 缺少音乐描述时返回给客户端的消息
pub const MISSING_DESCRIPTION: &str = "Missing music description";

/// 生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    /// 必填字段缺失或为空（客户端错误）
    #[error("{0}")]
    MissingInput(String),

    /// 模型输出为空
    #[error("Generated {0} is empty")]
    EmptyGeneration(&'static str),

    /// 模型输出不是预期的数值/数组形式
    #[error("Unexpected generation output: {0}")]
    TypeMismatch(String),

    /// 推理能力本身失败（网络、超时、服务错误）
    #[error("Generation failed: {0}")]
    GenerationFailure(String),
}

impl GenerationError {
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::GenerationFailure(message.into())
    }

    /// 是否为客户端错误
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingInput(_))
    }

    /// 返回给调用方的消息，不包含内部细节
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingInput(msg) => msg.clone(),
            Self::EmptyGeneration(_) => self.to_string(),
            Self::TypeMismatch(_) => "Generation produced output in an unexpected format".to_string(),
            Self::GenerationFailure(_) => "Generation failed".to_string(),
        }
    }
}

impl From<InferenceError> for GenerationError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::InvalidResponse(msg) => Self::TypeMismatch(msg),
            other => Self::GenerationFailure(other.to_string()),
        }
    }
}

impl From<AudioError> for GenerationError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::Empty => Self::EmptyGeneration("audio"),
            AudioError::TypeMismatch(msg) => Self::TypeMismatch(msg),
            AudioError::Encoding(msg) => Self::GenerationFailure(msg),
        }
    }
}
