//! 推理能力的共享类型

use thiserror::Error;

/// 推理错误
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 采样参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub do_sample: bool,
    pub temperature: f32,
    /// 只在概率最高的 k 个候选中采样
    pub top_k: u32,
    /// nucleus 采样的累计概率阈值
    pub top_p: f32,
}

impl SamplingParams {
    pub fn new(temperature: f32, top_k: u32, top_p: f32) -> Self {
        Self {
            do_sample: true,
            temperature,
            top_k,
            top_p,
        }
    }
}
