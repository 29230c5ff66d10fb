//! Text Generator Port - 文本生成能力抽象
//!
//! 对应 tokenizer + causal language model，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;

use super::{InferenceError, SamplingParams};

/// 文本生成请求
#[derive(Debug, Clone)]
pub struct TextGenerationRequest {
    pub prompt: String,
    /// token 预算（含提示词），不是字符数
    pub max_length: usize,
    pub sampling: SamplingParams,
}

/// Text Generator Port
///
/// 返回解码后的完整文本，可能带有提示词回显和特殊标记，由调用方清理
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    async fn generate(&self, request: TextGenerationRequest) -> Result<String, InferenceError>;

    /// 检查推理服务是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
