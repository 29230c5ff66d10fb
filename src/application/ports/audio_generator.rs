//! Audio Generator Port - 文本条件音频生成能力抽象

use async_trait::async_trait;

use super::{InferenceError, SamplingParams};
use crate::domain::music::RawAudioTensor;

/// 音频生成请求
#[derive(Debug, Clone)]
pub struct AudioGenerationRequest {
    /// 音乐描述
    pub text: String,
    /// 新生成的音频 token 上限
    pub max_new_tokens: usize,
    pub sampling: SamplingParams,
}

/// 音频生成结果
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    /// 模型原始输出，未做任何归一化
    pub tensor: RawAudioTensor,
    /// 模型配置中声明的采样率（未钳制，可能缺失）
    pub sampling_rate: Option<i64>,
}

/// Audio Generator Port
#[async_trait]
pub trait AudioGeneratorPort: Send + Sync {
    async fn generate(
        &self,
        request: AudioGenerationRequest,
    ) -> Result<GeneratedAudio, InferenceError>;

    /// 检查推理服务是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
