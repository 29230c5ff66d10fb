//! Audio Synthesizer - 包装音频生成能力
//!
//! 只负责校验输入并调用模型，原始输出不做归一化（交给 AudioPostProcessor）

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::guard::InferenceGuard;
use crate::application::error::{GenerationError, MISSING_DESCRIPTION};
use crate::application::ports::{
    AudioGenerationRequest, AudioGeneratorPort, GeneratedAudio, SamplingParams,
};

pub const MAX_NEW_TOKENS: usize = 512;
pub const TEMPERATURE: f32 = 1.2;
pub const TOP_K: u32 = 50;
pub const TOP_P: f32 = 0.95;

/// Audio Synthesizer 配置
#[derive(Debug, Clone)]
pub struct AudioSynthesizerConfig {
    /// 同时进行的推理调用上限
    pub max_concurrent: usize,
    pub timeout: Duration,
}

impl Default for AudioSynthesizerConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 1,
            timeout: Duration::from_secs(300),
        }
    }
}

pub struct AudioSynthesizer {
    engine: Arc<dyn AudioGeneratorPort>,
    guard: InferenceGuard,
}

impl AudioSynthesizer {
    pub fn new(engine: Arc<dyn AudioGeneratorPort>, config: AudioSynthesizerConfig) -> Self {
        Self {
            engine,
            guard: InferenceGuard::new(config.max_concurrent, config.timeout),
        }
    }

    pub async fn synthesize(&self, description: &str) -> Result<GeneratedAudio, GenerationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GenerationError::missing_input(MISSING_DESCRIPTION));
        }

        let request = AudioGenerationRequest {
            text: description.to_string(),
            max_new_tokens: MAX_NEW_TOKENS,
            sampling: SamplingParams::new(TEMPERATURE, TOP_K, TOP_P),
        };

        tracing::info!(description_len = description.len(), "Generating music");
        let started = Instant::now();

        let audio = self.guard.run(self.engine.generate(request)).await?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            shape = ?audio.tensor.shape(),
            sampling_rate = ?audio.sampling_rate,
            "Music generated"
        );

        if audio.tensor.is_empty() {
            return Err(GenerationError::EmptyGeneration("audio"));
        }
        Ok(audio)
    }

    pub async fn is_ready(&self) -> bool {
        self.engine.health_check().await
    }
}
