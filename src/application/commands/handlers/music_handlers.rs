//! Music Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateMusicCommand, GenerateMusicResponse};
use crate::application::error::GenerationError;
use crate::application::services::AudioSynthesizer;
use crate::domain::music::AudioPostProcessor;

/// 模型未声明采样率时使用
pub const DEFAULT_SAMPLE_RATE: i64 = 32000;

/// GenerateMusic Handler - 描述 → 音频生成 → 后处理 → base64 WAV
pub struct GenerateMusicHandler {
    synthesizer: Arc<AudioSynthesizer>,
    post_processor: AudioPostProcessor,
    fallback_sample_rate: i64,
}

impl GenerateMusicHandler {
    pub fn new(synthesizer: Arc<AudioSynthesizer>, fallback_sample_rate: i64) -> Self {
        Self {
            synthesizer,
            post_processor: AudioPostProcessor::new(),
            fallback_sample_rate,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateMusicCommand,
    ) -> Result<GenerateMusicResponse, GenerationError> {
        let description = cmd.description.unwrap_or_default();
        let audio = self.synthesizer.synthesize(&description).await?;

        let declared_rate = audio.sampling_rate.unwrap_or(self.fallback_sample_rate);
        let encoded = self.post_processor.process(audio.tensor, declared_rate)?;

        tracing::info!(
            sampling_rate = encoded.sampling_rate,
            duration_ms = encoded.duration_ms,
            "Music encoded"
        );

        Ok(GenerateMusicResponse {
            audio_data_base64: encoded.audio_data_base64,
            sampling_rate: encoded.sampling_rate,
        })
    }
}
