//! Fake Audio Generator - 不依赖推理服务的音频生成
//!
//! 输出确定性的多声道正弦波，形状与 `[channels, samples]` 的模型输出一致

use async_trait::async_trait;
use std::f32::consts::TAU;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{
    AudioGenerationRequest, AudioGeneratorPort, GeneratedAudio, InferenceError,
};
use crate::domain::music::RawAudioTensor;

/// Fake Audio Generator 配置
#[derive(Debug, Clone)]
pub struct FakeAudioGeneratorConfig {
    /// 声明的采样率，None 模拟模型配置中缺失该字段
    pub sample_rate: Option<i64>,
    pub duration_ms: u64,
    pub channels: usize,
    pub frequency_hz: f32,
}

impl Default for FakeAudioGeneratorConfig {
    fn default() -> Self {
        Self {
            sample_rate: Some(32000),
            duration_ms: 1000,
            channels: 2,
            frequency_hz: 440.0,
        }
    }
}

pub struct FakeAudioGenerator {
    config: FakeAudioGeneratorConfig,
    calls: AtomicUsize,
}

impl FakeAudioGenerator {
    pub fn new(config: FakeAudioGeneratorConfig) -> Self {
        tracing::info!(
            sample_rate = ?config.sample_rate,
            duration_ms = config.duration_ms,
            channels = config.channels,
            "FakeAudioGenerator initialized"
        );
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeAudioGeneratorConfig::default())
    }

    /// 已处理的生成请求数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn render(&self) -> Result<RawAudioTensor, InferenceError> {
        let rate = self.config.sample_rate.unwrap_or(32000).max(1) as f32;
        let frames = (rate as u64 * self.config.duration_ms / 1000) as usize;

        let rows: Vec<Vec<f32>> = (0..self.config.channels.max(1))
            .map(|channel| {
                // 各声道相位错开，合并后不会互相抵消为静音
                let phase = channel as f32 * 0.25;
                (0..frames)
                    .map(|i| 0.8 * (TAU * (self.config.frequency_hz * i as f32 / rate + phase)).sin())
                    .collect::<Vec<f32>>()
            })
            .collect();

        RawAudioTensor::from_rows(rows).map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AudioGeneratorPort for FakeAudioGenerator {
    async fn generate(
        &self,
        request: AudioGenerationRequest,
    ) -> Result<GeneratedAudio, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            text_len = request.text.len(),
            max_new_tokens = request.max_new_tokens,
            "FakeAudioGenerator: rendering fixed tone"
        );

        Ok(GeneratedAudio {
            tensor: self.render()?,
            sampling_rate: self.config.sample_rate,
        })
    }
}
