//! Lyrics Generator - 包装文本生成能力
//!
//! 采样生成，结果不确定：相同提示词多次调用可能得到不同歌词，
//! 这是预期行为，不做缓存

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use regex::Regex;

use super::guard::InferenceGuard;
use crate::application::error::GenerationError;
use crate::application::ports::{SamplingParams, TextGenerationRequest, TextGeneratorPort};
use crate::domain::lyrics::Prompt;

pub const DEFAULT_MAX_LENGTH: usize = 250;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const TOP_K: u32 = 50;
pub const TOP_P: f32 = 0.95;

/// Lyrics Generator 配置
#[derive(Debug, Clone)]
pub struct LyricsGeneratorConfig {
    pub max_length: usize,
    pub temperature: f32,
    /// 同时进行的推理调用上限
    pub max_concurrent: usize,
    pub timeout: Duration,
}

impl Default for LyricsGeneratorConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            temperature: DEFAULT_TEMPERATURE,
            max_concurrent: 1,
            timeout: Duration::from_secs(120),
        }
    }
}

pub struct LyricsGenerator {
    engine: Arc<dyn TextGeneratorPort>,
    guard: InferenceGuard,
    max_length: usize,
    temperature: f32,
}

impl LyricsGenerator {
    pub fn new(engine: Arc<dyn TextGeneratorPort>, config: LyricsGeneratorConfig) -> Self {
        Self {
            engine,
            guard: InferenceGuard::new(config.max_concurrent, config.timeout),
            max_length: config.max_length,
            temperature: config.temperature,
        }
    }

    /// 使用配置的 token 预算和温度生成
    pub async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        self.generate_with(prompt.as_str(), self.max_length, self.temperature)
            .await
    }

    pub async fn generate_with(
        &self,
        prompt: &str,
        max_length: usize,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        let request = TextGenerationRequest {
            prompt: prompt.to_string(),
            max_length,
            sampling: SamplingParams::new(temperature, TOP_K, TOP_P),
        };

        tracing::info!(
            prompt_len = prompt.len(),
            max_length = max_length,
            temperature = temperature,
            "Generating lyrics"
        );
        let started = Instant::now();

        let raw = self.guard.run(self.engine.generate(request)).await?;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            output_len = raw.len(),
            "Lyrics generated"
        );

        let lyrics = clean_generated_text(&raw, prompt);
        if lyrics.is_empty() {
            return Err(GenerationError::EmptyGeneration("lyrics"));
        }
        Ok(lyrics)
    }

    pub async fn is_ready(&self) -> bool {
        self.engine.health_check().await
    }
}

fn special_tokens() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"<\|[^|<>]*\|>|</?s>|<pad>|<unk>|<mask>").expect("special token pattern")
    })
}

/// 清理解码结果：去掉特殊标记，去掉提示词回显前缀，去掉首尾空白
pub fn clean_generated_text(raw: &str, prompt: &str) -> String {
    let without_markers = special_tokens().replace_all(raw, "");
    let mut text: &str = &without_markers;

    if !prompt.is_empty() {
        while let Some(rest) = text.trim_start().strip_prefix(prompt) {
            text = rest;
        }
    }

    text.trim().to_string()
}
