//! Fake Text Generator - 不依赖推理服务的文本生成
//!
//! 像真实的 causal LM 一样回显提示词，后接固定歌词和结束标记

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{InferenceError, TextGenerationRequest, TextGeneratorPort};

const DEFAULT_CONTINUATION: &str = "\nI found a melody in the morning light\n\
Humming softly, everything feels right\n\n\
[Chorus]\n\
Sing it loud, sing it clear\n\
Every note brings you near";

/// Fake Text Generator 配置
#[derive(Debug, Clone)]
pub struct FakeTextGeneratorConfig {
    /// 追加在提示词后的续写
    pub continuation: String,
    /// 模拟推理延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeTextGeneratorConfig {
    fn default() -> Self {
        Self {
            continuation: DEFAULT_CONTINUATION.to_string(),
            latency_ms: 0,
        }
    }
}

pub struct FakeTextGenerator {
    config: FakeTextGeneratorConfig,
    calls: AtomicUsize,
}

impl FakeTextGenerator {
    pub fn new(config: FakeTextGeneratorConfig) -> Self {
        tracing::info!(
            continuation_len = config.continuation.len(),
            "FakeTextGenerator initialized"
        );
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeTextGeneratorConfig::default())
    }

    /// 已处理的生成请求数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGeneratorPort for FakeTextGenerator {
    async fn generate(&self, request: TextGenerationRequest) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            prompt_len = request.prompt.len(),
            max_length = request.max_length,
            "FakeTextGenerator: returning fixed lyrics"
        );

        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        Ok(format!(
            "{}{}<|endoftext|>",
            request.prompt, self.config.continuation
        ))
    }
}
