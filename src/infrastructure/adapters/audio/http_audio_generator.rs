//! HTTP Audio Generator - 调用推理 sidecar 的音频生成接口
//!
//! 外部 API:
//! POST {base_url}/v1/audio/generate
//! Request: {"text": "...", "max_new_tokens": 512, "temperature": 1.2,
//!           "top_k": 50, "top_p": 0.95, "do_sample": true}
//! Response: {"audio_values": [[...], ...], "sampling_rate": 32000}
//!   audio_values 为模型原始输出的嵌套数组，sampling_rate 可省略

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{
    AudioGenerationRequest, AudioGeneratorPort, GeneratedAudio, InferenceError,
};
use crate::domain::music::RawAudioTensor;
use crate::infrastructure::adapters::map_reqwest_error;

#[derive(Debug, Serialize)]
struct AudioGenerateHttpRequest<'a> {
    text: &'a str,
    max_new_tokens: usize,
    temperature: f32,
    top_k: u32,
    top_p: f32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct AudioGenerateHttpResponse {
    audio_values: Value,
    #[serde(default)]
    sampling_rate: Option<i64>,
}

/// HTTP 音频生成客户端配置
#[derive(Debug, Clone)]
pub struct HttpAudioGeneratorConfig {
    /// sidecar 基础 URL
    pub base_url: String,
    /// 连接超时（秒），整体超时由 InferenceGuard 控制
    pub connect_timeout_secs: u64,
}

impl Default for HttpAudioGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8002".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl HttpAudioGeneratorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

pub struct HttpAudioGenerator {
    client: Client,
    config: HttpAudioGeneratorConfig,
}

impl HttpAudioGenerator {
    pub fn new(config: HttpAudioGeneratorConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| InferenceError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/v1/audio/generate", self.config.base_url.trim_end_matches('/'))
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AudioGeneratorPort for HttpAudioGenerator {
    async fn generate(
        &self,
        request: AudioGenerationRequest,
    ) -> Result<GeneratedAudio, InferenceError> {
        let body = AudioGenerateHttpRequest {
            text: &request.text,
            max_new_tokens: request.max_new_tokens,
            temperature: request.sampling.temperature,
            top_k: request.sampling.top_k,
            top_p: request.sampling.top_p,
            do_sample: request.sampling.do_sample,
        };

        tracing::debug!(
            url = %self.generate_url(),
            text_len = request.text.len(),
            max_new_tokens = request.max_new_tokens,
            "Sending audio generation request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(InferenceError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let payload: AudioGenerateHttpResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(format!("Failed to read audio: {}", e)))?;

        let tensor = RawAudioTensor::from_json(&payload.audio_values)
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            shape = ?tensor.shape(),
            sampling_rate = ?payload.sampling_rate,
            "Audio inference completed"
        );

        Ok(GeneratedAudio {
            tensor,
            sampling_rate: payload.sampling_rate,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
