//! HTTP Text Generator - 调用推理 sidecar 的文本生成接口
//!
//! 外部 API:
//! POST {base_url}/v1/text/generate
//! Request: {"prompt": "...", "max_length": 250, "temperature": 0.8,
//!           "top_k": 50, "top_p": 0.95, "do_sample": true}
//! Response: {"text": "..."}  解码后的完整文本（可能包含提示词）

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{InferenceError, TextGenerationRequest, TextGeneratorPort};
use crate::infrastructure::adapters::map_reqwest_error;

#[derive(Debug, Serialize)]
struct TextGenerateHttpRequest<'a> {
    prompt: &'a str,
    max_length: usize,
    temperature: f32,
    top_k: u32,
    top_p: f32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct TextGenerateHttpResponse {
    text: String,
}

/// HTTP 文本生成客户端配置
#[derive(Debug, Clone)]
pub struct HttpTextGeneratorConfig {
    /// sidecar 基础 URL
    pub base_url: String,
    /// 连接超时（秒），整体超时由 InferenceGuard 控制
    pub connect_timeout_secs: u64,
}

impl Default for HttpTextGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl HttpTextGeneratorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

pub struct HttpTextGenerator {
    client: Client,
    config: HttpTextGeneratorConfig,
}

impl HttpTextGenerator {
    pub fn new(config: HttpTextGeneratorConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| InferenceError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/v1/text/generate", self.config.base_url.trim_end_matches('/'))
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextGeneratorPort for HttpTextGenerator {
    async fn generate(&self, request: TextGenerationRequest) -> Result<String, InferenceError> {
        let body = TextGenerateHttpRequest {
            prompt: &request.prompt,
            max_length: request.max_length,
            temperature: request.sampling.temperature,
            top_k: request.sampling.top_k,
            top_p: request.sampling.top_p,
            do_sample: request.sampling.do_sample,
        };

        tracing::debug!(
            url = %self.generate_url(),
            prompt_len = request.prompt.len(),
            "Sending text generation request"
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

        let payload: TextGenerateHttpResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(format!("Failed to read text: {}", e)))?;

        Ok(payload.text)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SamplingParams;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(prompt: &str) -> TextGenerationRequest {
        TextGenerationRequest {
            prompt: prompt.to_string(),
            max_length: 250,
            sampling: SamplingParams::new(0.8, 50, 0.95),
        }
    }

    #[test]
    fn test_config_default() {
        let config = HttpTextGeneratorConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = HttpTextGenerator::new(HttpTextGeneratorConfig::new("http://sidecar:9000/")).unwrap();
        assert_eq!(client.generate_url(), "http://sidecar:9000/v1/text/generate");
        assert_eq!(client.health_url(), "http://sidecar:9000/health");
    }

    #[tokio::test]
    async fn test_generate_sends_sampling_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text/generate"))
            .and(body_partial_json(serde_json::json!({
                "prompt": "Write a song.",
                "max_length": 250,
                "top_k": 50,
                "do_sample": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "Write a song. Stars above"
            })))
            .mount(&server)
            .await;

        let client = HttpTextGenerator::new(HttpTextGeneratorConfig::new(server.uri())).unwrap();
        let text = client.generate(request("Write a song.")).await.unwrap();
        assert_eq!(text, "Write a song. Stars above");
    }

    #[tokio::test]
    async fn test_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
            .mount(&server)
            .await;

        let client = HttpTextGenerator::new(HttpTextGeneratorConfig::new(server.uri())).unwrap();
        let err = client.generate(request("x")).await.unwrap_err();
        assert!(matches!(err, InferenceError::ServiceError(msg) if msg.contains("model crashed")));
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tokens": [1, 2, 3]
            })))
            .mount(&server)
            .await;

        let client = HttpTextGenerator::new(HttpTextGeneratorConfig::new(server.uri())).unwrap();
        let err = client.generate(request("x")).await.unwrap_err();
        assert!(matches!(err, InferenceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = HttpTextGenerator::new(HttpTextGeneratorConfig::new(server.uri())).unwrap();
        assert!(client.health_check().await);
    }
}
