//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 歌词（文本生成）模型配置
    #[serde(default)]
    pub text_model: TextModelConfig,

    /// 伴奏（音频生成）模型配置
    #[serde(default)]
    pub audio_model: AudioModelConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 推理后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    /// 通过 HTTP 调用推理 sidecar
    #[default]
    Http,
    /// 进程内确定性输出，不需要模型
    Fake,
}

impl std::fmt::Display for ModelBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelBackend::Http => write!(f, "http"),
            ModelBackend::Fake => write!(f, "fake"),
        }
    }
}

/// 文本生成模型配置
#[derive(Debug, Clone, Deserialize)]
pub struct TextModelConfig {
    #[serde(default)]
    pub backend: ModelBackend,

    /// sidecar 基础 URL
    #[serde(default = "default_text_url")]
    pub url: String,

    /// 单次生成超时（秒）
    #[serde(default = "default_text_timeout")]
    pub timeout_secs: u64,

    /// 同时进行的推理调用上限
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// token 预算（含提示词）
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_text_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_text_timeout() -> u64 {
    120
}

fn default_max_concurrent() -> usize {
    1
}

fn default_max_length() -> usize {
    250
}

fn default_temperature() -> f32 {
    0.8
}

impl Default for TextModelConfig {
    fn default() -> Self {
        Self {
            backend: ModelBackend::default(),
            url: default_text_url(),
            timeout_secs: default_text_timeout(),
            max_concurrent: default_max_concurrent(),
            max_length: default_max_length(),
            temperature: default_temperature(),
        }
    }
}

impl TextModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 音频生成模型配置
#[derive(Debug, Clone, Deserialize)]
pub struct AudioModelConfig {
    #[serde(default)]
    pub backend: ModelBackend,

    /// sidecar 基础 URL
    #[serde(default = "default_audio_url")]
    pub url: String,

    /// 单次生成超时（秒）
    #[serde(default = "default_audio_timeout")]
    pub timeout_secs: u64,

    /// 同时进行的推理调用上限
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// 模型未声明采样率时使用
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: i64,
}

fn default_audio_url() -> String {
    "http://localhost:8002".to_string()
}

fn default_audio_timeout() -> u64 {
    300
}

fn default_sampling_rate() -> i64 {
    32000
}

impl Default for AudioModelConfig {
    fn default() -> Self {
        Self {
            backend: ModelBackend::default(),
            url: default_audio_url(),
            timeout_secs: default_audio_timeout(),
            max_concurrent: default_max_concurrent(),
            sampling_rate: default_sampling_rate(),
        }
    }
}

impl AudioModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
