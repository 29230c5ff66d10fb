//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, ModelBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `SONGSMITH_SERVER__PORT=8080`
/// - `SONGSMITH_TEXT_MODEL__URL=http://gpu-box:8001`
/// - `SONGSMITH_AUDIO_MODEL__BACKEND=fake`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("text_model.backend", "http")?
        .set_default("text_model.url", "http://localhost:8001")?
        .set_default("text_model.timeout_secs", 120)?
        .set_default("text_model.max_concurrent", 1)?
        .set_default("text_model.max_length", 250)?
        .set_default("text_model.temperature", 0.8)?
        .set_default("audio_model.backend", "http")?
        .set_default("audio_model.url", "http://localhost:8002")?
        .set_default("audio_model.timeout_secs", 300)?
        .set_default("audio_model.max_concurrent", 1)?
        .set_default("audio_model.sampling_rate", 32000)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 层级分隔符为双下划线，例如 SONGSMITH_TEXT_MODEL__URL
    builder = builder.add_source(
        Environment::with_prefix("SONGSMITH")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let text = &config.text_model;
    if text.backend == ModelBackend::Http && text.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Text model URL cannot be empty".to_string(),
        ));
    }
    if text.max_concurrent == 0 || text.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Text model max_concurrent and timeout_secs must be at least 1".to_string(),
        ));
    }
    if text.max_length == 0 {
        return Err(ConfigError::ValidationError(
            "Text model max_length cannot be 0".to_string(),
        ));
    }
    if !(text.temperature > 0.0) {
        return Err(ConfigError::ValidationError(
            "Text model temperature must be positive".to_string(),
        ));
    }

    let audio = &config.audio_model;
    if audio.backend == ModelBackend::Http && audio.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Audio model URL cannot be empty".to_string(),
        ));
    }
    if audio.max_concurrent == 0 || audio.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Audio model max_concurrent and timeout_secs must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Max Body: {} bytes", config.server.max_body_bytes);
    tracing::info!(
        "Text Model: {} ({}), timeout {}s, max_concurrent {}",
        config.text_model.backend,
        config.text_model.url,
        config.text_model.timeout_secs,
        config.text_model.max_concurrent
    );
    tracing::info!(
        "Lyrics Sampling: max_length {}, temperature {}",
        config.text_model.max_length,
        config.text_model.temperature
    );
    tracing::info!(
        "Audio Model: {} ({}), timeout {}s, max_concurrent {}",
        config.audio_model.backend,
        config.audio_model.url,
        config.audio_model.timeout_secs,
        config.audio_model.max_concurrent
    );
    tracing::info!("Fallback Sampling Rate: {}", config.audio_model.sampling_rate);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
