//! Songsmith - 歌词与伴奏生成服务
//!
//! 启动流程：加载配置 → 初始化日志 → 创建推理后端 → 启动 HTTP 服务

use std::sync::Arc;

use songsmith::application::{
    AudioGeneratorPort, AudioSynthesizer, AudioSynthesizerConfig, LyricsGenerator,
    LyricsGeneratorConfig, TextGeneratorPort,
};
use songsmith::config::{load_config, print_config, AppConfig, ModelBackend};
use songsmith::infrastructure::adapters::{
    FakeAudioGenerator, FakeTextGenerator, HttpAudioGenerator, HttpAudioGeneratorConfig,
    HttpTextGenerator, HttpTextGeneratorConfig,
};
use songsmith::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Songsmith - 歌词与伴奏生成服务");
    print_config(&config);

    // 创建推理后端
    let text_engine = build_text_engine(&config)?;
    let audio_engine = build_audio_engine(&config)?;

    let lyrics_generator = Arc::new(LyricsGenerator::new(
        text_engine,
        LyricsGeneratorConfig {
            max_length: config.text_model.max_length,
            temperature: config.text_model.temperature,
            max_concurrent: config.text_model.max_concurrent,
            timeout: config.text_model.timeout(),
        },
    ));
    let audio_synthesizer = Arc::new(AudioSynthesizer::new(
        audio_engine,
        AudioSynthesizerConfig {
            max_concurrent: config.audio_model.max_concurrent,
            timeout: config.audio_model.timeout(),
        },
    ));

    if !lyrics_generator.is_ready().await {
        tracing::warn!(url = %config.text_model.url, "Text model backend is not reachable yet");
    }
    if !audio_synthesizer.is_ready().await {
        tracing::warn!(url = %config.audio_model.url, "Audio model backend is not reachable yet");
    }

    // 创建 HTTP 服务器
    let state = AppState::new(
        lyrics_generator,
        audio_synthesizer,
        config.audio_model.sampling_rate,
    );
    let server = HttpServer::new(ServerConfig::from(&config.server), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},songsmith={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_text_engine(config: &AppConfig) -> anyhow::Result<Arc<dyn TextGeneratorPort>> {
    let engine: Arc<dyn TextGeneratorPort> = match config.text_model.backend {
        ModelBackend::Http => Arc::new(HttpTextGenerator::new(HttpTextGeneratorConfig::new(
            &config.text_model.url,
        ))?),
        ModelBackend::Fake => {
            tracing::warn!("Using fake text backend, lyrics are fixed");
            Arc::new(FakeTextGenerator::with_defaults())
        }
    };
    Ok(engine)
}

fn build_audio_engine(config: &AppConfig) -> anyhow::Result<Arc<dyn AudioGeneratorPort>> {
    let engine: Arc<dyn AudioGeneratorPort> = match config.audio_model.backend {
        ModelBackend::Http => Arc::new(HttpAudioGenerator::new(HttpAudioGeneratorConfig::new(
            &config.audio_model.url,
        ))?),
        ModelBackend::Fake => {
            tracing::warn!("Using fake audio backend, audio is a test tone");
            Arc::new(FakeAudioGenerator::with_defaults())
        }
    };
    Ok(engine)
}
