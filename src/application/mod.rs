//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 推理能力端口（TextGenerator、AudioGenerator）
//! - services: LyricsGenerator、AudioSynthesizer
//! - commands: 生成命令及处理器
//! - error: 生成错误分类

pub mod commands;
pub mod error;
pub mod ports;
pub mod services;

// Re-exports
pub use commands::{
    handlers::{GenerateLyricsHandler, GenerateMusicHandler, DEFAULT_SAMPLE_RATE},
    GenerateLyricsCommand, GenerateLyricsResponse, GenerateMusicCommand, GenerateMusicResponse,
};

pub use error::{GenerationError, MISSING_DESCRIPTION};

pub use ports::{
    AudioGenerationRequest, AudioGeneratorPort, GeneratedAudio, InferenceError, SamplingParams,
    TextGenerationRequest, TextGeneratorPort,
};

pub use services::{
    AudioSynthesizer, AudioSynthesizerConfig, LyricsGenerator, LyricsGeneratorConfig,
};
