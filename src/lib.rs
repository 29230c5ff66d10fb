//! Songsmith - 歌词与伴奏生成服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Lyrics: 请求默认值、提示词构造
//! - Music: 原始音频张量、后处理（声道平均、量化、采样率钳制、WAV 编码）
//!
//! 应用层 (application/):
//! - Ports: TextGenerator、AudioGenerator 推理端口
//! - Services: LyricsGenerator、AudioSynthesizer（并发上限 + 超时）
//! - Commands: 生成命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API
//! - Adapters: 推理 sidecar HTTP 客户端、离线 fake

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
