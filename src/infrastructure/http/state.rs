//! Application State
//!
//! 所有请求共享同一份状态；模型访问的并发控制在各自的 service 内部

use std::sync::Arc;

use crate::application::{
    AudioSynthesizer, GenerateLyricsHandler, GenerateMusicHandler, LyricsGenerator,
};

/// 应用状态
pub struct AppState {
    // ========== Services ==========
    pub lyrics_generator: Arc<LyricsGenerator>,
    pub audio_synthesizer: Arc<AudioSynthesizer>,

    // ========== Command Handlers ==========
    pub lyrics_handler: GenerateLyricsHandler,
    pub music_handler: GenerateMusicHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `fallback_sample_rate` 在音频模型未声明采样率时使用
    pub fn new(
        lyrics_generator: Arc<LyricsGenerator>,
        audio_synthesizer: Arc<AudioSynthesizer>,
        fallback_sample_rate: i64,
    ) -> Self {
        Self {
            lyrics_handler: GenerateLyricsHandler::new(lyrics_generator.clone()),
            music_handler: GenerateMusicHandler::new(
                audio_synthesizer.clone(),
                fallback_sample_rate,
            ),
            lyrics_generator,
            audio_synthesizer,
        }
    }
}
