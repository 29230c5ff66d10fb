//! Lyrics Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateLyricsCommand, GenerateLyricsResponse};
use crate::application::error::GenerationError;
use crate::application::services::LyricsGenerator;
use crate::domain::lyrics::{GenerationRequest, PromptBuilder};

/// GenerateLyrics Handler - 默认值 → 提示词 → 文本生成
pub struct GenerateLyricsHandler {
    generator: Arc<LyricsGenerator>,
}

impl GenerateLyricsHandler {
    pub fn new(generator: Arc<LyricsGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateLyricsCommand,
    ) -> Result<GenerateLyricsResponse, GenerationError> {
        let request = GenerationRequest::new(cmd.music_style, cmd.theme, cmd.emotion, cmd.structure);

        tracing::debug!(
            music_style = %request.music_style(),
            theme = %request.theme(),
            emotion = %request.emotion(),
            structure = %request.structure(),
            "Lyrics request"
        );

        let prompt = PromptBuilder::from_request(&request);
        let lyrics = self.generator.generate(&prompt).await?;

        Ok(GenerateLyricsResponse { lyrics })
    }
}
