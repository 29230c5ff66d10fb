//! Data Transfer Objects
//!
//! 请求体中未知字段一律忽略，缺失字段为 None

use serde::{Deserialize, Serialize};

use crate::application::{
    GenerateLyricsCommand, GenerateLyricsResponse, GenerateMusicCommand, GenerateMusicResponse,
};

// ============================================================================
// Lyrics DTOs
// ============================================================================

/// POST /generate-content 请求体
#[derive(Debug, Default, Deserialize)]
pub struct LyricsRequestDto {
    pub music_style: Option<String>,
    pub theme: Option<String>,
    pub emotion: Option<String>,
    pub structure: Option<String>,
}

impl From<LyricsRequestDto> for GenerateLyricsCommand {
    fn from(dto: LyricsRequestDto) -> Self {
        Self {
            music_style: dto.music_style,
            theme: dto.theme,
            emotion: dto.emotion,
            structure: dto.structure,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LyricsResponseDto {
    pub lyrics: String,
}

impl From<GenerateLyricsResponse> for LyricsResponseDto {
    fn from(resp: GenerateLyricsResponse) -> Self {
        Self {
            lyrics: resp.lyrics,
        }
    }
}

// ============================================================================
// Music DTOs
// ============================================================================

/// POST /generate-music 请求体
///
/// 旧客户端使用 `des` 字段名；两者同时出现时以 `description` 为准
#[derive(Debug, Default, Deserialize)]
pub struct MusicRequestDto {
    pub description: Option<String>,
    pub des: Option<String>,
}

impl MusicRequestDto {
    pub fn description(self) -> Option<String> {
        self.description.or(self.des)
    }
}

impl From<MusicRequestDto> for GenerateMusicCommand {
    fn from(dto: MusicRequestDto) -> Self {
        Self {
            description: dto.description(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MusicResponseDto {
    pub audio_data_base64: String,
    pub sampling_rate: u32,
}

impl From<GenerateMusicResponse> for MusicResponseDto {
    fn from(resp: GenerateMusicResponse) -> Self {
        Self {
            audio_data_base64: resp.audio_data_base64,
            sampling_rate: resp.sampling_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lyrics_request_ignores_unknown_fields() {
        let dto: LyricsRequestDto =
            serde_json::from_str(r#"{"theme":"rain","tempo":120}"#).unwrap();
        assert_eq!(dto.theme.as_deref(), Some("rain"));
        assert!(dto.music_style.is_none());
    }

    #[test]
    fn test_music_request_accepts_legacy_field() {
        let dto: MusicRequestDto = serde_json::from_str(r#"{"des":"calm piano"}"#).unwrap();
        assert_eq!(dto.description().as_deref(), Some("calm piano"));
    }

    #[test]
    fn test_description_wins_over_legacy_field() {
        let dto: MusicRequestDto =
            serde_json::from_str(r#"{"description":"jazz trio","des":"calm piano"}"#).unwrap();
        let cmd = GenerateMusicCommand::from(dto);
        assert_eq!(cmd.description.as_deref(), Some("jazz trio"));
    }

    #[test]
    fn test_null_field_is_none() {
        let dto: MusicRequestDto = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert!(dto.description().is_none());
    }
}
