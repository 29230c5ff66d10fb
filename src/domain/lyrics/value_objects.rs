//! Lyrics Context - Value Objects

pub const DEFAULT_MUSIC_STYLE: &str = "pop";
pub const DEFAULT_THEME: &str = "love";
pub const DEFAULT_EMOTION: &str = "happy";
pub const DEFAULT_STRUCTURE: &str = "Verse-Chorus";

/// 歌词生成请求
///
/// 不变量:
/// - 四个字段均非空（缺失或空白时使用默认值）
/// - 字段值已去除首尾空白
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    music_style: String,
    theme: String,
    emotion: String,
    structure: String,
}

impl GenerationRequest {
    pub fn new(
        music_style: Option<String>,
        theme: Option<String>,
        emotion: Option<String>,
        structure: Option<String>,
    ) -> Self {
        Self {
            music_style: or_default(music_style, DEFAULT_MUSIC_STYLE),
            theme: or_default(theme, DEFAULT_THEME),
            emotion: or_default(emotion, DEFAULT_EMOTION),
            structure: or_default(structure, DEFAULT_STRUCTURE),
        }
    }

    pub fn music_style(&self) -> &str {
        &self.music_style
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn emotion(&self) -> &str {
        &self.emotion
    }

    pub fn structure(&self) -> &str {
        &self.structure
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_absent() {
        let request = GenerationRequest::default();
        assert_eq!(request.music_style(), "pop");
        assert_eq!(request.theme(), "love");
        assert_eq!(request.emotion(), "happy");
        assert_eq!(request.structure(), "Verse-Chorus");
    }

    #[test]
    fn test_blank_fields_fall_back_to_defaults() {
        let request = GenerationRequest::new(
            Some(String::new()),
            Some("   ".to_string()),
            None,
            Some("\n".to_string()),
        );
        assert_eq!(request, GenerationRequest::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let request = GenerationRequest::new(
            Some("  R&B ".to_string()),
            Some("friendship".to_string()),
            Some(" sad".to_string()),
            Some("AABA".to_string()),
        );
        assert_eq!(request.music_style(), "R&B");
        assert_eq!(request.theme(), "friendship");
        assert_eq!(request.emotion(), "sad");
        assert_eq!(request.structure(), "AABA");
    }
}
