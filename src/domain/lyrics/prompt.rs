//! Prompt Builder
//!
//! 将结构化字段渲染成一行指令，后接段落标记，
//! 使续写模型从第一段内部开始输出，而不是另起一首新歌。

use super::GenerationRequest;

/// 提示词末尾的段落标记
pub const SECTION_MARKER: &str = "[Verse 1]";

/// 提示词（每次请求构建一次，不持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 提示词构建器
///
/// 纯函数，无随机性，不会失败
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(style: &str, theme: &str, emotion: &str, structure: &str) -> Prompt {
        Prompt(format!(
            "Write a {} {} song about {} with a {} structure. Here are the lyrics:\n\n{}",
            emotion, style, theme, structure, SECTION_MARKER
        ))
    }

    pub fn from_request(request: &GenerationRequest) -> Prompt {
        Self::build(
            request.music_style(),
            request.theme(),
            request.emotion(),
            request.structure(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_for_defaults() {
        let prompt = PromptBuilder::from_request(&GenerationRequest::default());
        assert_eq!(
            prompt.as_str(),
            "Write a happy pop song about love with a Verse-Chorus structure. Here are the lyrics:\n\n[Verse 1]"
        );
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let fields = [
            ("pop", "love", "happy", "AABA"),
            ("R&B", "friendship", "sad", "Verse-Chorus"),
            ("", "", "", ""),
            ("metal", "the sea", "angry", "ABABCB"),
        ];
        for (style, theme, emotion, structure) in fields {
            let a = PromptBuilder::build(style, theme, emotion, structure);
            let b = PromptBuilder::build(style, theme, emotion, structure);
            assert_eq!(a.as_str().as_bytes(), b.as_str().as_bytes());
        }
    }

    #[test]
    fn test_prompt_contains_fields() {
        let prompt = PromptBuilder::build("synthwave", "midnight drives", "nostalgic", "AABA");
        assert!(prompt.as_str().contains("synthwave"));
        assert!(prompt.as_str().contains("midnight drives"));
        assert!(prompt.as_str().contains("nostalgic"));
        assert!(prompt.as_str().contains("AABA"));
    }

    #[test]
    fn test_prompt_is_single_instruction_then_marker() {
        let prompt = PromptBuilder::build("pop", "love", "happy", "AABA");
        let (instruction, rest) = prompt.as_str().split_once('\n').unwrap();
        assert!(instruction.starts_with("Write a happy pop song"));
        assert_eq!(rest.trim(), SECTION_MARKER);
        assert!(prompt.as_str().ends_with(SECTION_MARKER));
    }
}
