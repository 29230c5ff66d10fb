//! Lyrics Context - 歌词限界上下文
//!
//! 职责:
//! - 歌词请求字段及默认值
//! - 提示词构建

mod prompt;
mod value_objects;

pub use prompt::{Prompt, PromptBuilder, SECTION_MARKER};
pub use value_objects::{
    GenerationRequest, DEFAULT_EMOTION, DEFAULT_MUSIC_STYLE, DEFAULT_STRUCTURE, DEFAULT_THEME,
};
