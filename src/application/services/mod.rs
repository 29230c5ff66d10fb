//! 应用服务 - 包装外部推理能力
//!
//! - LyricsGenerator: 文本生成 + 输出清理
//! - AudioSynthesizer: 输入校验 + 音频生成

mod audio_synthesizer;
mod guard;
mod lyrics_generator;

pub use audio_synthesizer::{AudioSynthesizer, AudioSynthesizerConfig};
pub use guard::InferenceGuard;
pub use lyrics_generator::{clean_generated_text, LyricsGenerator, LyricsGeneratorConfig};
