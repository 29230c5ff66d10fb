//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Lyrics Context: 歌词提示词构建
//! - Music Context: 生成音频的后处理（声道合并、量化、WAV 封装）

pub mod lyrics;
pub mod music;
