//! Lyrics Commands - 歌词生成命令

/// 生成歌词命令，字段缺失时使用默认值
#[derive(Debug, Clone, Default)]
pub struct GenerateLyricsCommand {
    pub music_style: Option<String>,
    pub theme: Option<String>,
    pub emotion: Option<String>,
    pub structure: Option<String>,
}

/// 生成歌词响应
#[derive(Debug, Clone)]
pub struct GenerateLyricsResponse {
    pub lyrics: String,
}
