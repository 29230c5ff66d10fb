//! Music Commands - 伴奏生成命令

/// 生成伴奏命令
#[derive(Debug, Clone, Default)]
pub struct GenerateMusicCommand {
    pub description: Option<String>,
}

/// 生成伴奏响应
#[derive(Debug, Clone)]
pub struct GenerateMusicResponse {
    pub audio_data_base64: String,
    pub sampling_rate: u32,
}
