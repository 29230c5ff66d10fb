//! Music Context - 音乐限界上下文
//!
//! 职责:
//! - 模型原始输出（RawAudioTensor）的形状校验
//! - 后处理：声道合并 → 幅度裁剪 → 16-bit 量化 → 采样率钳制 → WAV → base64

mod errors;
mod post_processor;
mod tensor;
mod waveform;

pub use errors::AudioError;
pub use post_processor::{
    clamp_sample_rate, quantize, reduce_channels, AudioPostProcessor, EncodedAudio,
    MAX_SAMPLE_RATE, MIN_SAMPLE_RATE, PCM_FULL_SCALE,
};
pub use tensor::RawAudioTensor;
pub use waveform::PcmWaveform;
