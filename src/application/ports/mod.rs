//! Application Ports - 出站端口定义
//!
//! 定义应用层与推理后端之间的抽象接口

mod audio_generator;
mod inference;
mod text_generator;

pub use audio_generator::{AudioGenerationRequest, AudioGeneratorPort, GeneratedAudio};
pub use inference::{InferenceError, SamplingParams};
pub use text_generator::{TextGenerationRequest, TextGeneratorPort};
