//! Audio Generation Adapters

mod fake_audio_generator;
mod http_audio_generator;

pub use fake_audio_generator::{FakeAudioGenerator, FakeAudioGeneratorConfig};
pub use http_audio_generator::{HttpAudioGenerator, HttpAudioGeneratorConfig};
