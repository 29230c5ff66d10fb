//! Text Generation Adapters

mod fake_text_generator;
mod http_text_generator;

pub use fake_text_generator::{FakeTextGenerator, FakeTextGeneratorConfig};
pub use http_text_generator::{HttpTextGenerator, HttpTextGeneratorConfig};
