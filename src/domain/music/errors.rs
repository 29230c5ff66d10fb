//! Music Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AudioError {
    #[error("Generated audio is empty")]
    Empty,

    #[error("Unexpected audio data: {0}")]
    TypeMismatch(String),

    #[error("WAV encoding failed: {0}")]
    Encoding(String),
}

impl AudioError {
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch(message.into())
    }
}

impl From<hound::Error> for AudioError {
    fn from(err: hound::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
