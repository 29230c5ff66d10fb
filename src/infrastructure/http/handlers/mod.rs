//! HTTP Handlers

mod lyrics;
mod music;
mod ping;

pub use lyrics::*;
pub use music::*;
pub use ping::*;
