//! Command Handlers 实现

mod lyrics_handlers;
mod music_handlers;

pub use lyrics_handlers::*;
pub use music_handlers::*;
