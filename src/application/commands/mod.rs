//! 应用层 - 命令
//!
//! 每个生成请求对应一个命令，由对应的 Handler 编排流水线

mod lyrics_commands;
mod music_commands;

pub mod handlers;

pub use lyrics_commands::*;
pub use music_commands::*;
