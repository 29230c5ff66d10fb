//! Infrastructure Layer - 基础设施层
//!
//! 提供推理端口的具体实现以及 HTTP 接口

pub mod adapters;
pub mod http;

pub use self::adapters::{FakeAudioGenerator, FakeTextGenerator, HttpAudioGenerator, HttpTextGenerator};
pub use self::http::{AppState, HttpServer};
