//! HTTP Layer - JSON API
//!
//! 两个生成端点 + 健康检查，所有错误统一为 `{"error": ...}`

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use extract::JsonBody;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
