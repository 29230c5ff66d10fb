//! Ping Handler
//!
//! 健康检查，附带两个模型后端的就绪状态

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub text_model: bool,
    pub audio_model: bool,
}

/// Ping endpoint - 健康检查
///
/// 任一模型不可用时 status 为 "degraded"，HTTP 状态码仍为 200
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let (text_model, audio_model) = tokio::join!(
        state.lyrics_generator.is_ready(),
        state.audio_synthesizer.is_ready()
    );

    let status = if text_model && audio_model {
        "ok"
    } else {
        "degraded"
    };

    Json(PingResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        text_model,
        audio_model,
    })
}
