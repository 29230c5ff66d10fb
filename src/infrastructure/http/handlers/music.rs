//! Music Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{MusicRequestDto, MusicResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonBody;
use crate::infrastructure::http::state::AppState;

/// POST /generate-music
///
/// 描述缺失或为空白时返回 400，且不调用音频模型
pub async fn generate_music(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<MusicRequestDto>,
) -> Result<Json<MusicResponseDto>, ApiError> {
    let result = state.music_handler.handle(req.into()).await?;
    Ok(Json(result.into()))
}
