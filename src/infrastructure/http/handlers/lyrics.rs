//! Lyrics Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{LyricsRequestDto, LyricsResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonBody;
use crate::infrastructure::http::state::AppState;

/// POST /generate-content
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LyricsRequestDto>,
) -> Result<Json<LyricsResponseDto>, ApiError> {
    let result = state.lyrics_handler.handle(req.into()).await?;
    Ok(Json(result.into()))
}
