//! HTTP Routes
//!
//! API Endpoints:
//! - /generate-content   POST  生成歌词
//! - /generate-music     POST  生成伴奏（base64 WAV）
//! - /ping               GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-content", post(handlers::generate_content))
        .route("/generate-music", post(handlers::generate_music))
        .route("/ping", get(handlers::ping))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        AudioSynthesizer, AudioSynthesizerConfig, LyricsGenerator, LyricsGeneratorConfig,
        DEFAULT_SAMPLE_RATE, MISSING_DESCRIPTION,
    };
    use crate::infrastructure::adapters::{FakeAudioGenerator, FakeTextGenerator};
    use crate::infrastructure::http::server::build_router;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde_json::Value;
    use std::io::Cursor;
    use tower::util::ServiceExt;

    struct TestApp {
        router: Router,
        text: Arc<FakeTextGenerator>,
        audio: Arc<FakeAudioGenerator>,
    }

    fn test_app() -> TestApp {
        let text = Arc::new(FakeTextGenerator::with_defaults());
        let audio = Arc::new(FakeAudioGenerator::with_defaults());

        let lyrics_generator = Arc::new(LyricsGenerator::new(
            text.clone(),
            LyricsGeneratorConfig::default(),
        ));
        let audio_synthesizer = Arc::new(AudioSynthesizer::new(
            audio.clone(),
            AudioSynthesizerConfig::default(),
        ));
        let state = AppState::new(lyrics_generator, audio_synthesizer, DEFAULT_SAMPLE_RATE);

        TestApp {
            router: build_router(Arc::new(state), 1024 * 1024),
            text,
            audio,
        }
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_lyrics_with_empty_body_uses_defaults() {
        let app = test_app();
        let response = post_json(app.router, "/generate-content", "").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let lyrics = body["lyrics"].as_str().unwrap();
        assert!(!lyrics.trim().is_empty());
        assert!(!lyrics.contains("Here are the lyrics"));
        assert!(!lyrics.contains("<|endoftext|>"));
        assert_eq!(app.text.calls(), 1);
    }

    #[tokio::test]
    async fn test_lyrics_with_fields() {
        let app = test_app();
        let response = post_json(
            app.router,
            "/generate-content",
            r#"{"music_style":"jazz","theme":"rain","emotion":"sad","structure":"AABA"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(json_body(response).await["lyrics"].is_string());
    }

    #[tokio::test]
    async fn test_music_with_empty_description_is_rejected() {
        let app = test_app();
        let response = post_json(app.router, "/generate-music", r#"{"description":""}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], MISSING_DESCRIPTION);
        assert_eq!(app.audio.calls(), 0);
    }

    #[tokio::test]
    async fn test_music_with_missing_description_is_rejected() {
        let app = test_app();
        let response = post_json(app.router, "/generate-music", "{}").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.audio.calls(), 0);
    }

    #[tokio::test]
    async fn test_music_returns_decodable_wav() {
        let app = test_app();
        let response = post_json(
            app.router,
            "/generate-music",
            r#"{"description":"upbeat synth pop"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let rate = body["sampling_rate"].as_u64().unwrap();
        assert!((1..=65535).contains(&rate));

        let wav = STANDARD
            .decode(body["audio_data_base64"].as_str().unwrap())
            .unwrap();
        let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        assert_eq!(reader.spec().sample_rate as u64, rate);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(app.audio.calls(), 1);
    }

    #[tokio::test]
    async fn test_music_accepts_legacy_field() {
        let app = test_app();
        let response = post_json(app.router, "/generate-music", r#"{"des":"lofi beat"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_music_with_both_description_fields() {
        let app = test_app();
        let response = post_json(
            app.router,
            "/generate-music",
            r#"{"description":"jazz trio","des":"calm piano"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(app.audio.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_error_body() {
        let app = test_app();
        let response = post_json(app.router, "/generate-content", "{\"theme\":").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json_body(response).await["error"].is_string());
        assert_eq!(app.text.calls(), 0);
    }

    #[tokio::test]
    async fn test_ping() {
        let app = test_app();
        let response = app
            .router
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["text_model"], true);
        assert_eq!(body["audio_model"], true);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = test_app();
        let response = app
            .router
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/generate-music")
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
