use axum::{extract::State, Json};
use std::sync::Arc;
use std::time::Duration;

use super::{HealthResponse, SpeakRequest, SpeakWordsRequest, StatusResponse};
use crate::api::routes::AppState;
use crate::error::AppError;

/// Synchronous dispatch; the reader must finish within this window.
const SPEAK_TIMEOUT: Duration = Duration::from_secs(10);

/// Background dispatch; long texts are read word by word.
const SPEAK_WORDS_TIMEOUT: Duration = Duration::from_secs(300);

pub async fn speak(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeakRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    // Validate input
    let word = request.word.trim();
    if word.is_empty() {
        return Err(AppError::BadRequest("No word provided".into()));
    }

    // Run the reader and wait for it
    let status = state.speech.speak(word, SPEAK_TIMEOUT).await?;

    // Non-zero exit is reported in the body, not as an HTTP error
    if status.success() {
        Ok(Json(StatusResponse::success(format!(
            "Spoke word: {}",
            word
        ))))
    } else {
        Ok(Json(StatusResponse::error(format!(
            "Failed to speak word: {}",
            word
        ))))
    }
}

pub async fn speak_words(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeakWordsRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    // Validate input
    let text = request.text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::BadRequest("No text provided".into()));
    }

    // Accepted but not forwarded; the reader applies its own pacing
    tracing::debug!(
        speed = request.speed,
        pause = request.pause,
        "Dispatching background speech"
    );

    // Speak in a background task so the response is not blocked.
    // Failures are logged, never surfaced to the client.
    let state = Arc::clone(&state);
    tokio::spawn(async move {
        match state.speech.speak(&text, SPEAK_WORDS_TIMEOUT).await {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::error!("Reader exited with {}", status),
            Err(e) => tracing::error!("Background speech failed: {}", e),
        }
    });

    Ok(Json(StatusResponse::success("Started speaking")))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
