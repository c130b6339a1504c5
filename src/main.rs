use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod error;
mod speech;

use api::routes::{create_router, AppState};
use speech::SpeechService;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8088".to_string())
        .parse()
        .expect("PORT must be a number");
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let reader_bin = PathBuf::from(
        std::env::var("WORD_READER_BIN").unwrap_or_else(|_| "word_reader".to_string()),
    );

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Word Reader Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Static directory: {}", static_dir);
    tracing::info!("Reader binary: {}", reader_bin.display());

    // Startup diagnostics only; requests are dispatched either way
    match speech::detect_engine() {
        Some(engine) => tracing::info!("Detected TTS engine: {}", engine),
        None => tracing::warn!("No TTS engine found; install espeak or festival"),
    }
    if reader_bin.is_absolute() && !reader_bin.exists() {
        tracing::warn!("Reader binary {} does not exist", reader_bin.display());
    }

    // Create speech service
    let speech = SpeechService::new(reader_bin);

    // Create app state
    let state = Arc::new(AppState { speech });

    // Create router
    let app = create_router(state, &static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
