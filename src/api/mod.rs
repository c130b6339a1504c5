pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeakWordsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default = "default_pause")]
    pub pause: u32,
}

fn default_speed() -> u32 {
    150
}

fn default_pause() -> u32 {
    800
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
