use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::Command;

use crate::error::AppError;

/// Dispatches speech jobs to the external reader binary.
///
/// Overlapping invocations are not coordinated; each call spawns its own
/// process and callers decide whether to wait for it.
pub struct SpeechService {
    reader_bin: PathBuf,
}

impl SpeechService {
    pub fn new(reader_bin: PathBuf) -> Self {
        Self { reader_bin }
    }

    /// Run `word_reader <arg>` and wait up to `timeout` for it to exit.
    ///
    /// The child is killed on timeout. A non-zero exit is not an error here;
    /// the status is returned for the caller to interpret.
    pub async fn speak(&self, arg: &str, timeout: Duration) -> Result<ExitStatus, AppError> {
        let mut child = Command::new(&self.reader_bin)
            .arg(arg)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        match tokio::time::timeout(timeout, child.wait()).await {
            Ok(status) => Ok(status?),
            Err(_) => {
                child.kill().await.ok();
                Err(AppError::Timeout(timeout.as_secs()))
            }
        }
    }
}

/// Probe for an installed TTS engine. Diagnostic only.
pub fn detect_engine() -> Option<&'static str> {
    ["espeak", "festival"].into_iter().find(|engine| {
        std::process::Command::new("which")
            .arg(engine)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_successful_exit() {
        let service = SpeechService::new("true".into());
        let status = service
            .speak("hello", Duration::from_secs(5))
            .await
            .unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn reports_failed_exit() {
        let service = SpeechService::new("false".into());
        let status = service
            .speak("hello", Duration::from_secs(5))
            .await
            .unwrap();
        assert!(!status.success());
    }

    #[tokio::test]
    async fn kills_reader_on_timeout() {
        let service = SpeechService::new("sleep".into());
        let result = service.speak("5", Duration::from_millis(100)).await;
        assert!(matches!(result, Err(AppError::Timeout(_))));
    }

    #[tokio::test]
    async fn missing_binary_is_an_io_error() {
        let service = SpeechService::new("/nonexistent/word_reader".into());
        let result = service.speak("hello", Duration::from_secs(5)).await;
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
