use std::io;
use std::path::Path;

/// Produces a text transcription from an audio file. Exactly two adapters
/// exist: the local process-based recognizer and the remote speech API
/// client. The choice is made once, at service construction.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriberError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    #[error("recognizer exited with status {exit_code}: {stderr}")]
    Recognition { exit_code: i32, stderr: String },
    #[error("failed to launch recognizer: {0}")]
    Launch(String),
    #[error("recognizer timed out after {seconds}s")]
    TimedOut { seconds: u64 },
    #[error("speech api: {message}")]
    RemoteApi { message: String },
    #[error("audio file unreadable: {0}")]
    Io(#[from] io::Error),
}
