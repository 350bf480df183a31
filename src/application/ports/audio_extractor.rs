use std::path::{Path, PathBuf};

/// Derives a mono 16kHz 16-bit PCM audio file from a video file.
#[async_trait::async_trait]
pub trait AudioExtractor: Send + Sync {
    /// Write the audio track of `video_path` to a fresh path derived from it
    /// and return that path.
    async fn extract(&self, video_path: &Path) -> Result<PathBuf, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("transcoder exited with status {exit_code}: {stderr}")]
    ProcessFailed { exit_code: i32, stderr: String },
    #[error("failed to launch transcoder: {0}")]
    Launch(String),
    #[error("transcoder timed out after {seconds}s")]
    TimedOut { seconds: u64 },
}
