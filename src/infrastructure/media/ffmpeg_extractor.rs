use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    AudioExtractor, ExtractionError, ProcessError, ProcessRunner,
};

/// Audio extraction via an external ffmpeg process: demux the input, drop
/// the video stream, resample to mono 16kHz 16-bit PCM.
pub struct FfmpegExtractor {
    binary_path: String,
    runner: Arc<dyn ProcessRunner>,
}

impl FfmpegExtractor {
    pub fn new(binary_path: String, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            binary_path,
            runner,
        }
    }
}

#[async_trait::async_trait]
impl AudioExtractor for FfmpegExtractor {
    async fn extract(&self, video_path: &Path) -> Result<PathBuf, ExtractionError> {
        let audio_path = video_path.with_extension("wav");

        let args = vec![
            "-i".to_string(),
            video_path.display().to_string(),
            "-vn".to_string(),
            "-acodec".to_string(),
            "pcm_s16le".to_string(),
            "-ar".to_string(),
            "16000".to_string(),
            "-ac".to_string(),
            "1".to_string(),
            "-y".to_string(),
            audio_path.display().to_string(),
        ];

        tracing::debug!(video = %video_path.display(), audio = %audio_path.display(), "Extracting audio");

        let output = self
            .runner
            .run(&self.binary_path, &args)
            .await
            .map_err(|e| match e {
                ProcessError::Launch { .. } => ExtractionError::Launch(e.to_string()),
                ProcessError::TimedOut { seconds, .. } => ExtractionError::TimedOut { seconds },
            })?;

        if !output.success() {
            return Err(ExtractionError::ProcessFailed {
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        tracing::info!(audio = %audio_path.display(), "Audio extraction completed");
        Ok(audio_path)
    }
}
