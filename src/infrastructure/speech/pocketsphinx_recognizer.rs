use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ProcessError, ProcessRunner, Transcriber, TranscriberError};

/// Local speech recognition via an external pocketsphinx process run against
/// fixed acoustic, language and dictionary model resources. The recognized
/// text is whatever the process prints to stdout, trimmed.
pub struct PocketsphinxRecognizer {
    binary_path: String,
    acoustic_model: PathBuf,
    language_model: PathBuf,
    dictionary: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl PocketsphinxRecognizer {
    pub fn new(
        binary_path: String,
        acoustic_model: PathBuf,
        language_model: PathBuf,
        dictionary: PathBuf,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            binary_path,
            acoustic_model,
            language_model,
            dictionary,
            runner,
        }
    }

    pub async fn recognize(&self, audio_path: &Path) -> Result<String, TranscriberError> {
        let args = vec![
            "-infile".to_string(),
            audio_path.display().to_string(),
            "-hmm".to_string(),
            self.acoustic_model.display().to_string(),
            "-lm".to_string(),
            self.language_model.display().to_string(),
            "-dict".to_string(),
            self.dictionary.display().to_string(),
        ];

        tracing::debug!(audio = %audio_path.display(), "Running local recognizer");

        let output = self
            .runner
            .run(&self.binary_path, &args)
            .await
            .map_err(|e| match e {
                ProcessError::Launch { .. } => TranscriberError::Launch(e.to_string()),
                ProcessError::TimedOut { seconds, .. } => TranscriberError::TimedOut { seconds },
            })?;

        if !output.success() {
            return Err(TranscriberError::Recognition {
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        let text = output.stdout.trim().to_string();
        tracing::info!(chars = text.len(), "Local recognition completed");
        Ok(text)
    }
}

#[async_trait]
impl Transcriber for PocketsphinxRecognizer {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriberError> {
        self.recognize(audio_path).await
    }
}
