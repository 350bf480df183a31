use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ProcessRunner, Transcriber, TranscriberError};

use super::pocketsphinx_recognizer::PocketsphinxRecognizer;
use super::remote_client::RemoteSpeechClient;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranscriptionProvider {
    Local,
    Remote,
}

pub struct LocalRecognizerParams {
    pub binary_path: String,
    pub acoustic_model: PathBuf,
    pub language_model: PathBuf,
    pub dictionary: PathBuf,
}

pub struct RemoteSpeechParams {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub request_timeout: Duration,
}

pub struct TranscriberFactory;

impl TranscriberFactory {
    pub fn create(
        provider: TranscriptionProvider,
        runner: Arc<dyn ProcessRunner>,
        local: LocalRecognizerParams,
        remote: RemoteSpeechParams,
    ) -> Result<Arc<dyn Transcriber>, TranscriberError> {
        match provider {
            TranscriptionProvider::Local => {
                let recognizer = PocketsphinxRecognizer::new(
                    local.binary_path,
                    local.acoustic_model,
                    local.language_model,
                    local.dictionary,
                    runner,
                );
                Ok(Arc::new(recognizer))
            }
            TranscriptionProvider::Remote => {
                let key = remote
                    .api_key
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| TranscriberError::RemoteApi {
                        message: "API key required for the remote speech backend".to_string(),
                    })?;
                let client = RemoteSpeechClient::new(
                    key,
                    remote.base_url,
                    remote.model,
                    remote.request_timeout,
                );
                Ok(Arc::new(client))
            }
        }
    }
}
