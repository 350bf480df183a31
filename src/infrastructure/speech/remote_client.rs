use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{Transcriber, TranscriberError};

#[derive(serde::Deserialize)]
struct TranscriptionBody {
    text: String,
}

/// Client for a remote speech API exposing `POST {base}/transcriptions` and
/// `POST {base}/translations`, multipart-encoded, bearer-authenticated,
/// returning `{"text": ...}` on success and `{"error": ...}` on failure.
/// Endpoint and credential are fixed at construction; the wire contract
/// (field names, endpoint suffixes, auth header) must not change.
pub struct RemoteSpeechClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    request_timeout: Duration,
}

impl RemoteSpeechClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1/audio".to_string()),
            api_key,
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            request_timeout,
        }
    }

    /// Transcribe the audio file in its source language.
    pub async fn transcribe(
        &self,
        file_path: &Path,
        model: &str,
    ) -> Result<String, TranscriberError> {
        self.submit("transcriptions", file_path, model, None).await
    }

    /// Transcribe and translate the audio file into `target_language`.
    pub async fn translate(
        &self,
        file_path: &Path,
        model: &str,
        target_language: &str,
    ) -> Result<String, TranscriberError> {
        self.submit("translations", file_path, model, Some(target_language))
            .await
    }

    async fn submit(
        &self,
        endpoint: &str,
        file_path: &Path,
        model: &str,
        target_language: Option<&str>,
    ) -> Result<String, TranscriberError> {
        let audio = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());

        let file_part = multipart::Part::bytes(audio)
            .file_name(file_name)
            .mime_str("audio/wav")
            .map_err(|e| TranscriberError::RemoteApi {
                message: format!("mime: {}", e),
            })?;

        let mut form = multipart::Form::new()
            .text("model", model.to_string())
            .part("file", file_part);
        if let Some(language) = target_language {
            form = form.text("target_language", language.to_string());
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(url = %url, model = %model, "Sending audio to speech API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.request_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriberError::RemoteApi {
                message: format!("request: {}", e),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranscriberError::RemoteApi {
                message: format!("body: {}", e),
            })?;

        if !status.is_success() {
            let message = provider_error_message(&body)
                .unwrap_or_else(|| format!("status {}", status));
            return Err(TranscriberError::RemoteApi { message });
        }

        let decoded: TranscriptionBody =
            serde_json::from_str(&body).map_err(|_| TranscriberError::RemoteApi {
                message: "malformed response body".to_string(),
            })?;

        tracing::info!(chars = decoded.text.len(), "Speech API request completed");
        Ok(decoded.text)
    }
}

/// Pull the human-readable message out of a provider error payload. Both
/// `{"error": "..."}` and `{"error": {"message": "..."}}` shapes occur.
fn provider_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("error")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(o) => o.get("message")?.as_str().map(str::to_string),
        _ => None,
    }
}

#[async_trait]
impl Transcriber for RemoteSpeechClient {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriberError> {
        RemoteSpeechClient::transcribe(self, audio_path, &self.model).await
    }
}
