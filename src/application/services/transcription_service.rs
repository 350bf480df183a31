use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AudioExtractor, ExtractionError, MediaStore, MediaStoreError, MediaStream, Transcriber,
    TranscriberError,
};
use crate::domain::{AssetId, MediaKind, PipelineStage, StoragePath};

#[derive(Debug)]
pub struct TranscriptionOutcome {
    pub asset_id: AssetId,
    pub text: String,
}

/// Orchestrates one transcription request as a strictly linear pipeline:
/// store the upload, spool it to the request's scratch workspace, extract
/// the audio track, run the configured transcription backend. There is no
/// partial success; a failed request is retried from the beginning by the
/// caller.
pub struct TranscriptionService<S, E, T: ?Sized>
where
    S: MediaStore,
    E: AudioExtractor,
    T: Transcriber,
{
    media_store: Arc<S>,
    audio_extractor: Arc<E>,
    transcriber: Arc<T>,
    work_dir: PathBuf,
}

impl<S, E, T: ?Sized> TranscriptionService<S, E, T>
where
    S: MediaStore,
    E: AudioExtractor,
    T: Transcriber,
{
    pub fn new(
        media_store: Arc<S>,
        audio_extractor: Arc<E>,
        transcriber: Arc<T>,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            media_store,
            audio_extractor,
            transcriber,
            work_dir,
        }
    }

    pub async fn handle_upload(
        &self,
        content: Bytes,
        kind: MediaKind,
    ) -> Result<AssetId, MediaStoreError> {
        let size = content.len();
        let asset_id = self.media_store.save(content, kind).await?;
        tracing::info!(asset_id = %asset_id, bytes = size, "Video stored");
        Ok(asset_id)
    }

    pub async fn handle_transcribe(
        &self,
        content: Bytes,
        kind: MediaKind,
    ) -> Result<TranscriptionOutcome, TranscribeError> {
        let asset_id = self.media_store.save(content.clone(), kind).await?;
        tracing::debug!(asset_id = %asset_id, stage = %PipelineStage::Stored, "Stage reached");

        let video_path = self
            .spool(&asset_id, kind, &content)
            .await
            .map_err(TranscribeError::Workspace)?;

        let extraction = self.audio_extractor.extract(&video_path).await;
        let audio_path = match extraction {
            Ok(p) => p,
            Err(e) => {
                self.discard_scratch(&[&video_path]).await;
                return Err(e.into());
            }
        };
        tracing::debug!(asset_id = %asset_id, stage = %PipelineStage::AudioExtracted, "Stage reached");

        let recognized = self.transcriber.transcribe(&audio_path).await;
        self.discard_scratch(&[&video_path, &audio_path]).await;
        let text = recognized?;
        tracing::debug!(asset_id = %asset_id, stage = %PipelineStage::Recognized, "Stage reached");

        tracing::info!(
            asset_id = %asset_id,
            chars = text.len(),
            stage = %PipelineStage::Completed,
            "Transcription completed"
        );
        Ok(TranscriptionOutcome { asset_id, text })
    }

    pub async fn list_videos(&self) -> Result<Vec<AssetId>, MediaStoreError> {
        self.media_store.list().await
    }

    pub async fn fetch_video(&self, id: &AssetId) -> Result<MediaStream, MediaStoreError> {
        self.media_store.open(id).await
    }

    /// Write the uploaded bytes into the request-owned scratch workspace so
    /// the external transcoder has a filesystem path to read from.
    async fn spool(
        &self,
        id: &AssetId,
        kind: MediaKind,
        content: &Bytes,
    ) -> Result<PathBuf, std::io::Error> {
        tokio::fs::create_dir_all(&self.work_dir).await?;
        let path = self.work_dir.join(StoragePath::new(id, kind).as_str());
        tokio::fs::write(&path, content).await?;
        Ok(path)
    }

    /// Scratch files are owned by the request that created them; removal is
    /// best-effort and never affects the response.
    async fn discard_scratch(&self, paths: &[&Path]) {
        for path in paths {
            if let Err(e) = tokio::fs::remove_file(path).await {
                tracing::debug!(path = %path.display(), error = %e, "Scratch file not removed");
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("storing upload: {0}")]
    Storage(#[from] MediaStoreError),
    #[error("spooling upload for extraction: {0}")]
    Workspace(std::io::Error),
    #[error("extracting audio: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("recognizing speech: {0}")]
    Recognition(#[from] TranscriberError),
}

impl TranscribeError {
    /// The stage the pipeline was entering when it failed.
    pub fn stage(&self) -> PipelineStage {
        match self {
            TranscribeError::Storage(_) => PipelineStage::Stored,
            TranscribeError::Workspace(_) | TranscribeError::Extraction(_) => {
                PipelineStage::AudioExtracted
            }
            TranscribeError::Recognition(_) => PipelineStage::Recognized,
        }
    }
}
