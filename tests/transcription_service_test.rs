use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;

use vidscribe::application::ports::{
    AudioExtractor, ExtractionError, MediaStore, MediaStoreError, MediaStream, Transcriber,
    TranscriberError,
};
use vidscribe::application::services::{TranscribeError, TranscriptionService};
use vidscribe::domain::{AssetId, MediaKind, PipelineStage};
use vidscribe::infrastructure::storage::LocalMediaStore;

struct StubExtractor;

#[async_trait::async_trait]
impl AudioExtractor for StubExtractor {
    async fn extract(&self, video_path: &Path) -> Result<PathBuf, ExtractionError> {
        let audio_path = video_path.with_extension("wav");
        tokio::fs::write(&audio_path, b"fake pcm")
            .await
            .map_err(|e| ExtractionError::Launch(e.to_string()))?;
        Ok(audio_path)
    }
}

struct FailingExtractor;

#[async_trait::async_trait]
impl AudioExtractor for FailingExtractor {
    async fn extract(&self, _video_path: &Path) -> Result<PathBuf, ExtractionError> {
        Err(ExtractionError::ProcessFailed {
            exit_code: 1,
            stderr: "demux failed".to_string(),
        })
    }
}

struct RecordingTranscriber {
    called: AtomicBool,
    text: &'static str,
}

impl RecordingTranscriber {
    fn new(text: &'static str) -> Self {
        Self {
            called: AtomicBool::new(false),
            text,
        }
    }
}

#[async_trait::async_trait]
impl Transcriber for RecordingTranscriber {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriberError> {
        self.called.store(true, Ordering::SeqCst);
        Ok(self.text.to_string())
    }
}

struct FailingTranscriber;

#[async_trait::async_trait]
impl Transcriber for FailingTranscriber {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriberError> {
        Err(TranscriberError::Recognition {
            exit_code: 1,
            stderr: "decoder error".to_string(),
        })
    }
}

struct FailingStore;

#[async_trait::async_trait]
impl MediaStore for FailingStore {
    async fn save(&self, _content: Bytes, _kind: MediaKind) -> Result<AssetId, MediaStoreError> {
        Err(MediaStoreError::WriteFailed("disk full".to_string()))
    }

    async fn exists(&self, _id: &AssetId) -> Result<bool, MediaStoreError> {
        Ok(false)
    }

    async fn open(&self, id: &AssetId) -> Result<MediaStream, MediaStoreError> {
        Err(MediaStoreError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<AssetId>, MediaStoreError> {
        Ok(Vec::new())
    }
}

fn test_dirs() -> (tempfile::TempDir, tempfile::TempDir) {
    (
        tempfile::TempDir::new().unwrap(),
        tempfile::TempDir::new().unwrap(),
    )
}

#[tokio::test]
async fn given_working_pipeline_when_transcribing_then_returns_text_and_persists_asset() {
    let (media_dir, work_dir) = test_dirs();
    let store = Arc::new(LocalMediaStore::new(media_dir.path().to_path_buf()).unwrap());
    let transcriber = Arc::new(RecordingTranscriber::new("hello world"));
    let service = TranscriptionService::new(
        Arc::clone(&store),
        Arc::new(StubExtractor),
        Arc::clone(&transcriber),
        work_dir.path().to_path_buf(),
    );

    let outcome = service
        .handle_transcribe(Bytes::from_static(b"fake video"), MediaKind::Webm)
        .await
        .unwrap();

    assert_eq!(outcome.text, "hello world");
    assert!(transcriber.called.load(Ordering::SeqCst));
    assert!(store.exists(&outcome.asset_id).await.unwrap());
}

#[tokio::test]
async fn given_working_pipeline_when_transcribing_then_scratch_files_are_removed() {
    let (media_dir, work_dir) = test_dirs();
    let store = Arc::new(LocalMediaStore::new(media_dir.path().to_path_buf()).unwrap());
    let service = TranscriptionService::new(
        store,
        Arc::new(StubExtractor),
        Arc::new(RecordingTranscriber::new("hello")),
        work_dir.path().to_path_buf(),
    );

    service
        .handle_transcribe(Bytes::from_static(b"fake video"), MediaKind::Webm)
        .await
        .unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(work_dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "scratch files left behind: {:?}", leftovers);
}

#[tokio::test]
async fn given_failing_extractor_when_transcribing_then_skips_recognition() {
    let (media_dir, work_dir) = test_dirs();
    let store = Arc::new(LocalMediaStore::new(media_dir.path().to_path_buf()).unwrap());
    let transcriber = Arc::new(RecordingTranscriber::new("unused"));
    let service = TranscriptionService::new(
        store,
        Arc::new(FailingExtractor),
        Arc::clone(&transcriber),
        work_dir.path().to_path_buf(),
    );

    let error = service
        .handle_transcribe(Bytes::from_static(b"fake video"), MediaKind::Webm)
        .await
        .unwrap_err();

    assert_eq!(error.stage(), PipelineStage::AudioExtracted);
    assert!(matches!(error, TranscribeError::Extraction(_)));
    assert!(!transcriber.called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn given_failing_transcriber_when_transcribing_then_fails_entering_recognized() {
    let (media_dir, work_dir) = test_dirs();
    let store = Arc::new(LocalMediaStore::new(media_dir.path().to_path_buf()).unwrap());
    let service = TranscriptionService::new(
        store,
        Arc::new(StubExtractor),
        Arc::new(FailingTranscriber),
        work_dir.path().to_path_buf(),
    );

    let error = service
        .handle_transcribe(Bytes::from_static(b"fake video"), MediaKind::Webm)
        .await
        .unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Recognized);
}

#[tokio::test]
async fn given_failing_store_when_transcribing_then_fails_entering_stored() {
    let (_media_dir, work_dir) = test_dirs();
    let service = TranscriptionService::new(
        Arc::new(FailingStore),
        Arc::new(StubExtractor),
        Arc::new(RecordingTranscriber::new("unused")),
        work_dir.path().to_path_buf(),
    );

    let error = service
        .handle_transcribe(Bytes::from_static(b"fake video"), MediaKind::Webm)
        .await
        .unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Stored);
}

#[tokio::test]
async fn given_uploaded_videos_when_listing_then_all_ids_are_returned() {
    let (media_dir, work_dir) = test_dirs();
    let store = Arc::new(LocalMediaStore::new(media_dir.path().to_path_buf()).unwrap());
    let service = TranscriptionService::new(
        Arc::clone(&store),
        Arc::new(StubExtractor),
        Arc::new(RecordingTranscriber::new("unused")),
        work_dir.path().to_path_buf(),
    );

    let first = service
        .handle_upload(Bytes::from_static(b"one"), MediaKind::Webm)
        .await
        .unwrap();
    let second = service
        .handle_upload(Bytes::from_static(b"two"), MediaKind::Mp4)
        .await
        .unwrap();

    let listed = service.list_videos().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&first));
    assert!(listed.contains(&second));
}
