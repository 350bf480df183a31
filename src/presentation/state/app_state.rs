use std::sync::Arc;

use crate::application::ports::{AudioExtractor, MediaStore, Transcriber};
use crate::application::services::TranscriptionService;

pub struct AppState<S, E, T: ?Sized>
where
    S: MediaStore,
    E: AudioExtractor,
    T: Transcriber,
{
    pub transcription_service: Arc<TranscriptionService<S, E, T>>,
}

impl<S, E, T: ?Sized> Clone for AppState<S, E, T>
where
    S: MediaStore,
    E: AudioExtractor,
    T: Transcriber,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
        }
    }
}
