mod transcription_service;

pub use transcription_service::{TranscribeError, TranscriptionOutcome, TranscriptionService};
