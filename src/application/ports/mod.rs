mod audio_extractor;
mod media_store;
mod process_runner;
mod transcriber;

pub use audio_extractor::{AudioExtractor, ExtractionError};
pub use media_store::{MediaStore, MediaStoreError, MediaStream};
pub use process_runner::{ProcessError, ProcessOutput, ProcessRunner};
pub use transcriber::{Transcriber, TranscriberError};
