mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, LocalRecognizerSettings, LoggingSettings, RemoteSpeechSettings,
    ServerSettings, Settings, StorageSettings, TranscriptionProviderSetting,
    TranscriptionSettings,
};
