mod pocketsphinx_recognizer;
mod remote_client;
mod transcriber_factory;

pub use pocketsphinx_recognizer::PocketsphinxRecognizer;
pub use remote_client::RemoteSpeechClient;
pub use transcriber_factory::{
    LocalRecognizerParams, RemoteSpeechParams, TranscriberFactory, TranscriptionProvider,
};
