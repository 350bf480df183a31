use std::path::PathBuf;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub extraction: ExtractionSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layered load: optional `appsettings.{environment}.toml`, then
    /// `APP__`-prefixed environment variables. Every field has a default,
    /// so the service boots with no configuration file at all.
    pub fn load(environment: &Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_mb: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub media_dir: PathBuf,
    pub work_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("data/media"),
            work_dir: PathBuf::from("data/work"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub ffmpeg_path: String,
    pub timeout_secs: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub local: LocalRecognizerSettings,
    pub remote: RemoteSpeechSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[default]
    Local,
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalRecognizerSettings {
    pub binary_path: String,
    pub acoustic_model: PathBuf,
    pub language_model: PathBuf,
    pub dictionary: PathBuf,
    pub timeout_secs: u64,
}

impl Default for LocalRecognizerSettings {
    fn default() -> Self {
        Self {
            binary_path: "pocketsphinx_continuous".to_string(),
            acoustic_model: PathBuf::from("models/acoustic"),
            language_model: PathBuf::from("models/language.lm.bin"),
            dictionary: PathBuf::from("models/pronunciation.dict"),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteSpeechSettings {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for RemoteSpeechSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model: None,
            request_timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}
