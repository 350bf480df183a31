use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use vidscribe::application::ports::ProcessRunner;
use vidscribe::application::services::TranscriptionService;
use vidscribe::infrastructure::media::FfmpegExtractor;
use vidscribe::infrastructure::observability::{init_tracing, TracingConfig};
use vidscribe::infrastructure::process::TokioProcessRunner;
use vidscribe::infrastructure::speech::{
    LocalRecognizerParams, RemoteSpeechParams, TranscriberFactory, TranscriptionProvider,
};
use vidscribe::infrastructure::storage::LocalMediaStore;
use vidscribe::presentation::{
    create_router, AppState, Environment, Settings, TranscriptionProviderSetting,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(&environment)?;

    init_tracing(
        TracingConfig::new(
            environment.to_string(),
            settings.logging.enable_json,
            settings.logging.level.clone(),
        ),
        settings.server.port,
    );

    let media_store = Arc::new(LocalMediaStore::new(settings.storage.media_dir.clone())?);

    let extractor_runner: Arc<dyn ProcessRunner> = Arc::new(TokioProcessRunner::new(
        Duration::from_secs(settings.extraction.timeout_secs),
    ));
    let audio_extractor = Arc::new(FfmpegExtractor::new(
        settings.extraction.ffmpeg_path.clone(),
        extractor_runner,
    ));

    let provider = match settings.transcription.provider {
        TranscriptionProviderSetting::Local => TranscriptionProvider::Local,
        TranscriptionProviderSetting::Remote => TranscriptionProvider::Remote,
    };
    let recognizer_runner: Arc<dyn ProcessRunner> = Arc::new(TokioProcessRunner::new(
        Duration::from_secs(settings.transcription.local.timeout_secs),
    ));
    let transcriber = TranscriberFactory::create(
        provider,
        recognizer_runner,
        LocalRecognizerParams {
            binary_path: settings.transcription.local.binary_path.clone(),
            acoustic_model: settings.transcription.local.acoustic_model.clone(),
            language_model: settings.transcription.local.language_model.clone(),
            dictionary: settings.transcription.local.dictionary.clone(),
        },
        RemoteSpeechParams {
            api_key: settings.transcription.remote.api_key.clone(),
            base_url: settings.transcription.remote.base_url.clone(),
            model: settings.transcription.remote.model.clone(),
            request_timeout: Duration::from_secs(
                settings.transcription.remote.request_timeout_secs,
            ),
        },
    )?;

    let transcription_service = Arc::new(TranscriptionService::new(
        media_store,
        audio_extractor,
        transcriber,
        settings.storage.work_dir.clone(),
    ));

    let state = AppState {
        transcription_service,
    };
    let router = create_router(state, settings.server.max_upload_mb * 1024 * 1024);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
