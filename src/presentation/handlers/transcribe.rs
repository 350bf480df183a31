use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{AudioExtractor, MediaStore, Transcriber};
use crate::application::services::TranscribeError;
use crate::domain::PipelineStage;
use crate::presentation::state::AppState;

use super::{read_video_field, ErrorResponse};

#[derive(Serialize)]
pub struct TranscribeResponse {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub transcription: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<S, E, T>(
    State(state): State<AppState<S, E, T>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    S: MediaStore + 'static,
    E: AudioExtractor + 'static,
    T: Transcriber + 'static + ?Sized,
{
    let (data, kind) = match read_video_field(&mut multipart).await {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(error = %e, "Error processing video");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Error processing video".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state
        .transcription_service
        .handle_transcribe(data, kind)
        .await
    {
        Ok(outcome) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                video_id: outcome.asset_id.to_string(),
                transcription: outcome.text,
            }),
        )
            .into_response(),
        Err(e) => {
            let stage = e.stage();
            tracing::error!(error = %e, failed_stage = %stage, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: stage_message(&e).to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Fixed human-readable strings per failed stage; component detail stays in
/// the server-side log.
fn stage_message(error: &TranscribeError) -> &'static str {
    match error.stage() {
        PipelineStage::AudioExtracted => "Error extracting audio",
        PipelineStage::Recognized => "Error transcribing audio",
        _ => "Error processing video",
    }
}
