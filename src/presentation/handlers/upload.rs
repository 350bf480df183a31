use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{AudioExtractor, MediaStore, Transcriber};
use crate::presentation::state::AppState;

use super::{read_video_field, ErrorResponse};

#[derive(Serialize)]
pub struct UploadResponse {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<S, E, T>(
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
            tracing::error!(error = %e, "Error uploading video");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Error uploading video".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.transcription_service.handle_upload(data, kind).await {
        Ok(asset_id) => (
            StatusCode::OK,
            Json(UploadResponse {
                video_id: asset_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error uploading video");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Error uploading video".to_string(),
                }),
            )
                .into_response()
        }
    }
}
