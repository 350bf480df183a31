use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{AudioExtractor, MediaStore, MediaStoreError, Transcriber};
use crate::domain::AssetId;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[tracing::instrument(skip(state))]
pub async fn list_videos_handler<S, E, T>(
    State(state): State<AppState<S, E, T>>,
) -> impl IntoResponse
where
    S: MediaStore + 'static,
    E: AudioExtractor + 'static,
    T: Transcriber + 'static + ?Sized,
{
    match state.transcription_service.list_videos().await {
        Ok(ids) => {
            let ids: Vec<String> = ids.into_iter().map(|id| id.to_string()).collect();
            (StatusCode::OK, Json(ids)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching video list");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Error fetching video list".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn fetch_video_handler<S, E, T>(
    State(state): State<AppState<S, E, T>>,
    Path(video_id): Path<String>,
) -> impl IntoResponse
where
    S: MediaStore + 'static,
    E: AudioExtractor + 'static,
    T: Transcriber + 'static + ?Sized,
{
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                message: "Video not found".to_string(),
            }),
        )
            .into_response()
    };

    let Some(asset_id) = AssetId::parse(&video_id) else {
        tracing::warn!(video_id = %video_id, "Malformed video identifier");
        return not_found();
    };

    match state.transcription_service.fetch_video(&asset_id).await {
        Ok(media) => (
            [(header::CONTENT_TYPE, media.kind.as_mime())],
            Body::from_stream(media.bytes),
        )
            .into_response(),
        Err(MediaStoreError::NotFound(_)) => {
            tracing::warn!(video_id = %video_id, "Video not found");
            not_found()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error serving video");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "Error serving video".to_string(),
                }),
            )
                .into_response()
        }
    }
}
