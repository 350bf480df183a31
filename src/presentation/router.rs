use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioExtractor, MediaStore, Transcriber};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    fetch_video_handler, health_handler, list_videos_handler, transcribe_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<S, E, T>(state: AppState<S, E, T>, max_upload_bytes: usize) -> Router
where
    S: MediaStore + 'static,
    E: AudioExtractor + 'static,
    T: Transcriber + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/upload", post(upload_handler::<S, E, T>))
        .route("/api/transcribe", post(transcribe_handler::<S, E, T>))
        .route("/api/videos", get(list_videos_handler::<S, E, T>))
        .route("/api/videos/{video_id}", get(fetch_video_handler::<S, E, T>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
