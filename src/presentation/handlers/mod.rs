mod health;
mod transcribe;
mod upload;
mod videos;

pub use health::health_handler;
pub use transcribe::transcribe_handler;
pub use upload::upload_handler;
pub use videos::{fetch_video_handler, list_videos_handler};

use axum::extract::Multipart;
use bytes::Bytes;
use serde::Serialize;

use crate::domain::MediaKind;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Pull the `video` part out of a multipart upload. Uploads without a
/// recognized video content type are stored as WebM.
pub(super) async fn read_video_field(
    multipart: &mut Multipart,
) -> Result<(Bytes, MediaKind), String> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => return Err("no video file in request".to_string()),
            Err(e) => return Err(format!("failed to read multipart body: {}", e)),
        };

        if field.name() != Some("video") {
            continue;
        }

        let kind = field
            .content_type()
            .and_then(MediaKind::from_mime)
            .unwrap_or(MediaKind::Webm);

        let data = field
            .bytes()
            .await
            .map_err(|e| format!("failed to read video bytes: {}", e))?;

        return Ok((data, kind));
    }
}
