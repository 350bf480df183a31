use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{AssetId, MediaKind};

/// A stored asset opened for reading: its container format plus a lazy,
/// forward-only byte stream.
pub struct MediaStream {
    pub kind: MediaKind,
    pub bytes: BoxStream<'static, Result<Bytes, io::Error>>,
}

#[async_trait::async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist `content` under a freshly generated identifier. The write is
    /// atomic from the caller's view: either the asset is fully readable
    /// afterwards or the call fails and nothing is observable under the id.
    async fn save(&self, content: Bytes, kind: MediaKind) -> Result<AssetId, MediaStoreError>;

    async fn exists(&self, id: &AssetId) -> Result<bool, MediaStoreError>;

    async fn open(&self, id: &AssetId) -> Result<MediaStream, MediaStoreError>;

    /// Identifiers of all stored assets with a known video container format.
    /// Order is unspecified but stable within one process lifetime absent
    /// concurrent writes.
    async fn list(&self) -> Result<Vec<AssetId>, MediaStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
