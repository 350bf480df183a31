use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{MediaStore, MediaStoreError, MediaStream};
use crate::domain::{AssetId, MediaKind, StoragePath};

/// Filesystem-backed media store. Writes go through the object store's
/// staged-put, so an asset is either fully readable under its key or absent.
pub struct LocalMediaStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalMediaStore {
    pub fn new(base_path: PathBuf) -> Result<Self, MediaStoreError> {
        std::fs::create_dir_all(&base_path).map_err(MediaStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| MediaStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    /// Assets are keyed by `{id}.{extension}`, with the extension unknown at
    /// read time. Probe the known container formats for the one that exists.
    async fn resolve(&self, id: &AssetId) -> Result<Option<(StoragePath, MediaKind)>, MediaStoreError> {
        for kind in MediaKind::ALL {
            let path = StoragePath::new(id, kind);
            match self.inner.head(&StorePath::from(path.as_str())).await {
                Ok(_) => return Ok(Some((path, kind))),
                Err(object_store::Error::NotFound { .. }) => continue,
                Err(e) => return Err(MediaStoreError::ReadFailed(e.to_string())),
            }
        }
        Ok(None)
    }
}

#[async_trait::async_trait]
impl MediaStore for LocalMediaStore {
    async fn save(&self, content: Bytes, kind: MediaKind) -> Result<AssetId, MediaStoreError> {
        let id = AssetId::generate();
        let path = StoragePath::new(&id, kind);
        self.inner
            .put(&StorePath::from(path.as_str()), PutPayload::from(content))
            .await
            .map_err(|e| MediaStoreError::WriteFailed(e.to_string()))?;
        Ok(id)
    }

    async fn exists(&self, id: &AssetId) -> Result<bool, MediaStoreError> {
        Ok(self.resolve(id).await?.is_some())
    }

    async fn open(&self, id: &AssetId) -> Result<MediaStream, MediaStoreError> {
        let (path, kind) = self
            .resolve(id)
            .await?
            .ok_or_else(|| MediaStoreError::NotFound(id.to_string()))?;

        let result = self
            .inner
            .get(&StorePath::from(path.as_str()))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => MediaStoreError::NotFound(id.to_string()),
                other => MediaStoreError::ReadFailed(other.to_string()),
            })?;

        let bytes = result.into_stream().map(|chunk| chunk.map_err(io::Error::other));

        Ok(MediaStream {
            kind,
            bytes: Box::pin(bytes),
        })
    }

    async fn list(&self) -> Result<Vec<AssetId>, MediaStoreError> {
        let mut entries = self.inner.list(None);
        let mut ids = Vec::new();
        while let Some(meta) = entries.next().await {
            let meta = meta.map_err(|e| MediaStoreError::ReadFailed(e.to_string()))?;
            if let Some(name) = meta.location.filename() {
                if let Some((id, _)) = StoragePath::parse(name) {
                    ids.push(id);
                }
            }
        }
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(ids)
    }
}
