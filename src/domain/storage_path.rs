use std::fmt;

use super::asset::{AssetId, MediaKind};

/// Storage key of a media asset: `{asset_id}.{extension}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(id: &AssetId, kind: MediaKind) -> Self {
        Self(format!("{}.{}", id.as_str(), kind.extension()))
    }

    /// Inverse of `new`, used when enumerating the store. Keys that do not
    /// carry a known video extension yield `None`.
    pub fn parse(key: &str) -> Option<(AssetId, MediaKind)> {
        let (stem, ext) = key.rsplit_once('.')?;
        let kind = MediaKind::from_extension(ext)?;
        let id = AssetId::parse(stem)?;
        Some((id, kind))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
