use std::fmt;

use uuid::Uuid;

/// Identifier of a stored media asset. Assigned once, at upload time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an identifier arriving from outside the process (URL path
    /// segments). Identifiers double as storage keys, so anything outside
    /// `[A-Za-z0-9_-]` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.len() > 64 {
            return None;
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Video container format of a stored asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Webm,
    Mp4,
    Matroska,
    QuickTime,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Webm,
        MediaKind::Mp4,
        MediaKind::Matroska,
        MediaKind::QuickTime,
    ];

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "video/webm" => Some(Self::Webm),
            "video/mp4" => Some(Self::Mp4),
            "video/x-matroska" => Some(Self::Matroska),
            "video/quicktime" => Some(Self::QuickTime),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Webm => "video/webm",
            Self::Mp4 => "video/mp4",
            Self::Matroska => "video/x-matroska",
            Self::QuickTime => "video/quicktime",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Webm => "webm",
            Self::Mp4 => "mp4",
            Self::Matroska => "mkv",
            Self::QuickTime => "mov",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.extension() == ext)
    }
}
