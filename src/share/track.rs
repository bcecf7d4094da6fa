//! Track snapshot
//!
//!     The read-only set of metadata known about the item being shared. Title, artist and
//!     album are always present (possibly empty); composer and source url may be absent.
//!     Callers build a fresh snapshot for each render.

pub mod spotify;

use super::error::ShareError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl TrackSnapshot {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            composer: None,
            source_url: None,
        }
    }

    pub fn with_composer(mut self, composer: impl Into<String>) -> Self {
        self.composer = Some(composer.into());
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Decode a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        serde_json::from_str(json).map_err(|e| ShareError::InvalidTrack(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_optional_fields() {
        let track =
            TrackSnapshot::from_json(r#"{"title":"Song","artist":"Band","album":"Record"}"#)
                .unwrap();
        assert_eq!(track, TrackSnapshot::new("Song", "Band", "Record"));
    }

    #[test]
    fn test_from_json_all_fields() {
        let track = TrackSnapshot::from_json(
            r#"{"title":"Song","artist":"Band","album":"Record","composer":"Writer","source_url":"https://example.com/t/1"}"#,
        )
        .unwrap();
        assert_eq!(track.composer.as_deref(), Some("Writer"));
        assert_eq!(track.source_url.as_deref(), Some("https://example.com/t/1"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = TrackSnapshot::from_json("{").unwrap_err();
        assert!(matches!(err, ShareError::InvalidTrack(_)));
    }
}
