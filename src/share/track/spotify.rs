//! Streaming-service "currently playing" payload
//!
//!     Decodes the JSON body of the player endpoint into a [TrackSnapshot]. Fetching the body
//!     (authorization, HTTP) belongs to the caller. Only the fields the share text uses are
//!     read; everything else in the payload is ignored.

use super::TrackSnapshot;
use crate::share::error::ShareError;
use serde::Deserialize;
use std::collections::HashMap;

/// Key of the external url used as the source url.
const EXTERNAL_URL_KEY: &str = "spotify";

#[derive(Debug, Clone, Deserialize)]
pub struct NowPlayingPayload {
    pub item: PlayingItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayingItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    pub album: PlayingAlbum,
    #[serde(default)]
    pub artists: Vec<PlayingArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayingAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayingArtist {
    pub name: String,
}

impl NowPlayingPayload {
    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        serde_json::from_str(json).map_err(|e| ShareError::InvalidTrack(e.to_string()))
    }
}

impl From<NowPlayingPayload> for TrackSnapshot {
    fn from(payload: NowPlayingPayload) -> Self {
        let PlayingItem {
            name,
            mut external_urls,
            album,
            artists,
            ..
        } = payload.item;
        let artist = artists
            .into_iter()
            .map(|a| a.name)
            .collect::<Vec<_>>()
            .join(", ");
        TrackSnapshot {
            title: name,
            artist,
            album: album.name,
            composer: None,
            source_url: external_urls.remove(EXTERNAL_URL_KEY),
        }
    }
}

/// Decode a player payload straight into a snapshot.
pub fn snapshot_from_json(json: &str) -> Result<TrackSnapshot, ShareError> {
    NowPlayingPayload::from_json(json).map(TrackSnapshot::from)
}
