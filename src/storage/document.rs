//! On-disk playlist format

use crate::model::{OrderedTrackList, Track};
use serde::{Deserialize, Serialize};

/// `created_at` timestamp layout
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A saved playlist file
///
/// ```json
/// {
///   "playlist_name": "road trip",
///   "created_at": "2024-05-01 18:30:00",
///   "songs": [ { "title": "...", "artist": "...", "duration": 200 } ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistDocument {
    pub playlist_name: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub songs: Vec<Track>,
}

impl PlaylistDocument {
    /// Snapshot a playlist, front to back, stamped with the local time
    pub fn from_list(name: &str, list: &OrderedTrackList) -> Self {
        Self {
            playlist_name: name.to_string(),
            created_at: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            songs: list.iter().cloned().collect(),
        }
    }

    /// Rebuild the playlist by appending songs in file order
    pub fn into_list(self) -> OrderedTrackList {
        self.songs.into_iter().collect()
    }
}
