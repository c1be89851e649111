use crate::error::{PlaylistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single playlist entry
///
/// Tracks are immutable once built. Two tracks with the same fields compare
/// equal; use a [`NodeHandle`](super::NodeHandle) to tell duplicates apart
/// inside a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTrack")]
pub struct Track {
    /// Track title
    title: String,

    /// Artist name
    artist: String,

    /// Track duration in seconds (always > 0)
    #[serde(rename = "duration")]
    duration_seconds: u32,
}

/// Unvalidated on-disk form, checked by `Track::new` on the way in
#[derive(Deserialize)]
struct RawTrack {
    title: String,
    artist: String,
    duration: u32,
}

impl TryFrom<RawTrack> for Track {
    type Error = PlaylistError;

    fn try_from(raw: RawTrack) -> Result<Self> {
        Track::new(raw.title, raw.artist, raw.duration)
    }
}

impl Track {
    /// Create a track, rejecting a zero duration
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_seconds: u32,
    ) -> Result<Self> {
        let title = title.into();
        if duration_seconds == 0 {
            return Err(PlaylistError::InvalidDuration { title });
        }

        Ok(Self {
            title,
            artist: artist.into(),
            duration_seconds,
        })
    }

    /// Track title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist name
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Duration as `MM:SS`
    pub fn formatted_duration(&self) -> String {
        format_mm_ss(u64::from(self.duration_seconds))
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.title, self.artist, self.duration_seconds)
    }
}

/// Render a second count as zero-padded `MM:SS`
///
/// Minutes keep growing past 99, so playlist totals render as e.g. `1234:05`.
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
