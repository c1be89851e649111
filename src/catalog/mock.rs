//! Static catalog used in place of a remote music service

use super::traits::CatalogSource;
use crate::model::Track;

/// Title, artist and duration (seconds) of every catalog entry
const MOCK_TRACKS: [(&str, &str, u32); 10] = [
    ("Blinding Lights", "The Weeknd", 200),
    ("Shape of You", "Ed Sheeran", 233),
    ("Someone Like You", "Adele", 285),
    ("Bad Guy", "Billie Eilish", 194),
    ("Perfect", "Ed Sheeran", 263),
    ("Uptown Funk", "Bruno Mars", 269),
    ("Levitating", "Dua Lipa", 203),
    ("Anti-Hero", "Taylor Swift", 228),
    ("Heat Waves", "Glass Animals", 239),
    ("As It Was", "Harry Styles", 183),
];

/// Catalog backed by a fixed list of popular songs
pub struct MockCatalog;

impl MockCatalog {
    /// Catalog over the built-in track table
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for MockCatalog {
    fn popular(&self) -> Vec<Track> {
        MOCK_TRACKS
            .iter()
            .filter_map(|&(title, artist, duration)| Track::new(title, artist, duration).ok())
            .collect()
    }
}
