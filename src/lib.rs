//! Playlist Manager - console playlist management
//!
//! This library keeps an ordered playlist of tracks in a circular doubly
//! linked list, merges tracks from a mock catalog, tracks playback state,
//! and saves/loads playlists as JSON files.

pub mod catalog;
pub mod error;
pub mod model;
pub mod playback;
pub mod storage;

pub use error::{PlaylistError, Result};
pub use model::{NodeHandle, OrderedList, OrderedTrackList, Track};
pub use storage::{PlaylistStore, StoreConfig};
