//! Playlist persistence
//!
//! Playlists are saved one per JSON file inside a playlists directory.
//! Saving walks the list front to back; loading rebuilds it by appending in
//! file order, so a round trip keeps the order intact.

pub mod config;
mod document;
pub mod store;

pub use config::StoreConfig;
pub use document::{PlaylistDocument, TIMESTAMP_FORMAT};
pub use store::PlaylistStore;
