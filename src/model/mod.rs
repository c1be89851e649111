//! Playlist data model
//!
//! `Track` is the stored record; `OrderedTrackList` is the ring that owns an
//! ordered sequence of them.

mod playlist;
mod track;

pub use playlist::{IntoIter, Iter, NodeHandle, OrderedList, OrderedTrackList, RingError};
pub use track::{format_mm_ss, Track};
