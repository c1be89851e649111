//! Track catalog
//!
//! Catalog sources hand out owned copies of tracks that callers can merge
//! into a playlist. Only a static mock catalog ships; the trait keeps the
//! door open for other sources.

mod mock;
mod traits;

pub use mock::MockCatalog;
pub use traits::CatalogSource;

use crate::model::{OrderedTrackList, Track};

/// Append fetched tracks to the end of a playlist, returning how many were added
pub fn merge_into(list: &mut OrderedTrackList, tracks: impl IntoIterator<Item = Track>) -> usize {
    let before = list.len();
    list.extend(tracks);
    let added = list.len() - before;
    log::debug!("Merged {} catalog tracks into playlist", added);
    added
}
