//! Catalog trait definition

use crate::model::Track;

/// Source of tracks that can be browsed and searched
///
/// Implementors only need to provide [`popular`](CatalogSource::popular);
/// the lookups default to filtering that list.
pub trait CatalogSource {
    /// Every track the source knows about, in catalog order
    fn popular(&self) -> Vec<Track>;

    /// Tracks whose title contains `query`, ignoring case
    fn search_title(&self, query: &str) -> Vec<Track> {
        log::info!("Searching songs: '{}'", query);
        let results = filter_folded(self.popular(), query, Track::title);
        report(&results, query);
        results
    }

    /// Tracks whose artist contains `query`, ignoring case
    fn search_artist(&self, query: &str) -> Vec<Track> {
        log::info!("Searching songs by artist: '{}'", query);
        let results = filter_folded(self.popular(), query, Track::artist);
        report(&results, query);
        results
    }

    /// Currently trending tracks (the top five)
    fn trending(&self) -> Vec<Track> {
        log::info!("Fetching trending songs");
        self.popular().into_iter().take(5).collect()
    }

    /// Suggestions for a genre
    ///
    /// Tracks carry no genre, so every genre gets the top three.
    fn recommendations(&self, genre: &str) -> Vec<Track> {
        log::info!("Getting recommendations for genre: '{}'", genre);
        self.popular().into_iter().take(3).collect()
    }
}

fn filter_folded(tracks: Vec<Track>, query: &str, field: fn(&Track) -> &str) -> Vec<Track> {
    let query = query.to_lowercase();
    tracks
        .into_iter()
        .filter(|track| field(track).to_lowercase().contains(&query))
        .collect()
}

fn report(results: &[Track], query: &str) {
    if results.is_empty() {
        log::warn!("No songs found matching: '{}'", query);
    } else {
        log::info!("Found {} songs", results.len());
    }
}
