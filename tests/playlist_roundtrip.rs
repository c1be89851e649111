use playlist_manager::catalog::{merge_into, CatalogSource, MockCatalog};
use playlist_manager::playback::{PlaybackState, Player};
use playlist_manager::{OrderedTrackList, PlaylistError, PlaylistStore, StoreConfig, Track};
use std::fs;
use tempfile::TempDir;

/// Build the playlist from the walkthrough: Bad Guy, Blinding Lights, Perfect
fn create_test_playlist() -> OrderedTrackList {
    let mut list = OrderedTrackList::new();
    list.add_last(Track::new("Blinding Lights", "The Weeknd", 200).unwrap());
    list.add_last(Track::new("Perfect", "Ed Sheeran", 263).unwrap());
    list.add_first(Track::new("Bad Guy", "Billie Eilish", 194).unwrap());
    list
}

fn triples(list: &OrderedTrackList) -> Vec<(String, String, u32)> {
    list.iter()
        .map(|t| (t.title().to_string(), t.artist().to_string(), t.duration_seconds()))
        .collect()
}

#[test]
fn test_walkthrough() {
    let mut list = create_test_playlist();
    assert_eq!(
        list.iter().map(|t| t.title()).collect::<Vec<_>>(),
        ["Bad Guy", "Blinding Lights", "Perfect"]
    );

    assert!(list.remove_last());
    assert_eq!(
        list.iter().map(|t| t.title()).collect::<Vec<_>>(),
        ["Bad Guy", "Blinding Lights"]
    );
    assert!(list.get_at(5).is_none());
    list.verify().unwrap();
}

#[test]
fn test_store_round_trip_preserves_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = PlaylistStore::new(StoreConfig::new(temp_dir.path().join("Playlists")));

    let mut list = create_test_playlist();
    merge_into(&mut list, MockCatalog::new().search_artist("ed sheeran"));
    list.add_at(Track::new("Interlude", "Nobody", 42).unwrap(), 2);

    store.save("road trip", &list).expect("save failed");
    let loaded = store.load("road trip").expect("load failed");

    assert_eq!(triples(&loaded), triples(&list));
    assert_eq!(loaded.get_at(2).unwrap().title(), "Interlude");
    loaded.verify().unwrap();

    // Field names on disk
    let text = fs::read_to_string(store.path_for("road trip").unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["playlist_name"], "road trip");
    assert_eq!(json["songs"][0]["title"], "Bad Guy");
    assert_eq!(json["songs"][0]["duration"], 194);
    assert_eq!(json["songs"].as_array().unwrap().len(), list.len());
}

#[test]
fn test_empty_playlist_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = PlaylistStore::new(StoreConfig::new(temp_dir.path().to_path_buf()));

    store.save("empty", &OrderedTrackList::new()).unwrap();
    let loaded = store.load("empty").unwrap();
    assert!(loaded.is_empty());
    assert_eq!(store.list().unwrap(), ["empty"]);
}

#[test]
fn test_missing_directory_lists_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = PlaylistStore::new(StoreConfig::new(temp_dir.path().join("absent")));

    assert!(store.list().unwrap().is_empty());
    assert!(matches!(store.load("x"), Err(PlaylistError::NotFound(_))));
}

#[test]
fn test_play_then_edit_playlist() {
    let mut list = create_test_playlist();
    let mut player = Player::new();

    assert!(player.play_from(&list, 1));
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current().unwrap().title(), "Blinding Lights");

    list.clear();
    assert!(list.is_empty());
    assert!(!player.still_in(&list));
    assert_eq!(player.current().unwrap().title(), "Blinding Lights");
}

#[test]
fn test_large_playlist_clear() {
    let mut list = OrderedTrackList::new();
    let catalog = MockCatalog::new().popular();
    for i in 0..10_000 {
        list.add_last(catalog[i % catalog.len()].clone());
    }
    assert_eq!(list.len(), 10_000);
    assert_eq!(list.iter().count(), 10_000);

    assert_eq!(list.clear(), 10_000);
    assert!(list.is_empty());
    list.verify().unwrap();
}
