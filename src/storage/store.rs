//! Playlist files on disk

use super::config::StoreConfig;
use super::document::PlaylistDocument;
use crate::error::{PlaylistError, Result};
use crate::model::OrderedTrackList;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const EXTENSION: &str = "json";

/// Saves, loads and lists playlists in one directory
pub struct PlaylistStore {
    config: StoreConfig,
}

impl PlaylistStore {
    /// Store backed by `config.playlists_dir`
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Directory holding the playlist files
    pub fn dir(&self) -> &Path {
        &self.config.playlists_dir
    }

    /// Create the playlists directory if needed
    pub fn init(&self) -> Result<()> {
        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
            log::info!("Playlists directory created at {:?}", dir);
        }
        Ok(())
    }

    /// Path of the file backing playlist `name`
    ///
    /// Names become file stems, so they may not be empty, `.`/`..`, or
    /// contain path separators.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let trimmed = name.trim();
        let invalid = trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\'])
            || trimmed.contains('\0');
        if invalid {
            return Err(PlaylistError::InvalidName(name.to_string()));
        }
        Ok(self.dir().join(format!("{}.{}", trimmed, EXTENSION)))
    }

    /// Whether playlist `name` has been saved
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Write `list` as playlist `name`, replacing any previous file
    pub fn save(&self, name: &str, list: &OrderedTrackList) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        self.init()?;

        let document = PlaylistDocument::from_list(name.trim(), list);
        let file = File::create(&path).map_err(|source| io_error(&path, source))?;
        let mut writer = BufWriter::new(file);

        let encoded = if self.config.pretty {
            serde_json::to_writer_pretty(&mut writer, &document)
        } else {
            serde_json::to_writer(&mut writer, &document)
        };
        encoded.map_err(|source| json_error(&path, source))?;

        writeln!(writer)
            .and_then(|_| writer.flush())
            .map_err(|source| io_error(&path, source))?;

        log::info!("Playlist saved to: {:?} ({} songs)", path, list.len());
        Ok(path)
    }

    /// Read playlist `name` back, in saved order
    pub fn load(&self, name: &str) -> Result<OrderedTrackList> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            log::warn!("Playlist file not found: {:?}", path);
            return Err(PlaylistError::NotFound(path));
        }

        let file = File::open(&path).map_err(|source| io_error(&path, source))?;
        let document: PlaylistDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| json_error(&path, source))?;

        if document.playlist_name != name.trim() {
            log::debug!(
                "File {:?} carries playlist name {:?}",
                path,
                document.playlist_name
            );
        }

        let list = document.into_list();
        log::info!("Playlist loaded from: {:?} ({} songs)", path, list.len());
        Ok(list)
    }

    /// Load playlist `name`, or start an empty one if it was never saved
    pub fn load_or_default(&self, name: &str) -> Result<OrderedTrackList> {
        match self.load(name) {
            Err(PlaylistError::NotFound(_)) => Ok(OrderedTrackList::new()),
            other => other,
        }
    }

    /// Delete playlist `name`; `false` when there was nothing to delete
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            log::warn!("File not found: {:?}", path);
            return Ok(false);
        }

        fs::remove_file(&path).map_err(|source| io_error(&path, source))?;
        log::info!("Playlist deleted: {:?}", path);
        Ok(true)
    }

    /// Names of all saved playlists, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let dir = self.dir();
        if !dir.exists() {
            log::warn!("Playlists directory does not exist: {:?}", dir);
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                io_error(&path, e.into())
            })?;

            let path = entry.path();
            let is_playlist = entry.file_type().is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(EXTENSION);
            if !is_playlist {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        log::debug!("Found {} saved playlists in {:?}", names.len(), dir);
        Ok(names)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PlaylistError {
    PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn json_error(path: &Path, source: serde_json::Error) -> PlaylistError {
    PlaylistError::Json {
        path: path.to_path_buf(),
        source,
    }
}
