//! Storage configuration

use std::path::PathBuf;

/// Default location of saved playlists, before `~` expansion
pub const DEFAULT_PLAYLISTS_DIR: &str = "~/Music/MusicPlayer/Playlists";

/// Configuration for where and how playlists are stored
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one `<name>.json` file per playlist
    pub playlists_dir: PathBuf,

    /// Whether to indent the JSON output
    pub pretty: bool,
}

impl StoreConfig {
    /// Create a configuration for the given directory
    pub fn new(playlists_dir: PathBuf) -> Self {
        Self {
            playlists_dir,
            pretty: true,
        }
    }

    /// Configuration for a directory given as a string, expanding `~`
    pub fn from_user_path(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self::new(PathBuf::from(expanded.as_ref()))
    }

    /// Write compact JSON instead of indented JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_user_path(DEFAULT_PLAYLISTS_DIR)
    }
}
