use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use playlist_manager::catalog::{self, CatalogSource, MockCatalog};
use playlist_manager::playback::Player;
use playlist_manager::storage::config::DEFAULT_PLAYLISTS_DIR;
use playlist_manager::{OrderedTrackList, PlaylistStore, StoreConfig, Track};

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Manage playlists of tracks from the console", long_about = None)]
struct Args {
    /// Directory holding saved playlists
    #[arg(long, env = "PLAYLIST_MANAGER_DIR", default_value = DEFAULT_PLAYLISTS_DIR)]
    dir: String,

    /// Playlist to operate on
    #[arg(short = 'p', long, default_value = "default")]
    playlist: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a song (to the end unless --first or --at is given)
    Add {
        title: String,
        artist: String,
        /// Duration in seconds (1-3600)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=3600))]
        seconds: u32,
        /// Insert at the beginning
        #[arg(long, conflicts_with = "at")]
        first: bool,
        /// Insert at a 0-based position (clamped to the list bounds)
        #[arg(long, allow_negative_numbers = true)]
        at: Option<isize>,
    },

    /// Remove a song (the first one unless --last or --at is given)
    Remove {
        #[arg(long, conflicts_with_all = ["last", "at"])]
        first: bool,
        #[arg(long, conflicts_with = "at")]
        last: bool,
        /// Remove the 0-based position (clamped to the list bounds)
        #[arg(long, allow_negative_numbers = true)]
        at: Option<isize>,
    },

    /// Print the playlist
    Show,

    /// Print the song at a 0-based position
    Get {
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },

    /// Remove every song
    Clear,

    /// Search the catalog by title (or artist with --artist)
    Search {
        query: String,
        #[arg(long)]
        artist: bool,
        /// Append result number N (1-based) to the playlist
        #[arg(long)]
        add: Option<usize>,
    },

    /// Browse trending songs
    Trending {
        /// Append result number N (1-based) to the playlist
        #[arg(long)]
        add: Option<usize>,
    },

    /// Get recommendations for a genre
    Recommend {
        genre: String,
        /// Append result number N (1-based) to the playlist
        #[arg(long)]
        add: Option<usize>,
    },

    /// List saved playlists
    Saved,

    /// Delete a saved playlist
    Delete { name: String },

    /// Save a copy of the playlist under another name
    Save { name: String },

    /// Replace the playlist's songs with those of a saved playlist
    Load { name: String },

    /// Show the now-playing view for a song of the playlist
    Play {
        #[arg(allow_negative_numbers = true)]
        index: isize,
        /// Start at this percentage of the song
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        at_percent: Option<u8>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let store = PlaylistStore::new(StoreConfig::from_user_path(&args.dir));
    log::debug!("Using playlists directory {:?}", store.dir());

    run(args.command, &store, &args.playlist)
}

/// Execute one command against the active playlist `active`
///
/// Commands that only touch the store run before the active playlist is
/// read, so a damaged playlist file can still be listed and deleted.
fn run(command: Command, store: &PlaylistStore, active: &str) -> Result<()> {
    let command = match command {
        Command::Saved => return list_saved(store),
        Command::Delete { name } => return delete_saved(store, &name),
        command => command,
    };

    let mut playlist = store
        .load_or_default(active)
        .with_context(|| format!("Failed to load playlist '{}'", active))?;

    if edit(command, store, &mut playlist)? {
        store
            .save(active, &playlist)
            .with_context(|| format!("Failed to save playlist '{}'", active))?;
    }

    Ok(())
}

/// Apply one command to a loaded playlist; returns whether it changed
fn edit(command: Command, store: &PlaylistStore, playlist: &mut OrderedTrackList) -> Result<bool> {
    let catalog = MockCatalog::new();

    let changed = match command {
        Command::Add {
            title,
            artist,
            seconds,
            first,
            at,
        } => {
            let track = Track::new(title, artist, seconds)?;
            let title = track.title().to_string();
            match (first, at) {
                (true, _) => {
                    playlist.add_first(track);
                    log::info!("Song '{}' added to the beginning of playlist", title);
                }
                (false, Some(index)) => {
                    playlist.add_at(track, index);
                    log::info!("Song '{}' added at position {}", title, index);
                }
                (false, None) => {
                    playlist.add_last(track);
                    log::info!("Song '{}' added to the end of playlist", title);
                }
            }
            true
        }

        Command::Remove { first, last, at } => {
            let removed = match (first, last, at) {
                (_, true, _) => playlist.remove_last(),
                (_, _, Some(index)) => playlist.remove_at(index),
                _ => playlist.remove_first(),
            };
            if !removed {
                bail!("Playlist is empty!");
            }
            log::info!("Song removed, {} left", playlist.len());
            true
        }

        Command::Show => {
            print_playlist(playlist);
            false
        }

        Command::Get { index } => {
            match playlist.get_at(index) {
                Some(track) => println!("{}: {}", index, track),
                None => bail!("No song found at position {}!", index),
            }
            false
        }

        Command::Clear => {
            if playlist.is_empty() {
                println!("Playlist is already empty!");
                false
            } else {
                let released = playlist.clear();
                log::info!("Removed all {} songs", released);
                true
            }
        }

        Command::Search { query, artist, add } => {
            let results = if artist {
                catalog.search_artist(&query)
            } else {
                catalog.search_title(&query)
            };
            pick(results, add, playlist)?
        }

        Command::Trending { add } => pick(catalog.trending(), add, playlist)?,

        Command::Recommend { genre, add } => pick(catalog.recommendations(&genre), add, playlist)?,

        Command::Saved => {
            list_saved(store)?;
            false
        }

        Command::Delete { name } => {
            delete_saved(store, &name)?;
            false
        }

        Command::Save { name } => {
            if playlist.is_empty() {
                bail!("Playlist is empty! Nothing to save.");
            }
            store
                .save(&name, playlist)
                .with_context(|| format!("Failed to save playlist '{}'", name))?;
            false
        }

        Command::Load { name } => {
            let loaded = store
                .load(&name)
                .with_context(|| format!("Failed to load playlist '{}'", name))?;
            playlist.clear();
            playlist.extend(loaded);
            log::info!("Playlist '{}' loaded ({} songs)", name, playlist.len());
            true
        }

        Command::Play { index, at_percent } => {
            let mut player = Player::new();
            if !player.play_from(playlist, index) {
                bail!("Song not found!");
            }
            if let Some(percent) = at_percent {
                player.set_progress(percent);
            }
            println!("{}", player.now_playing());
            false
        }
    };

    Ok(changed)
}

fn list_saved(store: &PlaylistStore) -> Result<()> {
    let names = store.list()?;
    if names.is_empty() {
        println!("No saved playlists found!");
    }
    for (i, name) in names.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    Ok(())
}

fn delete_saved(store: &PlaylistStore, name: &str) -> Result<()> {
    if !store.delete(name)? {
        bail!("Playlist '{}' not found", name);
    }
    Ok(())
}

/// Print catalog results and optionally append one of them
fn pick(results: Vec<Track>, add: Option<usize>, playlist: &mut OrderedTrackList) -> Result<bool> {
    if results.is_empty() {
        bail!("No songs found!");
    }

    for (i, track) in results.iter().enumerate() {
        println!("{}. {}", i + 1, track);
    }

    let Some(choice) = add else {
        return Ok(false);
    };
    let Some(selected) = choice.checked_sub(1).and_then(|i| results.get(i)) else {
        bail!("Result {} does not exist (1-{})", choice, results.len());
    };

    catalog::merge_into(playlist, [selected.clone()]);
    log::info!("Song '{}' added to playlist", selected.title());
    Ok(true)
}

fn print_playlist(playlist: &OrderedTrackList) {
    if playlist.is_empty() {
        println!("[empty]");
        return;
    }

    for (i, track) in playlist.iter().enumerate() {
        println!("{}: {}", i, track);
    }

    println!(
        "{} songs, {}",
        playlist.len(),
        playlist_manager::model::format_mm_ss(playlist.total_seconds())
    );
}
