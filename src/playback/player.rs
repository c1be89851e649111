//! Playback state machine

use super::clock::{Clock, SystemClock};
use crate::model::{format_mm_ss, NodeHandle, OrderedTrackList, Track};
use std::fmt;
use std::time::{Duration, Instant};

/// Width of the rendered progress bar, in cells
const BAR_WIDTH: u32 = 30;

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    /// Upper-case label for the now-playing view
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackState::Stopped => "STOPPED",
            PlaybackState::Playing => "PLAYING",
            PlaybackState::Paused => "PAUSED",
        }
    }
}

/// Tracks what is playing and for how long
///
/// The player owns a copy of the current track, so the playlist can be
/// edited freely while something plays. When playback started from a
/// playlist, the node handle is kept for "already playing" checks.
pub struct Player<C: Clock = SystemClock> {
    clock: C,
    current: Option<Track>,
    handle: Option<NodeHandle>,
    state: PlaybackState,

    /// Play time accumulated before `started`
    offset: Duration,

    /// When the current playing stretch began (None unless Playing)
    started: Option<Instant>,
}

impl Player<SystemClock> {
    /// Player driven by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Player<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Player<C> {
    /// Create a stopped player driven by `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            current: None,
            handle: None,
            state: PlaybackState::Stopped,
            offset: Duration::ZERO,
            started: None,
        }
    }

    /// Start playing `track` from the beginning
    pub fn play(&mut self, track: Track) {
        log::info!("Now playing: {} - {}", track.title(), track.artist());
        self.current = Some(track);
        self.handle = None;
        self.state = PlaybackState::Playing;
        self.offset = Duration::ZERO;
        self.started = Some(self.clock.now());
    }

    /// Play the track at `index` of `list`
    ///
    /// Returns `false` and leaves the player untouched when there is no
    /// track at that position.
    pub fn play_from(&mut self, list: &OrderedTrackList, index: isize) -> bool {
        let selected = list
            .handle_at(index)
            .and_then(|handle| list.get(handle).map(|track| (handle, track.clone())));

        match selected {
            Some((handle, track)) => {
                self.play(track);
                self.handle = Some(handle);
                true
            }
            None => {
                log::warn!("No song found at position {}", index);
                false
            }
        }
    }

    /// Freeze the elapsed time; only acts while playing
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.offset = self.played();
            self.started = None;
            self.state = PlaybackState::Paused;
            if let Some(track) = &self.current {
                log::info!("Paused: {}", track.title());
            }
        }
    }

    /// Continue a paused track
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.started = Some(self.clock.now());
            self.state = PlaybackState::Playing;
            if let Some(track) = &self.current {
                log::info!("Resumed: {}", track.title());
            }
        }
    }

    /// Pause when playing, resume when paused
    pub fn toggle(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Stopped => {}
        }
    }

    /// Drop the current track and reset the clock
    pub fn stop(&mut self) {
        self.current = None;
        self.handle = None;
        self.state = PlaybackState::Stopped;
        self.offset = Duration::ZERO;
        self.started = None;
        log::info!("Stopped playback");
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether a track is playing (not paused)
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Track loaded in the player, if any
    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Whether `handle` names the playlist node being played
    pub fn is_current(&self, handle: NodeHandle) -> bool {
        self.state != PlaybackState::Stopped && self.handle == Some(handle)
    }

    /// Whether the playing node is still part of `list`
    pub fn still_in(&self, list: &OrderedTrackList) -> bool {
        self.handle.is_some_and(|handle| list.contains_handle(handle))
    }

    /// Elapsed seconds, never past the end of the track
    pub fn elapsed(&self) -> u32 {
        let Some(track) = &self.current else {
            return 0;
        };
        if self.state == PlaybackState::Stopped {
            return 0;
        }

        let seconds = u32::try_from(self.played().as_secs()).unwrap_or(u32::MAX);
        seconds.min(track.duration_seconds())
    }

    /// Seconds left in the current track
    pub fn remaining(&self) -> u32 {
        self.current
            .as_ref()
            .map(|track| track.duration_seconds() - self.elapsed())
            .unwrap_or(0)
    }

    /// Percent of the track played, 0-100
    pub fn progress(&self) -> u8 {
        let Some(track) = &self.current else {
            return 0;
        };

        let percent = u64::from(self.elapsed()) * 100 / u64::from(track.duration_seconds());
        percent.min(100) as u8
    }

    /// Jump to `percent` of the track; ignored above 100 or when nothing is loaded
    pub fn set_progress(&mut self, percent: u8) {
        let Some(track) = &self.current else {
            return;
        };
        if percent > 100 {
            return;
        }

        let seconds = u64::from(track.duration_seconds()) * u64::from(percent) / 100;
        self.offset = Duration::from_secs(seconds);
        if self.state == PlaybackState::Playing {
            self.started = Some(self.clock.now());
        }
    }

    /// Snapshot of the player for display
    pub fn now_playing(&self) -> NowPlaying {
        NowPlaying {
            state: self.state,
            track: self.current.clone(),
            elapsed: self.elapsed(),
            progress: self.progress(),
        }
    }

    fn played(&self) -> Duration {
        let running = self
            .started
            .map(|start| self.clock.now().saturating_duration_since(start))
            .unwrap_or_default();
        self.offset + running
    }
}

/// What the player is doing at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub state: PlaybackState,
    pub track: Option<Track>,
    pub elapsed: u32,
    pub progress: u8,
}

impl NowPlaying {
    /// Progress bar of `BAR_WIDTH` cells
    pub fn bar(&self) -> String {
        let filled = u32::from(self.progress) * BAR_WIDTH / 100;
        (0..BAR_WIDTH)
            .map(|cell| if cell < filled { '█' } else { '░' })
            .collect()
    }
}

impl fmt::Display for NowPlaying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let track = match (&self.track, self.state) {
            (Some(track), PlaybackState::Playing | PlaybackState::Paused) => track,
            _ => return write!(f, "[STOPPED] No song playing"),
        };

        let rule = "=".repeat(40);
        writeln!(f, "{}", rule)?;
        writeln!(f, "       NOW PLAYING")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Title:  {}", track.title())?;
        writeln!(f, "Artist: {}", track.artist())?;
        writeln!(
            f,
            "Time:   {} / {}",
            format_mm_ss(u64::from(self.elapsed)),
            track.formatted_duration()
        )?;
        writeln!(f, "{} {}%", self.bar(), self.progress)?;
        writeln!(f, "Status: {}", self.state.label())?;
        write!(f, "{}", rule)
    }
}
