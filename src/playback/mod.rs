//! Playback state tracking
//!
//! No audio is produced. The player keeps a copy of the selected track and
//! a clock-driven elapsed time, which is enough to render "now playing".

mod clock;
mod player;

pub use clock::{Clock, SystemClock};
pub use player::{NowPlaying, PlaybackState, Player};
