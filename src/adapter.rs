//! Adapter: plugging a legacy player into the `MediaPlayer` interface.

use crate::narrate::Narrator;

pub mod demo {
    use super::{run_media_player, LegacyVideoPlayer, VideoPlayerAdapter};
    use crate::narrate::Narrator;

    pub const MOVIE: &str = "movie.avi";
    pub const SONG: &str = "song.mp3";

    pub fn run(out: &dyn Narrator) {
        let old_system = LegacyVideoPlayer;
        let adapter = VideoPlayerAdapter::new(old_system);
        run_media_player(&adapter, MOVIE, out);
    }
}

/// What new code expects from a player.
pub trait MediaPlayer {
    fn play(&self, filename: &str, out: &dyn Narrator);
}

/// The legacy call shape: `play_old_format` instead of `play`.
pub trait LegacyPlayback {
    fn play_old_format(&self, filename: &str, out: &dyn Narrator);
}

/// Pre-existing player with an incompatible method name.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyVideoPlayer;

impl LegacyVideoPlayer {
    pub fn play_old_format(&self, filename: &str, out: &dyn Narrator) {
        out.say(&format!(
            "LegacyPlayer: playing {} with the old algorithm...",
            filename
        ));
    }
}

impl LegacyPlayback for LegacyVideoPlayer {
    fn play_old_format(&self, filename: &str, out: &dyn Narrator) {
        LegacyVideoPlayer::play_old_format(self, filename, out)
    }
}

/// Owns one legacy player for its whole lifetime and exposes it as a
/// [`MediaPlayer`].
#[derive(Debug)]
pub struct VideoPlayerAdapter<L: LegacyPlayback = LegacyVideoPlayer> {
    legacy: L,
}

impl<L: LegacyPlayback> VideoPlayerAdapter<L> {
    pub fn new(legacy: L) -> Self {
        VideoPlayerAdapter { legacy }
    }

    pub fn into_inner(self) -> L {
        self.legacy
    }
}

impl<L: LegacyPlayback> MediaPlayer for VideoPlayerAdapter<L> {
    fn play(&self, filename: &str, out: &dyn Narrator) {
        out.say("Adapter: translating the new call into the legacy format");
        self.legacy.play_old_format(filename, out);
    }
}

/// A player written against the new interface from the start.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mp3Player;

impl MediaPlayer for Mp3Player {
    fn play(&self, filename: &str, out: &dyn Narrator) {
        out.say(&format!("Mp3Player: playing {}", filename));
    }
}

/// Client code. Knows nothing about adapters.
pub fn run_media_player(player: &dyn MediaPlayer, filename: &str, out: &dyn Narrator) {
    player.play(filename, out);
}
