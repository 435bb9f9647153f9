//! Commands accepted by the audio thread.

use std::time::Duration;

use crate::binding::LoadToken;
use crate::library::MediaSource;

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current source (or unload with `None`), leaving it paused.
    Load {
        token: LoadToken,
        source: Option<MediaSource>,
    },
    /// Resume or start the loaded source.
    Play,
    /// Pause without unloading.
    Pause,
    /// Set the output gain, already clamped to `[0, 1]`.
    SetVolume(f32),
    /// Jump to an absolute position in the loaded source.
    Seek(Duration),
    /// Quit the audio thread, fading out over `fade_out` first (zero stops at once).
    Quit { fade_out: Duration },
}
