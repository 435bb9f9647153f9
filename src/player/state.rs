use crate::library::{MediaSource, Track};

/// Coarse player status derived from the playlist and play intent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No playlist: nothing can be current.
    #[default]
    Idle,
    /// Playlist present, play intent off.
    Ready,
    /// Playlist present, play intent on.
    Playing,
}

/// Mutable playback fields. Only `Player` transitions change them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Always `Some(i)` with `i < playlist.len()` when the playlist is non-empty,
    /// `None` when it is empty.
    pub current_index: Option<usize>,
    /// Play intent. Can disagree with what the element is actually doing.
    pub is_playing: bool,
    /// Output gain in `[0, 1]`.
    pub volume: f32,
    /// Seconds into the current track, as last reported by the element.
    pub position: f64,
    /// Total length of the current track once the element knows it.
    pub duration: Option<f64>,
}

impl PlayerState {
    pub(super) fn new(len: usize, volume: f32) -> Self {
        Self {
            current_index: if len == 0 { None } else { Some(0) },
            is_playing: false,
            volume: clamp_volume(volume),
            position: 0.0,
            duration: None,
        }
    }
}

/// Everything the media binding needs to reconcile the playback element.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub index: Option<usize>,
    pub source: Option<MediaSource>,
    /// Bumped on every playlist mutation (append, replace, clear).
    pub playlist_rev: u64,
    /// Bumped when the current track must restart even though the index is unchanged.
    pub epoch: u64,
    pub playing: bool,
    pub volume: f32,
}

/// Clamp a gain into `[0, 1]`. NaN maps to silence.
pub fn clamp_volume(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Playlist store plus transport state.
///
/// Every public mutator is one atomic transition: fields that must change
/// together (index and intent, playlist and index) change in the same call,
/// so no observer can see a half-applied state.
#[derive(Debug, Clone)]
pub struct Player {
    pub(super) playlist: Vec<Track>,
    pub(super) playlist_rev: u64,
    pub(super) epoch: u64,
    pub(super) state: PlayerState,
}

impl Player {
    pub fn new(tracks: Vec<Track>, volume: f32) -> Self {
        let state = PlayerState::new(tracks.len(), volume);
        Self {
            playlist: tracks,
            playlist_rev: 0,
            epoch: 0,
            state,
        }
    }

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.state.current_index.and_then(|i| self.playlist.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.state.volume
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.playlist.is_empty() {
            PlaybackStatus::Idle
        } else if self.state.is_playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Ready
        }
    }

    /// Fraction of the current track already played, once the duration is known.
    pub fn progress(&self) -> Option<f64> {
        match self.state.duration {
            Some(total) if total > 0.0 => Some((self.state.position / total).clamp(0.0, 1.0)),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            index: self.state.current_index,
            source: self.current_track().and_then(Track::resolve_source),
            playlist_rev: self.playlist_rev,
            epoch: self.epoch,
            playing: self.state.is_playing,
            volume: self.state.volume,
        }
    }
}
