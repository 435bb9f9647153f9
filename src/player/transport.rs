//! Transport and playlist transitions on `Player`.

use crate::library::Track;

use super::state::{Player, clamp_volume};

/// Index after `current` in a playlist of `len`, wrapping. `None` when empty.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + 1) % len)
}

/// Index before `current` in a playlist of `len`, wrapping. `None` when empty.
pub fn prev_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + len - 1) % len)
}

/// Snap `v` onto the `step` grid and clamp it to `[0, 1]`.
pub fn snap_volume(v: f32, step: f32) -> f32 {
    if step <= 0.0 {
        return clamp_volume(v);
    }
    clamp_volume((v / step).round() * step)
}

impl Player {
    /// Make `index` current and request playback. Out-of-range is a no-op.
    pub fn select_track(&mut self, index: usize) -> bool {
        if index >= self.playlist.len() {
            return false;
        }
        self.move_to(index);
        self.state.is_playing = true;
        true
    }

    /// Flip play intent. Does nothing without a playlist.
    pub fn toggle_play(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        self.state.is_playing = !self.state.is_playing;
    }

    /// Set play intent explicitly (media keys distinguish play from pause).
    pub fn set_playing(&mut self, playing: bool) {
        if self.playlist.is_empty() {
            return;
        }
        self.state.is_playing = playing;
    }

    /// Advance with wraparound. Play intent is left as it was.
    pub fn next(&mut self) {
        let Some(current) = self.state.current_index else {
            return;
        };
        if let Some(i) = next_index(current, self.playlist.len()) {
            self.move_to(i);
        }
    }

    /// Step back with wraparound. Play intent is left as it was.
    pub fn previous(&mut self) {
        let Some(current) = self.state.current_index else {
            return;
        };
        if let Some(i) = prev_index(current, self.playlist.len()) {
            self.move_to(i);
        }
    }

    /// The current track reached its end: pause, then advance and keep playing.
    ///
    /// Applied as one transition, so the paused step is never observable. A
    /// single-track playlist wraps onto the same index and replays it.
    pub fn finish_track(&mut self) {
        let Some(current) = self.state.current_index else {
            self.state.is_playing = false;
            return;
        };
        let Some(i) = next_index(current, self.playlist.len()) else {
            self.state.is_playing = false;
            return;
        };
        self.move_to(i);
        self.reset_progress();
        // Forces a reload even when `i == current`.
        self.epoch = self.epoch.wrapping_add(1);
        self.state.is_playing = true;
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.state.volume = clamp_volume(volume);
    }

    /// Nudge volume by `delta`, keeping it on the `step` grid.
    pub fn step_volume(&mut self, delta: f32, step: f32) {
        self.state.volume = snap_volume(self.state.volume + delta, step);
    }

    /// Append tracks, keeping order and the current index.
    ///
    /// Growing an empty playlist makes its first entry current (paused).
    pub fn append(&mut self, tracks: Vec<Track>) -> usize {
        let added = tracks.len();
        if added == 0 {
            return 0;
        }
        let was_empty = self.playlist.is_empty();
        self.playlist.extend(tracks);
        self.playlist_rev = self.playlist_rev.wrapping_add(1);
        if was_empty {
            self.state.current_index = Some(0);
            self.state.is_playing = false;
            self.reset_progress();
        }
        added
    }

    /// Replace the whole playlist. The first entry becomes current, paused.
    pub fn replace_playlist(&mut self, tracks: Vec<Track>) {
        self.state.current_index = if tracks.is_empty() { None } else { Some(0) };
        self.playlist = tracks;
        self.playlist_rev = self.playlist_rev.wrapping_add(1);
        // Progress is reset, so the element must reload even for an identical source.
        self.epoch = self.epoch.wrapping_add(1);
        self.state.is_playing = false;
        self.reset_progress();
    }

    /// Drop every track. Nothing is current afterwards and play intent is off.
    pub fn clear(&mut self) {
        self.replace_playlist(Vec::new());
    }

    /// Record a position reported by the element (or an optimistic seek).
    pub fn set_position(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let mut pos = seconds.max(0.0);
        if let Some(total) = self.state.duration {
            pos = pos.min(total);
        }
        self.state.position = pos;
    }

    /// Record the total length once the element knows it. Zero or non-finite means unknown.
    pub fn set_duration(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds > 0.0 {
            self.state.duration = Some(seconds);
            self.state.position = self.state.position.min(seconds);
        } else {
            self.state.duration = None;
        }
    }

    fn move_to(&mut self, index: usize) {
        if self.state.current_index != Some(index) {
            self.reset_progress();
        }
        self.state.current_index = Some(index);
    }

    fn reset_progress(&mut self) {
        self.state.position = 0.0;
        self.state.duration = None;
    }
}
