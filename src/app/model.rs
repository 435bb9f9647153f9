//! Application model: the player plus view-only state.
//!
//! `App` owns the `Player` (playlist and transport state) and adds what only
//! the terminal view cares about: the playlist cursor, the upload prompt and
//! the last frame's clickable regions.

use std::path::PathBuf;

use crate::config::UploadSettings;
use crate::library::{collect_handles, ingest};
use crate::player::Player;

use super::hit::{Hit, HitMap};

/// The main application model.
pub struct App {
    pub player: Player,
    /// Playlist row under the cursor. Independent from the current track.
    pub selected: usize,
    /// Keep the cursor on the current track as it changes.
    pub follow_playback: bool,

    pub upload_mode: bool,
    pub upload_input: String,

    /// One-line notice shown in the sidebar (upload results and the like).
    pub notice: Option<String>,
    pub hit_map: HitMap,
}

impl App {
    /// Create a new `App` around `player`.
    pub fn new(player: Player) -> Self {
        let selected = player.current_index().unwrap_or(0);
        Self {
            player,
            selected,
            follow_playback: true,
            upload_mode: false,
            upload_input: String::new(),
            notice: None,
            hit_map: HitMap::default(),
        }
    }

    /// Return true if the playlist contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.player.is_empty()
    }

    /// Enable following playback (cursor follows the current track).
    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
    }
    /// Disable follow-playback.
    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
    }

    /// Move the cursor to the current track when following playback.
    pub fn sync_cursor(&mut self) {
        if !self.follow_playback {
            return;
        }
        if let Some(i) = self.player.current_index() {
            self.selected = i;
        }
    }

    /// Set the cursor, clamped into the playlist.
    pub fn set_selected(&mut self, idx: usize) {
        let len = self.player.len();
        self.selected = if len == 0 { 0 } else { idx.min(len - 1) };
    }

    /// Move the cursor down, wrapping to the top.
    pub fn cursor_down(&mut self) {
        let len = self.player.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn cursor_up(&mut self) {
        let len = self.player.len();
        if len > 0 {
            self.selected = (self.selected % len + len - 1) % len;
        }
    }

    pub fn cursor_top(&mut self) {
        self.selected = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.selected = self.player.len().saturating_sub(1);
    }

    /// Play the track under the cursor.
    pub fn play_selected(&mut self) {
        if self.player.select_track(self.selected) {
            self.follow_playback_on();
        }
    }

    /// Open the upload prompt.
    pub fn enter_upload_mode(&mut self) {
        self.upload_mode = true;
        self.upload_input.clear();
    }
    /// Close the upload prompt, discarding what was typed.
    pub fn exit_upload_mode(&mut self) {
        self.upload_mode = false;
        self.upload_input.clear();
    }
    pub fn push_upload_char(&mut self, c: char) {
        self.upload_input.push(c);
    }
    pub fn pop_upload_char(&mut self) {
        self.upload_input.pop();
    }

    /// Close the prompt and hand back what was typed.
    pub fn take_upload_input(&mut self) -> String {
        self.upload_mode = false;
        std::mem::take(&mut self.upload_input)
    }

    /// What a click at `(col, row)` landed on. The upload popup swallows
    /// every click while it is open.
    pub fn click_target(&self, col: u16, row: u16) -> Option<Hit> {
        if self.upload_mode {
            return None;
        }
        self.hit_map.hit(col, row)
    }

    /// Upload `paths` (files or directories) and append the audio ones.
    /// Returns how many tracks were added.
    pub fn upload(&mut self, paths: &[PathBuf], settings: &UploadSettings) -> usize {
        let handles = collect_handles(paths, settings);
        let offered = handles.len();
        let tracks = ingest(handles, &settings.artist_label);
        let added = self.player.append(tracks);
        log::info!("upload: {added} of {offered} file(s) added to the playlist");

        self.notice = Some(match added {
            0 => "No audio files found".to_string(),
            1 => "Added 1 track".to_string(),
            n => format!("Added {n} tracks"),
        });
        self.sync_cursor();
        added
    }

    /// Empty the playlist.
    pub fn clear_playlist(&mut self) {
        self.player.clear();
        self.selected = 0;
        self.notice = Some("Playlist cleared".to_string());
    }
}
