//! Mouse hit-testing against the regions the last frame was drawn into.

use ratatui::layout::Rect;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// A playlist row, as a playlist index.
    Row(usize),
    /// The seek bar. Geometry is kept so the click can be mapped to a time.
    Seek { x: u16, left: u16, width: u16 },
    /// The volume bar.
    Volume { x: u16, left: u16, width: u16 },
    Prev,
    TogglePlay,
    Next,
}

/// Screen regions recorded while drawing a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Inner area of the playlist list (one row per track).
    pub rows: Rect,
    /// Playlist index shown on the first row of `rows`.
    pub first_row: usize,
    /// Number of tracks actually drawn.
    pub row_count: usize,
    pub seek_bar: Rect,
    pub volume_bar: Rect,
    pub prev_button: Rect,
    pub play_button: Rect,
    pub next_button: Rect,
}

fn contains(r: Rect, col: u16, row: u16) -> bool {
    r.width > 0
        && r.height > 0
        && col >= r.x
        && col < r.x.saturating_add(r.width)
        && row >= r.y
        && row < r.y.saturating_add(r.height)
}

impl HitMap {
    pub fn hit(&self, col: u16, row: u16) -> Option<Hit> {
        if contains(self.rows, col, row) {
            let offset = usize::from(row - self.rows.y);
            return (offset < self.row_count).then_some(Hit::Row(self.first_row + offset));
        }
        if contains(self.seek_bar, col, row) {
            return Some(Hit::Seek {
                x: col,
                left: self.seek_bar.x,
                width: self.seek_bar.width,
            });
        }
        if contains(self.volume_bar, col, row) {
            return Some(Hit::Volume {
                x: col,
                left: self.volume_bar.x,
                width: self.volume_bar.width,
            });
        }
        if contains(self.prev_button, col, row) {
            return Some(Hit::Prev);
        }
        if contains(self.play_button, col, row) {
            return Some(Hit::TogglePlay);
        }
        if contains(self.next_button, col, row) {
            return Some(Hit::Next);
        }
        None
    }
}
