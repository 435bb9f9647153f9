//! UI rendering helpers for the terminal user interface.
//!
//! `draw` renders the header, the playlist panel, the player sidebar and the
//! controls footer, and returns where the clickable parts ended up.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, HitMap};
use crate::config::{ControlsSettings, TimeField, UiSettings};
use crate::library::Track;
use crate::player::PlaybackStatus;

const BUTTON_WIDTH: u16 = 5;
const BUTTON_GAP: u16 = 2;

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    [
        "[j/k] up/down".to_string(),
        "[h/l] prev/next song".to_string(),
        format!("[H/L] scrub -/+{scrub_seconds}s"),
        "[enter] play selected song".to_string(),
        "[space/p] play/pause".to_string(),
        "[+/-] volume".to_string(),
        "[gg/G] top/bottom".to_string(),
        "[a] add files".to_string(),
        "[X] clear playlist".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Seconds as a `Duration`; anything non-finite or negative is zero.
fn secs(seconds: f64) -> Duration {
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::ZERO
    }
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Build the time text under the seek bar (elapsed/total/remaining) per `UiSettings`.
fn now_playing_time_text(elapsed: f64, total: Option<f64>, ui: &UiSettings) -> Option<String> {
    if ui.now_playing_time_fields.is_empty() {
        return None;
    }

    let elapsed = secs(elapsed);
    let total = total.map(secs).filter(|t| !t.is_zero());

    let mut parts: Vec<String> = Vec::new();
    for f in &ui.now_playing_time_fields {
        match f {
            TimeField::Elapsed => parts.push(format_mmss(elapsed)),
            TimeField::Total => {
                if let Some(t) = total {
                    parts.push(format_mmss(t));
                }
            }
            TimeField::Remaining => {
                if let Some(t) = total {
                    let rem = t.saturating_sub(elapsed);
                    parts.push(format!("-{}", format_mmss(rem)));
                }
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(&ui.now_playing_time_separator))
    }
}

/// Volume as shown next to the volume bar.
fn volume_percent(volume: f32) -> String {
    format!("{}%", (volume * 100.0).round() as u32)
}

/// Marker shown in front of the current track.
fn row_marker(is_current: bool, status: PlaybackStatus) -> &'static str {
    match (is_current, status) {
        (true, PlaybackStatus::Playing) => "▶",
        (true, _) => "⏸",
        (false, _) => " ",
    }
}

/// One playlist row: marker, title and artist on the left, duration label on the right.
fn row_text(track: &Track, marker: &str, width: usize) -> String {
    let left = format!("{marker} {} · {}", track.title, track.artist);
    let right = &track.duration_label;
    let used = left.chars().count() + right.chars().count();
    if used + 1 > width {
        format!("{left} {right}")
    } else {
        format!("{left}{}{right}", " ".repeat(width - used))
    }
}

/// Window `[start, end)` of a list of `total` rows that keeps `selected`
/// centered in `height` rows when possible.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Previous / play-pause / next button rects, centered in `row`.
fn button_rects(row: Rect) -> [Rect; 3] {
    let total = BUTTON_WIDTH * 3 + BUTTON_GAP * 2;
    let left = row.x + row.width.saturating_sub(total) / 2;
    let at = |i: u16| {
        let x = left + i * (BUTTON_WIDTH + BUTTON_GAP);
        let width = BUTTON_WIDTH.min((row.x + row.width).saturating_sub(x));
        Rect::new(x, row.y, width, row.height.min(1))
    };
    [at(0), at(1), at(2)]
}

fn left_padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into `frame` and return the clickable regions.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" playdeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Min(30)])
        .split(chunks[1]);

    draw_playlist(frame, app, body[0], &mut hits);
    draw_sidebar(frame, app, ui_settings, body[1], &mut hits);

    if app.upload_mode {
        let popup_area = centered_rect_sized(64, 3, body[0]);
        frame.render_widget(Clear, popup_area);
        let prompt = Paragraph::new(format!("{}█", app.upload_input))
            .block(left_padded(" add files (enter adds, esc cancels) "));
        frame.render_widget(prompt, popup_area);
    }

    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds))
        .block(left_padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);

    hits
}

fn draw_playlist(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitMap) {
    let title = format!(" playlist ({}) ", app.player.len());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);

    if !app.has_tracks() {
        let empty = Paragraph::new("Playlist is empty.\nPress [a] or drop audio files here to add them.")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Only build ListItems for the visible window.
    let playlist = app.player.playlist();
    let height = usize::from(inner.height);
    let (start, end) = visible_window(playlist.len(), height, app.selected);
    let current = app.player.current_index();
    let status = app.player.status();
    let text_width = usize::from(inner.width).saturating_sub(2);

    let items: Vec<ListItem> = playlist[start..end]
        .iter()
        .enumerate()
        .map(|(offset, track)| {
            let i = start + offset;
            let is_current = current == Some(i);
            let line = row_text(track, row_marker(is_current, status), text_width);
            if is_current {
                ListItem::new(line).bold()
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.selected.saturating_sub(start)));
    frame.render_stateful_widget(list, area, &mut state);

    hits.rows = inner;
    hits.first_row = start;
    hits.row_count = end - start;
}

fn draw_sidebar(frame: &mut Frame, app: &App, ui: &UiSettings, area: Rect, hits: &mut HitMap) {
    let block = left_padded(" player ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // artist
            Constraint::Length(1),
            Constraint::Length(1), // seek bar
            Constraint::Length(1), // time
            Constraint::Length(1),
            Constraint::Length(1), // buttons
            Constraint::Length(1),
            Constraint::Length(1), // volume
            Constraint::Length(1),
            Constraint::Length(1), // status
            Constraint::Min(0),    // notice
        ])
        .split(inner);

    let player = &app.player;
    let state = player.state();

    let (title, artist) = match player.current_track() {
        Some(t) => (t.title.as_str(), t.artist.as_str()),
        None => ("Nothing loaded", ""),
    };
    frame.render_widget(Paragraph::new(title).bold(), rows[0]);
    frame.render_widget(Paragraph::new(artist).italic(), rows[1]);

    let seek = Gauge::default()
        .gauge_style(Style::default().add_modifier(Modifier::REVERSED))
        .ratio(player.progress().unwrap_or(0.0))
        .label("");
    frame.render_widget(seek, rows[3]);
    hits.seek_bar = rows[3];

    if let Some(time) = now_playing_time_text(state.position, state.duration, ui) {
        frame.render_widget(Paragraph::new(time).alignment(Alignment::Center), rows[4]);
    }

    let [prev, play, next] = button_rects(rows[6]);
    let play_label = if player.is_playing() { " ⏸ " } else { " ▶ " };
    for (rect, label) in [(prev, " ⏮ "), (play, play_label), (next, " ⏭ ")] {
        let button = Paragraph::new(Line::from(Span::raw(label)))
            .alignment(Alignment::Center)
            .reversed();
        frame.render_widget(button, rect);
    }
    hits.prev_button = prev;
    hits.play_button = play;
    hits.next_button = next;

    let volume_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(5), Constraint::Min(1), Constraint::Length(6)])
        .split(rows[8]);
    frame.render_widget(Paragraph::new("vol"), volume_row[0]);
    let volume = Gauge::default()
        .gauge_style(Style::default().add_modifier(Modifier::REVERSED))
        .ratio(f64::from(player.volume()).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(volume, volume_row[1]);
    frame.render_widget(
        Paragraph::new(volume_percent(player.volume())).alignment(Alignment::Right),
        volume_row[2],
    );
    hits.volume_bar = volume_row[1];

    let status = match player.status() {
        PlaybackStatus::Idle => "Idle",
        PlaybackStatus::Ready => "Paused",
        PlaybackStatus::Playing => "Playing",
    };
    let cursor = if app.follow_playback { "Follow" } else { "Free-roam" };
    frame.render_widget(
        Paragraph::new(format!("{status} • cursor: {cursor}")).dim(),
        rows[10],
    );

    if let Some(notice) = app.notice.as_deref() {
        frame.render_widget(Paragraph::new(notice).wrap(Wrap { trim: true }), rows[11]);
    }
}
