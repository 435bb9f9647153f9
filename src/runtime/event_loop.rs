use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Hit};
use crate::audio::AudioElement;
use crate::binding::MediaBinding;
use crate::config;
use crate::error::Result;
use crate::library::parse_dropped_paths;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{PlaybackStatus, click_fraction, scrub_target, seek_target, snap_volume};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

type Binding = MediaBinding<AudioElement>;

/// What MPRIS last heard about: index, playlist revision, status and duration.
type MprisKey = (Option<usize>, u64, PlaybackStatus, Option<f64>);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    last_mpris: Option<MprisKey>,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self {
            pending_gg: false,
            last_mpris: None,
        }
    }
}

/// Main terminal event loop: feeds element events into the player, pushes
/// player state into the element, draws, then handles one round of input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    binding: &mut Binding,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<()> {
    loop {
        for ev in binding.element().drain_events() {
            if let Some(event) = binding.accept(ev) {
                app.player.apply_event(event);
            }
        }
        app.sync_cursor();

        let snapshot = app.player.snapshot();
        binding.sync(&snapshot);

        // Keep MPRIS in sync even when playback changes come from media keys or auto-advance.
        let key: MprisKey = (
            snapshot.index,
            snapshot.playlist_rev,
            app.player.status(),
            app.player.state().duration,
        );
        if state.last_mpris != Some(key) {
            update_mpris(mpris, app);
            state.last_mpris = Some(key);
        }

        let mut hits = app.hit_map;
        terminal.draw(|f| hits = ui::draw(f, app, &settings.ui, &settings.controls))?;
        app.hit_map = hits;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, settings, app, binding) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, settings, app, binding, control_tx, state) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, settings, app, binding),
                Event::Paste(text) => handle_paste(&text, settings, app),
                _ => {}
            }
        }
    }

    Ok(())
}

fn quit(settings: &config::Settings, binding: &Binding) {
    binding
        .element()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
}

/// Move the playhead and show the new position right away.
fn seek_to(app: &mut App, binding: &mut Binding, seconds: f64) {
    binding.seek(seconds);
    app.player.set_position(seconds);
}

fn handle_control_cmd(
    cmd: ControlCmd,
    settings: &config::Settings,
    app: &mut App,
    binding: &mut Binding,
) -> bool {
    match cmd {
        ControlCmd::Quit => {
            quit(settings, binding);
            return true;
        }
        ControlCmd::Play => {
            app.follow_playback_on();
            app.player.set_playing(true);
        }
        ControlCmd::Pause => app.player.set_playing(false),
        ControlCmd::PlayPause => {
            app.follow_playback_on();
            app.player.toggle_play();
        }
        ControlCmd::Stop => {
            app.player.set_playing(false);
            seek_to(app, binding, 0.0);
        }
        ControlCmd::Next => {
            app.follow_playback_on();
            app.player.next();
        }
        ControlCmd::Prev => {
            app.follow_playback_on();
            app.player.previous();
        }
    }

    false
}

fn handle_upload_key(key: KeyEvent, settings: &config::Settings, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.exit_upload_mode(),
        KeyCode::Backspace => app.pop_upload_char(),
        KeyCode::Enter => {
            let input = app.take_upload_input();
            let paths = parse_dropped_paths(&input);
            app.upload(&paths, &settings.upload);
        }
        KeyCode::Char(c) if !c.is_control() => app.push_upload_char(c),
        _ => {}
    }
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    binding: &mut Binding,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    if app.upload_mode {
        state.pending_gg = false;
        handle_upload_key(key, settings, app);
        return false;
    }

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    let step = settings.audio.volume_step;
    let scrub = settings.controls.scrub_seconds as f64;

    match key.code {
        KeyCode::Char('q') => {
            quit(settings, binding);
            return true;
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.follow_playback_off();
                app.cursor_top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            app.follow_playback_off();
            app.cursor_bottom();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.follow_playback_off();
            app.cursor_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.follow_playback_off();
            app.cursor_up();
        }
        KeyCode::Enter => app.play_selected(),
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('L') | KeyCode::Char('H') => {
            let delta = if key.code == KeyCode::Char('L') { scrub } else { -scrub };
            let s = app.player.state();
            if let Some(target) = scrub_target(s.position, delta, s.duration) {
                seek_to(app, binding, target);
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.player.step_volume(step, step),
        KeyCode::Char('-') => app.player.step_volume(-step, step),
        KeyCode::Char('a') => app.enter_upload_mode(),
        KeyCode::Char('X') => app.clear_playlist(),
        _ => {}
    }

    false
}

fn handle_mouse_event(
    mouse: MouseEvent,
    settings: &config::Settings,
    app: &mut App,
    binding: &mut Binding,
) {
    if app.upload_mode {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.follow_playback_off();
            app.cursor_down();
        }
        MouseEventKind::ScrollUp => {
            app.follow_playback_off();
            app.cursor_up();
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(hit) = app.click_target(mouse.column, mouse.row) else {
                return;
            };
            match hit {
                Hit::Row(i) => {
                    app.set_selected(i);
                    app.play_selected();
                }
                Hit::Seek { x, left, width } => {
                    let total = app.player.state().duration;
                    if let Some(target) =
                        seek_target(f64::from(x), f64::from(left), f64::from(width), total)
                    {
                        seek_to(app, binding, target);
                    }
                }
                Hit::Volume { x, left, width } => {
                    // Inclusive of the last cell so a click there reaches full volume.
                    let span = f64::from(width.saturating_sub(1));
                    let fraction = if span == 0.0 {
                        Some(1.0)
                    } else {
                        click_fraction(f64::from(x), f64::from(left), span)
                    };
                    if let Some(f) = fraction {
                        let step = settings.audio.volume_step;
                        app.player.set_volume(snap_volume(f as f32, step));
                    }
                }
                Hit::Prev => {
                    app.follow_playback_on();
                    app.player.previous();
                }
                Hit::TogglePlay => {
                    app.follow_playback_on();
                    app.player.toggle_play();
                }
                Hit::Next => {
                    app.follow_playback_on();
                    app.player.next();
                }
            }
        }
        _ => {}
    }
}

/// Bracketed paste: terminals deliver dropped files this way.
fn handle_paste(text: &str, settings: &config::Settings, app: &mut App) {
    if app.upload_mode {
        text.chars()
            .filter(|c| !c.is_control())
            .for_each(|c| app.push_upload_char(c));
        return;
    }

    let paths = parse_dropped_paths(text);
    if paths.is_empty() {
        return;
    }
    log::debug!("paste: {} path(s) dropped", paths.len());
    app.upload(&paths, &settings.upload);
}
