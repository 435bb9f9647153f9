use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::AudioElement;
use crate::binding::MediaBinding;
use crate::error::Result;
use crate::logging;
use crate::mpris::ControlCmd;

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

/// Print the effective configuration as TOML.
pub fn print_config() -> Result<()> {
    let settings = settings::load_settings();
    print!("{}", settings.to_toml()?);
    Ok(())
}

/// Run the player until the user quits. `paths` are uploaded at startup.
pub fn run(paths: &[PathBuf]) -> Result<()> {
    let settings = settings::load_settings();
    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("playdeck: {e}");
    }
    log::info!("playdeck {} starting", env!("CARGO_PKG_VERSION"));

    let mut app = startup::build_app(&settings, paths);
    let mut binding = MediaBinding::new(AudioElement::new(settings.audio.clone()));

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = event_loop::EventLoopState::new();
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut binding,
        &mpris,
        &control_tx,
        &control_rx,
        &mut state,
    );

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        log::error!("event loop failed: {e}");
    }
    run_result
}
