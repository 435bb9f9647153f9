use std::path::PathBuf;

use crate::app::App;
use crate::config;
use crate::library::initial_playlist;
use crate::player::Player;

/// Build the app: seeded playlist, then whatever was passed on the command line.
pub fn build_app(settings: &config::Settings, paths: &[PathBuf]) -> App {
    let mut player = Player::new(Vec::new(), settings.audio.initial_volume);
    player.replace_playlist(initial_playlist(&settings.playlist));
    log::info!("startup: {} seeded track(s)", player.len());

    let mut app = App::new(player);
    if !paths.is_empty() {
        app.upload(paths, &settings.upload);
    }
    app
}
