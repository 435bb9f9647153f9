use crate::app::App;
use crate::mpris::MprisHandle;

pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    let player = &app.player;
    mpris.set_track_metadata(
        player.current_index(),
        player.current_track(),
        player.state().duration,
    );
    mpris.set_playback(player.status());
}
