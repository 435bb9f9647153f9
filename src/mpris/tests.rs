use super::*;
use std::sync::mpsc;

fn handle_with(state: Arc<Mutex<SharedState>>) -> MprisHandle {
    let (notify_tx, _notify_rx) = mpsc::channel::<()>();
    MprisHandle {
        state,
        notify: notify_tx,
    }
}

fn iface_with(state: Arc<Mutex<SharedState>>) -> (PlayerIface, mpsc::Receiver<ControlCmd>) {
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    (PlayerIface { tx, state }, rx)
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = handle_with(state.clone());

    let track = Track::new("Test Title", "Test Artist", "0:00").with_file("/tmp/music/test.mp3");
    handle.set_track_metadata(Some(7), Some(&track), Some(1.234_567));

    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert_eq!(s.artist, vec!["Test Artist".to_string()]);
        assert_eq!(s.url.as_deref(), Some("file:///tmp/music/test.mp3"));
        assert_eq!(s.length_micros, Some(1_234_567));
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/7")
        );
    }

    handle.set_track_metadata(None, None, None);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert!(s.artist.is_empty());
        assert_eq!(s.url, None);
        assert_eq!(s.length_micros, None);
        assert!(s.track_id.is_none());
    }
}

#[test]
fn remote_tracks_publish_their_url_and_unknown_length_is_omitted() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = handle_with(state.clone());

    let track = Track::new("Radio", "Band", "4:00").with_url("https://example.org/a.mp3");
    handle.set_track_metadata(Some(0), Some(&track), None);

    let s = state.lock().unwrap();
    assert_eq!(s.url.as_deref(), Some("https://example.org/a.mp3"));
    assert_eq!(s.length_micros, None);
}

#[test]
fn playback_status_maps_player_status() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = handle_with(state.clone());
    let (iface, _rx) = iface_with(state);

    assert_eq!(iface.playback_status(), "Stopped");

    handle.set_playback(PlaybackStatus::Playing);
    assert_eq!(iface.playback_status(), "Playing");

    handle.set_playback(PlaybackStatus::Ready);
    assert_eq!(iface.playback_status(), "Paused");

    handle.set_playback(PlaybackStatus::Idle);
    assert_eq!(iface.playback_status(), "Stopped");
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (iface, _rx) = iface_with(state.clone());
    assert!(iface.metadata().is_empty());

    {
        let mut s = state.lock().unwrap();
        s.title = Some("Title".to_string());
        s.artist = vec!["Artist".to_string()];
        s.url = Some("file:///tmp/test.mp3".to_string());
        s.length_micros = Some(42);
        s.track_id = ObjectPath::try_from("/org/mpris/MediaPlayer2/track/1")
            .ok()
            .map(OwnedObjectPath::from);
    }

    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "xesam:url",
        "mpris:length",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}

#[test]
fn player_methods_enqueue_control_commands() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (iface, rx) = iface_with(state);

    iface.play();
    iface.pause();
    iface.play_pause();
    iface.next();
    iface.previous();
    iface.stop();

    let got: Vec<ControlCmd> = rx.try_iter().collect();
    assert_eq!(
        got,
        vec![
            ControlCmd::Play,
            ControlCmd::Pause,
            ControlCmd::PlayPause,
            ControlCmd::Next,
            ControlCmd::Prev,
            ControlCmd::Stop,
        ]
    );
}
