use super::*;
use crate::error::{Error, Result};
use crate::library::{MediaSource, Track};
use crate::player::Player;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(LoadToken, Option<MediaSource>),
    Play,
    Pause,
    Volume(f32),
    Seek(f64),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    reject_play: bool,
}

impl MediaElement for Recorder {
    fn load(&mut self, token: LoadToken, source: Option<&MediaSource>) {
        self.calls.push(Call::Load(token, source.cloned()));
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push(Call::Play);
        if self.reject_play {
            return Err(Error::ElementGone);
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::Volume(volume));
    }

    fn seek(&mut self, seconds: f64) {
        self.calls.push(Call::Seek(seconds));
    }
}

impl Recorder {
    fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

fn file(name: &str) -> MediaSource {
    MediaSource::File(PathBuf::from(format!("/music/{name}.mp3")))
}

fn player() -> Player {
    Player::new(
        vec![
            Track::new("a", "x", "1:00").with_file("/music/a.mp3"),
            Track::new("b", "x", "1:00").with_file("/music/b.mp3"),
            Track::new("c", "x", "1:00")
                .with_file("/music/c.mp3")
                .with_url("https://example.com/c.mp3"),
        ],
        0.7,
    )
}

fn bound() -> (Player, MediaBinding<Recorder>) {
    let p = player();
    let mut b = MediaBinding::new(Recorder::default());
    b.sync(&p.snapshot());
    b.element_mut().take();
    (p, b)
}

#[test]
fn first_sync_loads_source_and_sets_volume() {
    let p = player();
    let mut b = MediaBinding::new(Recorder::default());
    let effects = b.sync(&p.snapshot());
    assert_eq!(
        effects,
        vec![Effect::Load(Some(file("a"))), Effect::SetVolume(0.7)]
    );
    assert_eq!(
        b.element_mut().take(),
        vec![Call::Load(LoadToken(1), Some(file("a"))), Call::Volume(0.7)]
    );
}

#[test]
fn select_track_loads_then_plays() {
    let (mut p, mut b) = bound();
    p.select_track(1);
    b.sync(&p.snapshot());
    assert_eq!(
        b.element_mut().take(),
        vec![Call::Load(LoadToken(2), Some(file("b"))), Call::Play]
    );
}

#[test]
fn network_url_is_preferred_when_resolving() {
    let (mut p, mut b) = bound();
    p.select_track(2);
    b.sync(&p.snapshot());
    assert_eq!(
        b.element_mut().take()[0],
        Call::Load(
            LoadToken(2),
            Some(MediaSource::Url("https://example.com/c.mp3".into()))
        )
    );
}

#[test]
fn intent_change_alone_never_touches_source() {
    let (mut p, mut b) = bound();
    p.toggle_play();
    b.sync(&p.snapshot());
    assert_eq!(b.element_mut().take(), vec![Call::Play]);

    p.toggle_play();
    b.sync(&p.snapshot());
    assert_eq!(b.element_mut().take(), vec![Call::Pause]);

    // Reselecting the current track keeps the loaded source.
    p.select_track(0);
    b.sync(&p.snapshot());
    assert_eq!(b.element_mut().take(), vec![Call::Play]);
}

#[test]
fn unchanged_snapshot_produces_no_effects() {
    let (p, mut b) = bound();
    assert!(b.sync(&p.snapshot()).is_empty());
    assert!(b.element_mut().take().is_empty());
}

#[test]
fn volume_change_only_forwards_gain() {
    let (mut p, mut b) = bound();
    p.set_volume(0.3);
    b.sync(&p.snapshot());
    assert_eq!(b.element_mut().take(), vec![Call::Volume(0.3)]);
}

#[test]
fn injected_out_of_range_volume_is_clamped_before_forwarding() {
    let (p, mut b) = bound();

    let mut snap = p.snapshot();
    snap.volume = 1.1;
    b.sync(&snap);
    assert_eq!(b.element_mut().take(), vec![Call::Volume(1.0)]);

    snap.volume = -0.1;
    b.sync(&snap);
    assert_eq!(b.element_mut().take(), vec![Call::Volume(0.0)]);
}

#[test]
fn appending_does_not_reload_current_source() {
    let (mut p, mut b) = bound();
    p.select_track(0);
    b.sync(&p.snapshot());
    b.element_mut().take();

    p.append(vec![Track::new("d", "x", "0:00").with_file("/music/d.mp3")]);
    assert!(b.sync(&p.snapshot()).is_empty());
}

#[test]
fn replacing_playlist_reloads_when_source_differs() {
    let (mut p, mut b) = bound();
    p.replace_playlist(vec![Track::new("z", "x", "0:00").with_file("/music/z.mp3")]);
    b.sync(&p.snapshot());
    assert_eq!(
        b.element_mut().take(),
        vec![Call::Load(LoadToken(2), Some(file("z")))]
    );
}

#[test]
fn replacing_playlist_with_same_source_still_reloads() {
    let (mut p, mut b) = bound();
    p.select_track(0);
    b.sync(&p.snapshot());
    p.apply_event(MediaEvent::DurationKnown(100.0));
    p.apply_event(MediaEvent::Position(40.0));
    b.element_mut().take();

    let source = p.snapshot().source;
    p.replace_playlist(p.playlist().to_vec());
    assert_eq!(p.snapshot().source, source);
    assert_eq!(p.state().position, 0.0);
    assert_eq!(p.state().duration, None);

    b.sync(&p.snapshot());
    let calls = b.element_mut().take();
    assert_eq!(calls, vec![Call::Load(LoadToken(2), source)]);
}

#[test]
fn clearing_unloads_without_playing() {
    let (mut p, mut b) = bound();
    p.select_track(1);
    b.sync(&p.snapshot());
    b.element_mut().take();

    p.clear();
    b.sync(&p.snapshot());
    assert_eq!(
        b.element_mut().take(),
        vec![Call::Load(LoadToken(3), None)]
    );
}

#[test]
fn end_of_track_reloads_next_and_plays_in_one_step() {
    let (mut p, mut b) = bound();
    p.select_track(0);
    b.sync(&p.snapshot());
    b.element_mut().take();

    p.apply_event(MediaEvent::Ended);
    let effects = b.sync(&p.snapshot());
    assert_eq!(effects, vec![Effect::Load(Some(file("b"))), Effect::Play]);
}

#[test]
fn end_of_single_track_reloads_same_source() {
    let mut p = Player::new(
        vec![Track::new("solo", "x", "1:00").with_file("/music/solo.mp3")],
        0.5,
    );
    let mut b = MediaBinding::new(Recorder::default());
    p.select_track(0);
    b.sync(&p.snapshot());
    b.element_mut().take();

    p.apply_event(MediaEvent::Ended);
    b.sync(&p.snapshot());
    assert_eq!(
        b.element_mut().take(),
        vec![Call::Load(LoadToken(2), Some(file("solo"))), Call::Play]
    );
}

#[test]
fn rejected_play_is_swallowed_and_intent_kept() {
    let mut p = player();
    let mut b = MediaBinding::new(Recorder {
        reject_play: true,
        ..Recorder::default()
    });
    p.select_track(1);
    let effects = b.sync(&p.snapshot());
    assert!(effects.contains(&Effect::Play));
    assert!(p.is_playing());
}

#[test]
fn accept_drops_stale_and_failure_events() {
    let (mut p, mut b) = bound();
    assert_eq!(
        b.accept(ElementEvent {
            token: LoadToken(1),
            event: MediaEvent::DurationKnown(60.0),
        }),
        Some(MediaEvent::DurationKnown(60.0))
    );

    p.select_track(1);
    b.sync(&p.snapshot());

    // Token 1 belonged to the previous source.
    assert_eq!(
        b.accept(ElementEvent {
            token: LoadToken(1),
            event: MediaEvent::Ended,
        }),
        None
    );
    assert_eq!(
        b.accept(ElementEvent {
            token: LoadToken(2),
            event: MediaEvent::PlayRejected("denied".into()),
        }),
        None
    );
    assert_eq!(
        b.accept(ElementEvent {
            token: LoadToken(2),
            event: MediaEvent::Ended,
        }),
        Some(MediaEvent::Ended)
    );
}

#[test]
fn seek_is_forwarded_only_with_a_source() {
    let (_, mut b) = bound();
    b.seek(12.5);
    assert_eq!(b.element_mut().take(), vec![Call::Seek(12.5)]);

    let empty = Player::new(Vec::new(), 0.7);
    let mut b = MediaBinding::new(Recorder::default());
    b.sync(&empty.snapshot());
    b.element_mut().take();
    b.seek(3.0);
    assert!(b.element_mut().take().is_empty());
}

#[test]
fn reconcile_is_pure_over_snapshots() {
    let p = player();
    let a = p.snapshot();
    let mut playing = a.clone();
    playing.playing = true;

    assert_eq!(reconcile(Some(&a), &playing), vec![Effect::Play]);
    assert_eq!(reconcile(Some(&playing), &a), vec![Effect::Pause]);
    assert_eq!(
        reconcile(None, &playing),
        vec![
            Effect::Load(Some(file("a"))),
            Effect::SetVolume(0.7),
            Effect::Play
        ]
    );
}
