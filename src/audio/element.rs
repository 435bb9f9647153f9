use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::binding::{ElementEvent, LoadToken, MediaElement};
use crate::config::AudioSettings;
use crate::error::{Error, Result};
use crate::library::MediaSource;

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// `rodio`-backed playback element. Commands go to a dedicated audio thread;
/// notifications come back through `drain_events`.
pub struct AudioElement {
    pub(super) tx: Sender<AudioCmd>,
    pub(super) events: Receiver<ElementEvent>,
    pub(super) join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioElement {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<ElementEvent>();

        let audio_handle = spawn_audio_thread(rx, event_tx, audio_settings);

        Self {
            tx,
            events: event_rx,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    fn send(&self, cmd: AudioCmd) -> Result<()> {
        self.tx.send(cmd).map_err(|_| Error::ElementGone)
    }

    /// Everything the audio thread reported since the last call.
    pub fn drain_events(&self) -> Vec<ElementEvent> {
        self.events.try_iter().collect()
    }

    /// Fade out, stop the audio thread and wait for it.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit { fade_out });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaElement for AudioElement {
    fn load(&mut self, token: LoadToken, source: Option<&MediaSource>) {
        let _ = self.send(AudioCmd::Load {
            token,
            source: source.cloned(),
        });
    }

    fn play(&mut self) -> Result<()> {
        self.send(AudioCmd::Play)
    }

    fn pause(&mut self) {
        let _ = self.send(AudioCmd::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        let _ = self.send(AudioCmd::SetVolume(volume));
    }

    fn seek(&mut self, seconds: f64) {
        if seconds.is_finite() {
            let _ = self.send(AudioCmd::Seek(Duration::from_secs_f64(seconds.max(0.0))));
        }
    }
}
