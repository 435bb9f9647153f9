use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::binding::{ElementEvent, LoadToken, MediaEvent};
use crate::config::AudioSettings;
use crate::library::MediaSource;

use super::sink::{fade_levels, open_sink};
use super::types::AudioCmd;

/// State owned by the audio thread: the output stream and the one loaded sink.
struct Deck {
    stream: Option<OutputStream>,
    events: Sender<ElementEvent>,
    sink: Option<Sink>,
    token: LoadToken,
    volume: f32,
    playing: bool,
    last_report: Instant,
    report_every: Duration,
}

impl Deck {
    fn emit(&self, event: MediaEvent) {
        // The UI side may already be gone during shutdown.
        let _ = self.events.send(ElementEvent {
            token: self.token,
            event,
        });
    }

    fn unload(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.playing = false;
    }

    fn load(&mut self, token: LoadToken, source: Option<MediaSource>) {
        self.unload();
        self.token = token;

        let Some(source) = source else {
            return;
        };
        let path = match source {
            MediaSource::File(path) => path,
            MediaSource::Url(url) => {
                self.emit(MediaEvent::LoadFailed(format!(
                    "remote source {url} cannot be played from a local deck"
                )));
                return;
            }
        };
        let Some(stream) = self.stream.as_ref() else {
            self.emit(MediaEvent::LoadFailed("no audio output device".to_string()));
            return;
        };

        match open_sink(stream, &path, self.volume) {
            Ok((sink, total)) => {
                self.sink = Some(sink);
                if let Some(total) = total {
                    self.emit(MediaEvent::DurationKnown(total.as_secs_f64()));
                }
                self.emit(MediaEvent::Position(0.0));
                self.last_report = Instant::now();
            }
            Err(e) => self.emit(MediaEvent::LoadFailed(e.to_string())),
        }
    }

    fn play(&mut self) {
        match self.sink.as_ref() {
            Some(s) => {
                s.play();
                self.playing = true;
            }
            None => {
                let reason = if self.stream.is_none() {
                    "no audio output device"
                } else {
                    "no playable source loaded"
                };
                self.emit(MediaEvent::PlayRejected(reason.to_string()));
            }
        }
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        self.playing = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
    }

    fn seek(&mut self, to: Duration) {
        let Some(s) = self.sink.as_ref() else {
            return;
        };
        if let Err(e) = s.try_seek(to) {
            log::warn!("seek to {:.1}s failed: {e}", to.as_secs_f64());
            return;
        }
        self.emit(MediaEvent::Position(s.get_pos().as_secs_f64()));
        self.last_report = Instant::now();
    }

    /// Periodic work between commands: end-of-track detection and position reports.
    fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let Some(s) = self.sink.as_ref() else {
            return;
        };
        if s.empty() {
            self.playing = false;
            self.emit(MediaEvent::Ended);
            return;
        }
        if self.last_report.elapsed() >= self.report_every {
            self.emit(MediaEvent::Position(s.get_pos().as_secs_f64()));
            self.last_report = Instant::now();
        }
    }

    fn fade_out(&mut self, fade_out: Duration) {
        const STEPS: u32 = 20;
        if let Some(s) = self.sink.as_ref() {
            if self.playing && !fade_out.is_zero() {
                let step = (fade_out / STEPS).max(Duration::from_millis(1));
                for level in fade_levels(self.volume, u64::from(STEPS)) {
                    s.set_volume(level);
                    thread::sleep(step);
                }
            }
            s.stop();
        }
        self.sink = None;
        self.playing = false;
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<ElementEvent>,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                log::error!("no audio output device: {e}");
                None
            }
        };

        let report_every = Duration::from_millis(audio_settings.position_interval_ms.max(1));
        let mut deck = Deck {
            stream,
            events,
            sink: None,
            token: LoadToken::default(),
            volume: audio_settings.initial_volume,
            playing: false,
            last_report: Instant::now(),
            report_every,
        };

        loop {
            match rx.recv_timeout(report_every) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load { token, source } => deck.load(token, source),
                    AudioCmd::Play => deck.play(),
                    AudioCmd::Pause => deck.pause(),
                    AudioCmd::SetVolume(v) => deck.set_volume(v),
                    AudioCmd::Seek(to) => deck.seek(to),
                    AudioCmd::Quit { fade_out } => {
                        deck.fade_out(fade_out);
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            // Commands can arrive faster than the report interval; tick after each one too.
            deck.tick();
        }
    })
}
