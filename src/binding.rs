//! Media binding: the only code that touches the playback element.
//!
//! State flows one way into the element (`MediaBinding::sync`) and element
//! notifications flow back through `MediaBinding::accept`, which drops
//! events left over from a source that has since been replaced.

mod element;
mod reconcile;

pub use element::{ElementEvent, LoadToken, MediaElement, MediaEvent};
pub use reconcile::{Effect, reconcile};

use crate::player::Snapshot;

pub struct MediaBinding<E: MediaElement> {
    element: E,
    last: Option<Snapshot>,
    token: LoadToken,
}

impl<E: MediaElement> MediaBinding<E> {
    pub fn new(element: E) -> Self {
        Self {
            element,
            last: None,
            token: LoadToken::default(),
        }
    }

    /// Push `next` into the element and remember it. Returns what was applied.
    pub fn sync(&mut self, next: &Snapshot) -> Vec<Effect> {
        let effects = reconcile(self.last.as_ref(), next);
        for effect in &effects {
            self.apply(effect);
        }
        self.last = Some(next.clone());
        effects
    }

    /// Move the element's playhead. Not part of the snapshot: seeking is a
    /// one-off command, not state.
    pub fn seek(&mut self, seconds: f64) {
        if self.last.as_ref().is_some_and(|s| s.source.is_some()) {
            self.element.seek(seconds);
        }
    }

    /// Filter an element notification. Stale events are dropped; failures are
    /// logged here and never reach the player state.
    pub fn accept(&self, ev: ElementEvent) -> Option<MediaEvent> {
        if ev.token != self.token {
            log::trace!("dropping stale element event {:?}", ev.event);
            return None;
        }
        match ev.event {
            MediaEvent::PlayRejected(reason) => {
                log::warn!("playback start rejected: {reason}");
                None
            }
            MediaEvent::LoadFailed(reason) => {
                log::warn!("could not load source: {reason}");
                None
            }
            other => Some(other),
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    #[cfg(test)]
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::Load(source) => {
                self.token = self.token.next();
                self.element.load(self.token, source.as_ref());
            }
            Effect::SetVolume(v) => self.element.set_volume(*v),
            Effect::Play => {
                if let Err(e) = self.element.play() {
                    log::warn!("playback start rejected: {e}");
                }
            }
            Effect::Pause => self.element.pause(),
        }
    }
}

#[cfg(test)]
mod tests;
