use crate::binding::MediaEvent;

use super::state::Player;

impl Player {
    /// Fold an element notification into the player state.
    ///
    /// Rejections and load failures leave play intent untouched: the user's
    /// last request stands even if the element is not actually playing.
    pub fn apply_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Position(secs) => self.set_position(secs),
            MediaEvent::DurationKnown(secs) => self.set_duration(secs),
            MediaEvent::Ended => self.finish_track(),
            MediaEvent::PlayRejected(_) | MediaEvent::LoadFailed(_) => {}
        }
    }
}
