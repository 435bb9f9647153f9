use crate::error::Result;
use crate::library::MediaSource;

/// Identifies one `load` on the element. Events carrying an older token belong
/// to a source that has since been replaced and must be ignored.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadToken(pub u64);

impl LoadToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Notifications coming back from the playback element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Periodic position update, in seconds.
    Position(f64),
    /// Total length became known after the source was opened, in seconds.
    DurationKnown(f64),
    /// The source played through to its end.
    Ended,
    /// A play request could not be honoured.
    PlayRejected(String),
    /// The source could not be opened or decoded.
    LoadFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementEvent {
    pub token: LoadToken,
    pub event: MediaEvent,
}

/// The native playback element the binding drives.
///
/// `load` replaces the source and leaves the element paused at the start;
/// `None` unloads it. Only `play` can fail synchronously; later failures
/// arrive as `MediaEvent::PlayRejected`.
pub trait MediaElement {
    fn load(&mut self, token: LoadToken, source: Option<&MediaSource>);
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn seek(&mut self, seconds: f64);
}
