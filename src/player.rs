//! Player model: the playlist store and the transport state machine.
//!
//! `Player` owns the playlist and a `PlayerState` and exposes only atomic
//! transitions. The media binding reads it through `Player::snapshot` and the
//! playback element feeds it back through `Player::apply_event`.

mod events;
mod seek;
mod state;
mod transport;

pub use seek::{click_fraction, scrub_target, seek_target};
pub use state::{PlaybackStatus, Player, Snapshot, clamp_volume};
pub use transport::snap_volume;
