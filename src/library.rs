//! Playlist entries and where they come from: seed data and uploads.

mod ingest;
mod model;
mod paths;
mod seed;

pub use ingest::ingest;
pub use model::{MediaSource, Track};
pub use paths::{collect_handles, parse_dropped_paths};
pub use seed::initial_playlist;
