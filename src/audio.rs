//! The playback element: a `rodio` sink driven from its own thread.

mod element;
mod sink;
mod thread;
mod types;

pub use element::AudioElement;
