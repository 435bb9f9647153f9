//! Utilities for creating `rodio` sinks from local files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` together with the source's total duration, when known.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::{Error, Result};

/// Create a paused `Sink` for the file at `path` with gain `volume`.
pub(super) fn open_sink(
    stream: &OutputStream,
    path: &Path,
    volume: f32,
) -> Result<(Sink, Option<Duration>)> {
    let file = File::open(path)
        .map_err(|e| Error::Load(format!("failed to open {}: {e}", path.display())))?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| Error::Load(format!("failed to decode {}: {e}", path.display())))?;
    let total = source.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}

/// Volume levels for a linear fade from `start` to silence in `steps` steps.
pub(super) fn fade_levels(start: f32, steps: u64) -> impl Iterator<Item = f32> {
    let steps = steps.max(1);
    (1..=steps).map(move |step| start * (1.0 - step as f32 / steps as f32))
}
