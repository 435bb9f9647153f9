//! Upload ingestion: turns dropped or picked files into playlist entries.

use super::model::{FileHandle, Track};

/// Duration label given to every uploaded track. The real length is never read.
pub const UPLOAD_DURATION_LABEL: &str = "0:00";

const AUDIO_PREFIX: &str = "audio/";

fn is_audio(handle: &FileHandle) -> bool {
    handle
        .content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with(AUDIO_PREFIX)
}

/// Strip the last dot-delimited suffix only: `a.b.mp3` -> `a.b`.
///
/// Names without a dot, or whose only dot is leading (`.hidden`), are kept whole.
pub fn title_from_name(name: &str) -> String {
    match name.rfind('.') {
        Some(0) | None => name.to_string(),
        Some(i) => name[..i].to_string(),
    }
}

/// Convert accepted handles into tracks, in input order.
///
/// Handles whose declared type is not `audio/*` are dropped without notice.
pub fn ingest<I>(handles: I, artist_label: &str) -> Vec<Track>
where
    I: IntoIterator<Item = FileHandle>,
{
    let mut tracks = Vec::new();
    let mut dropped = 0usize;

    for handle in handles {
        if !is_audio(&handle) {
            log::debug!(
                "ignoring upload {:?} with type {}",
                handle.name,
                handle.content_type
            );
            dropped += 1;
            continue;
        }

        tracks.push(
            Track::new(
                title_from_name(&handle.name),
                artist_label,
                UPLOAD_DURATION_LABEL,
            )
            .with_file(handle.path),
        );
    }

    if dropped > 0 {
        log::debug!("upload dropped {dropped} non-audio file(s)");
    }
    tracks
}
