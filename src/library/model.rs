use std::path::{Path, PathBuf};

/// Where a track's audio can be fetched from.
///
/// A track may carry both a remote URL and a local file; the URL wins when
/// the binding resolves what to hand to the playback element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Url(String),
    File(PathBuf),
}

/// One playlist entry. Display fields are fixed at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Pre-rendered `m:ss` label. Uploads always carry the placeholder.
    pub duration_label: String,
    pub url: Option<String>,
    pub file: Option<PathBuf>,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration_label: duration.into(),
            url: None,
            file: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Pick the source to play: a network URL if present, otherwise the local file.
    pub fn resolve_source(&self) -> Option<MediaSource> {
        if let Some(url) = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return Some(MediaSource::Url(url.to_string()));
        }
        self.file.clone().map(MediaSource::File)
    }
}

/// A user-supplied file: what a picker or a drop hands over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// Base name including extension, e.g. `track.mp3`.
    pub name: String,
    /// Declared MIME type, e.g. `audio/mpeg`.
    pub content_type: String,
    pub path: PathBuf,
}

impl FileHandle {
    /// Build a handle for `path`, declaring its MIME type from the extension.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Self {
            name,
            content_type,
            path: path.to_path_buf(),
        }
    }
}
