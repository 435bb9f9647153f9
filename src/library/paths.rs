//! Turning user input (CLI args, prompt text, terminal drops) into file handles.

use std::path::{Path, PathBuf};

use url::Url;
use walkdir::WalkDir;

use crate::config::UploadSettings;

use super::model::FileHandle;

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Expand `paths` into file handles. Directories are walked per `settings`;
/// plain files are taken as-is; missing paths are skipped.
///
/// Files inside a directory come out sorted by name so uploads are stable.
pub fn collect_handles(paths: &[PathBuf], settings: &UploadSettings) -> Vec<FileHandle> {
    let mut handles = Vec::new();

    for root in paths {
        if root.is_file() {
            handles.push(FileHandle::from_path(root));
            continue;
        }
        if !root.is_dir() {
            log::warn!("upload path {} does not exist", root.display());
            continue;
        }

        let mut walker = WalkDir::new(root)
            .follow_links(settings.follow_links)
            .sort_by_file_name();

        // Non-recursive = only the root directory.
        let depth_cap = if settings.recursive {
            settings.max_depth
        } else {
            Some(1)
        };
        if let Some(d) = depth_cap {
            walker = walker.max_depth(d);
        }

        for entry in walker
            .into_iter()
            .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(Result::ok)
        {
            if entry.file_type().is_file() || entry.path().is_file() {
                handles.push(FileHandle::from_path(entry.path()));
            }
        }
    }

    handles
}

/// Split text dropped onto the terminal (or typed into the upload prompt)
/// into paths.
///
/// Terminals deliver drops as bracketed paste: one or more paths separated by
/// whitespace or newlines, either quoted, backslash-escaped or as `file://` URIs.
pub fn parse_dropped_paths(text: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => quote = Some(c),
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    paths.push(normalize_dropped(&current));
                    current.clear();
                }
            }
            (None, c) => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(normalize_dropped(&current));
    }

    paths
}

fn normalize_dropped(raw: &str) -> PathBuf {
    if raw.starts_with("file:") {
        if let Some(path) = Url::parse(raw).ok().and_then(|u| u.to_file_path().ok()) {
            return path;
        }
        log::debug!("not a local file URI, keeping as a path: {raw}");
    }
    PathBuf::from(raw)
}
