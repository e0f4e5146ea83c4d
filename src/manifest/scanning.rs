//! Directory scanning utilities for harvesting gallery media.

use std::path::{Path, PathBuf};

use log::{trace, warn};
use walkdir::WalkDir;

use crate::error::GalleryResult;
use crate::models::MediaClass;

/// Extensions (lowercase, without the dot) treated as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg"];
/// Extensions (lowercase, without the dot) treated as videos.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

/// Walk `scan_root` collecting every regular file in lexicographic, depth-first order.
///
/// Symlinked directories are not descended into. A symlink is kept only when it resolves
/// to a regular file. Entries below `scan_root` that cannot be read are skipped with a
/// warning; failing to open `scan_root` itself is an error.
pub fn collect_files_recursively(scan_root: &Path) -> GalleryResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(scan_root)
        .follow_links(false)
        .sort_by_file_name()
        .min_depth(1)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => {
                warn!("skipping unreadable gallery entry: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.path().is_file() {
            continue;
        }
        trace!("found {}", entry.path().display());
        files.push(entry.into_path());
    }
    Ok(files)
}

/// Classify a file by its lowercased extension. Unknown or missing extensions fall back to
/// [`MediaClass::Other`].
pub fn classify_extension(path: &Path) -> MediaClass {
    let Some(extension) = path.extension() else {
        return MediaClass::Other;
    };
    let extension = extension.to_string_lossy().to_lowercase();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        MediaClass::Image
    } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        MediaClass::Video
    } else {
        MediaClass::Other
    }
}
