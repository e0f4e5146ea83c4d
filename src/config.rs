//! Project configuration loader describing the gallery site layout.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::project::GalleryLayout;

/// File name searched for at the repository root.
pub const DEFAULT_CONFIG_FILE: &str = "gallery.config.json";

/// Discoverable project configuration describing where campaign data and media live.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Relative path from the repository root to the campaign data directory.
    pub data_dir: String,
    /// Relative path from the repository root to the gallery media directory.
    pub gallery_dir: String,
    /// Session manifest file name inside each campaign data directory.
    pub sessions_file: String,
    /// Gallery manifest file name inside each campaign data directory.
    pub manifest_file: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let layout = GalleryLayout::default();
        Self {
            data_dir: layout.data_dir,
            gallery_dir: layout.gallery_dir,
            sessions_file: layout.sessions_file,
            manifest_file: layout.manifest_file,
        }
    }
}

impl GalleryConfig {
    /// Attempt to load configuration from the repository root.
    ///
    /// A missing file is the common case and silently yields the defaults. A file that
    /// exists but fails to parse is reported and the defaults are used instead.
    pub fn discover(root: &Path) -> Self {
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if !candidate.is_file() {
            debug!("no {} found, using default layout", candidate.display());
            return Self::default();
        }

        Self::from_path(&candidate).unwrap_or_else(|| {
            warn!(
                "ignoring unreadable configuration at {}",
                candidate.display()
            );
            Self::default()
        })
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> GalleryLayout {
        GalleryLayout {
            data_dir: self.data_dir,
            gallery_dir: self.gallery_dir,
            sessions_file: self.sessions_file,
            manifest_file: self.manifest_file,
        }
    }
}
