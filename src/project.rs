//! Filesystem layout of a gallery site repository.

use std::path::{Path, PathBuf};

/// Describes where campaign data and gallery media live relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryLayout {
  /// Directory holding one sub-directory of JSON data per campaign.
  pub data_dir: String,
  /// Directory holding gallery media, optionally split per campaign.
  pub gallery_dir: String,
  /// File name of the session manifest inside a campaign data directory.
  pub sessions_file: String,
  /// File name of the generated gallery manifest inside a campaign data directory.
  pub manifest_file: String,
}

impl Default for GalleryLayout {
  fn default() -> Self {
    Self {
      data_dir: "data".into(),
      gallery_dir: "assets/gallery".into(),
      sessions_file: "sessions.json".into(),
      manifest_file: "gallery_manifest.json".into(),
    }
  }
}

impl GalleryLayout {
  /// Directory holding the JSON data for `campaign`.
  pub fn campaign_data_path(&self, root: &Path, campaign: &str) -> PathBuf {
    root.join(&self.data_dir).join(campaign)
  }

  /// Session manifest for `campaign`, e.g. `data/<campaign>/sessions.json`.
  pub fn sessions_path(&self, root: &Path, campaign: &str) -> PathBuf {
    self
      .campaign_data_path(root, campaign)
      .join(&self.sessions_file)
  }

  /// Generated gallery manifest for `campaign`, e.g. `data/<campaign>/gallery_manifest.json`.
  pub fn manifest_path(&self, root: &Path, campaign: &str) -> PathBuf {
    self
      .campaign_data_path(root, campaign)
      .join(&self.manifest_file)
  }

  /// Top-level gallery media directory.
  pub fn gallery_path(&self, root: &Path) -> PathBuf {
    root.join(&self.gallery_dir)
  }

  /// Campaign-specific media directory; it may not exist.
  pub fn campaign_gallery_path(&self, root: &Path, campaign: &str) -> PathBuf {
    self.gallery_path(root).join(campaign)
  }
}
