//! Cross-check the media references declared in a campaign session manifest against the
//! files present in the repository.

mod loader;
mod report;

use std::path::Path;

use log::{debug, info};

use crate::asset_paths::{is_external_reference, normalize_media_reference};
use crate::error::GalleryResult;
use crate::models::{MediaKind, SessionManifest};
use crate::project::GalleryLayout;

pub use loader::load_session_manifest;
pub use report::ValidationReport;

/// Load the session manifest of `campaign` and check every declared media reference.
pub fn validate_session_media(
  root: &Path,
  layout: &GalleryLayout,
  campaign: &str,
) -> GalleryResult<ValidationReport> {
  let sessions_path = layout.sessions_path(root, campaign);
  info!("validating media references in {}", sessions_path.display());

  let manifest = load_session_manifest(&sessions_path)?;
  let mut report = check_media_references(root, &manifest);
  report.sessions_file = layout.sessions_file.clone();
  Ok(report)
}

/// Resolve every image and video reference of `manifest` against `root`.
///
/// External references are counted but never looked up on disk.
pub fn check_media_references(root: &Path, manifest: &SessionManifest) -> ValidationReport {
  let mut report = ValidationReport::default();

  for (index, session) in manifest.sessions.iter().enumerate() {
    for kind in MediaKind::ALL {
      for raw in session.media.references(kind) {
        report.record_checked();

        let normalized = normalize_media_reference(&raw);
        if normalized.is_empty() || is_external_reference(&normalized) {
          continue;
        }

        if !root.join(&normalized).exists() {
          debug!(
            "session #{index} {}: {raw:?} -> {normalized} is missing",
            kind.as_str()
          );
          report.record_missing(normalized);
        }
      }
    }
  }

  report
}
