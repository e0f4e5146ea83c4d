//! Generate the gallery manifest by scanning the campaign's media directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, trace};

use crate::asset_paths::repository_relative_path;
use crate::error::{GalleryError, GalleryResult};
use crate::manifest::scanning::{classify_extension, collect_files_recursively};
use crate::models::GalleryManifest;
use crate::project::GalleryLayout;

/// Pick the directory to scan for `campaign`.
///
/// A sub-directory of the gallery named after the campaign wins; otherwise the whole gallery
/// directory is scanned. Fails when the gallery directory itself is absent.
pub fn resolve_scan_root(
  root: &Path,
  layout: &GalleryLayout,
  campaign: &str,
) -> GalleryResult<PathBuf> {
  let gallery = layout.gallery_path(root);
  if !gallery.is_dir() {
    return Err(GalleryError::GalleryDirMissing { path: gallery });
  }

  let candidate = layout.campaign_gallery_path(root, campaign);
  if candidate.is_dir() {
    Ok(candidate)
  } else {
    Ok(gallery)
  }
}

/// Scan the gallery for `campaign` and classify every file found.
pub fn build_gallery_manifest(
  root: &Path,
  layout: &GalleryLayout,
  campaign: &str,
) -> GalleryResult<GalleryManifest> {
  let scan_root = resolve_scan_root(root, layout, campaign)?;
  info!("scanning {}", scan_root.display());

  let mut manifest = GalleryManifest::new(campaign, relative_to_root(root, &scan_root));
  for path in collect_files_recursively(&scan_root)? {
    let class = classify_extension(&path);
    let relative = relative_to_root(root, &path);
    trace!("{relative} -> {class:?}");
    manifest.push(class, relative);
  }

  Ok(manifest)
}

/// Serialise `manifest` as indented JSON at `path`, replacing any previous file.
pub fn write_gallery_manifest(path: &Path, manifest: &GalleryManifest) -> GalleryResult<()> {
  let json = serde_json::to_string_pretty(manifest).map_err(|source| GalleryError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(|source| GalleryError::Io {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  fs::write(path, json).map_err(|source| GalleryError::Io {
    path: path.to_path_buf(),
    source,
  })
}

fn relative_to_root(root: &Path, path: &Path) -> String {
  repository_relative_path(root, path)
    .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
