//! Loading campaign session manifests from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{GalleryError, GalleryResult};
use crate::models::SessionManifest;

/// Load and parse a session manifest.
///
/// An absent file is reported as [`GalleryError::ManifestNotFound`] so callers can tell it
/// apart from unreadable or malformed input.
pub fn load_session_manifest(path: &Path) -> GalleryResult<SessionManifest> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(err) if err.kind() == ErrorKind::NotFound => {
      return Err(GalleryError::ManifestNotFound {
        path: path.to_path_buf(),
      });
    }
    Err(source) => {
      return Err(GalleryError::Io {
        path: path.to_path_buf(),
        source,
      });
    }
  };

  serde_json::from_str(&content).map_err(|source| GalleryError::Parse {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn missing_file_is_reported_as_not_found() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("sessions.json");

    let err = load_session_manifest(&path).unwrap_err();
    assert!(matches!(err, GalleryError::ManifestNotFound { path: ref p } if p == &path));
  }

  #[test]
  fn malformed_json_is_a_parse_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("sessions.json");
    fs::write(&path, r#"{"sessions": [}"#).unwrap();

    let err = load_session_manifest(&path).unwrap_err();
    assert!(matches!(err, GalleryError::Parse { .. }));
  }

  #[test]
  fn reads_sessions_in_order() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("sessions.json");
    fs::write(
      &path,
      r#"{"sessions": [
        {"media": {"images": ["first.jpg"]}},
        {"media": {"images": ["second.jpg"]}}
      ]}"#,
    )
    .unwrap();

    let manifest = load_session_manifest(&path).unwrap();
    assert_eq!(manifest.sessions.len(), 2);
    assert_eq!(manifest.sessions[1].media.images[0], "second.jpg");
  }
}
