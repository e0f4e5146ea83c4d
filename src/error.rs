//! Error taxonomy shared by the validator and the manifest builder.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Exit status reported when every check passed.
pub const EXIT_OK: u8 = 0;
/// Exit status reported when referenced media is missing.
pub const EXIT_MISSING_MEDIA: u8 = 1;
/// Exit status reported when a required input file or directory is absent.
pub const EXIT_NOT_FOUND: u8 = 2;
/// Exit status reported for unreadable or malformed input.
pub const EXIT_FATAL: u8 = 3;

/// Errors raised while loading campaign data or scanning the gallery.
#[derive(Debug)]
pub enum GalleryError {
  /// The campaign session manifest does not exist.
  ManifestNotFound {
    /// Resolved path that was expected to hold the manifest.
    path: PathBuf,
  },
  /// The top-level gallery media directory does not exist.
  GalleryDirMissing {
    /// Resolved path of the expected gallery directory.
    path: PathBuf,
  },
  /// Failed to read or write a file.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse or serialise JSON.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Failed to traverse the gallery tree.
  Walk {
    /// Source traversal error.
    source: walkdir::Error,
  },
}

impl GalleryError {
  /// Process exit status associated with the error.
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::ManifestNotFound { .. } | Self::GalleryDirMissing { .. } => EXIT_NOT_FOUND,
      Self::Io { .. } | Self::Parse { .. } | Self::Walk { .. } => EXIT_FATAL,
    }
  }

  /// Returns `true` for errors describing an absent required input.
  pub fn is_not_found(&self) -> bool {
    self.exit_code() == EXIT_NOT_FOUND
  }
}

impl std::fmt::Display for GalleryError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::ManifestNotFound { path } => write!(f, "{} not found", path.display()),
      Self::GalleryDirMissing { path } => write!(
        f,
        "No gallery folder found at {}. Create it and add media first.",
        path.display()
      ),
      Self::Io { path, source } => {
        write!(f, "failed to access {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::Walk { source } => write!(f, "failed to scan gallery directory: {source}"),
    }
  }
}

impl std::error::Error for GalleryError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::ManifestNotFound { .. } | Self::GalleryDirMissing { .. } => None,
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
      Self::Walk { source } => Some(source),
    }
  }
}

impl From<walkdir::Error> for GalleryError {
  fn from(source: walkdir::Error) -> Self {
    Self::Walk { source }
  }
}
