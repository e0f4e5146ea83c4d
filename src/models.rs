//! Data structures read from and written to campaign data directories.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Campaign session manifest, usually `data/<campaign>/sessions.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionManifest {
  /// Sessions in authored order.
  #[serde(default, deserialize_with = "null_as_default")]
  pub sessions: Vec<Session>,
}

/// A single field session. Only the media block is of interest here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
  /// Media captured during the session.
  #[serde(default, deserialize_with = "null_as_default")]
  pub media: SessionMedia,
}

/// Raw media references declared by a session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionMedia {
  /// Image references as authored.
  #[serde(default, deserialize_with = "null_as_default")]
  pub images: Vec<Value>,
  /// Video references as authored.
  #[serde(default, deserialize_with = "null_as_default")]
  pub videos: Vec<Value>,
}

impl SessionMedia {
  /// Raw reference strings of the given kind, in authored order.
  ///
  /// Non-string entries are still checked. Booleans and `null` render as `True`, `False`
  /// and `None`; numbers, arrays and objects render as their JSON text.
  pub fn references(&self, kind: MediaKind) -> impl Iterator<Item = String> + '_ {
    let values = match kind {
      MediaKind::Images => &self.images,
      MediaKind::Videos => &self.videos,
    };
    values.iter().map(|value| match value {
      Value::String(text) => text.clone(),
      Value::Bool(true) => "True".to_string(),
      Value::Bool(false) => "False".to_string(),
      Value::Null => "None".to_string(),
      other => other.to_string(),
    })
  }
}

/// Kinds of media a session can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
  /// Entries of `media.images`.
  Images,
  /// Entries of `media.videos`.
  Videos,
}

impl MediaKind {
  /// Every kind, in the order references are checked.
  pub const ALL: [MediaKind; 2] = [MediaKind::Images, MediaKind::Videos];

  /// JSON field name of the kind.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Images => "images",
      Self::Videos => "videos",
    }
  }
}

/// Bucket a gallery file is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
  /// Still images.
  Image,
  /// Video clips.
  Video,
  /// Anything else, including files without an extension.
  Other,
}

/// Snapshot of the gallery files available for a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryManifest {
  /// Campaign identifier the manifest was built for.
  pub campaign: String,
  /// Repository-relative directory that was scanned.
  pub scan_root: String,
  /// Repository-relative image paths.
  pub images: Vec<String>,
  /// Repository-relative video paths.
  pub videos: Vec<String>,
  /// Repository-relative paths of every other file.
  pub other: Vec<String>,
}

impl GalleryManifest {
  /// Create an empty manifest for `campaign` rooted at `scan_root`.
  pub fn new(campaign: impl Into<String>, scan_root: impl Into<String>) -> Self {
    Self {
      campaign: campaign.into(),
      scan_root: scan_root.into(),
      ..Self::default()
    }
  }

  /// Append `path` to the bucket matching `class`.
  pub fn push(&mut self, class: MediaClass, path: String) {
    match class {
      MediaClass::Image => self.images.push(path),
      MediaClass::Video => self.videos.push(path),
      MediaClass::Other => self.other.push(path),
    }
  }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
