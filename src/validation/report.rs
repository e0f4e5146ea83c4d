use std::collections::BTreeSet;
use std::fmt;

use crate::error::{EXIT_MISSING_MEDIA, EXIT_OK};
use crate::project::GalleryLayout;

/// Outcome of checking the media references of a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
  /// File name of the session manifest, quoted in the remediation hints.
  pub sessions_file: String,
  /// Number of references inspected, including external ones.
  pub total: usize,
  /// Number of references that did not resolve, counting repeats.
  pub missing_references: usize,
  /// Distinct normalised paths that did not resolve, sorted.
  pub missing: BTreeSet<String>,
}

impl Default for ValidationReport {
  fn default() -> Self {
    Self {
      sessions_file: GalleryLayout::default().sessions_file,
      total: 0,
      missing_references: 0,
      missing: BTreeSet::new(),
    }
  }
}

impl ValidationReport {
  /// Returns `true` when every local reference resolved.
  pub fn is_clean(&self) -> bool {
    self.missing_references == 0
  }

  /// Process exit status matching the outcome.
  pub fn exit_code(&self) -> u8 {
    if self.is_clean() {
      EXIT_OK
    } else {
      EXIT_MISSING_MEDIA
    }
  }

  pub(crate) fn record_checked(&mut self) {
    self.total += 1;
  }

  pub(crate) fn record_missing(&mut self, path: String) {
    self.missing_references += 1;
    self.missing.insert(path);
  }
}

impl fmt::Display for ValidationReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_clean() {
      return writeln!(
        f,
        "OK: all {} referenced media files exist locally.",
        self.total
      );
    }

    writeln!(
      f,
      "MISSING {} / {} referenced media files:",
      self.missing_references, self.total
    )?;
    for path in &self.missing {
      writeln!(f, "  - {path}")?;
    }
    writeln!(f)?;
    writeln!(f, "Fix options:")?;
    writeln!(f, "  1) Upload the missing files to the exact paths above, OR")?;
    writeln!(
      f,
      "  2) Update {} so media paths match what you actually deployed.",
      self.sessions_file
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clean_report_prints_success_summary() {
    let report = ValidationReport {
      total: 4,
      ..ValidationReport::default()
    };

    assert!(report.is_clean());
    assert_eq!(report.exit_code(), EXIT_OK);
    assert_eq!(
      report.to_string(),
      "OK: all 4 referenced media files exist locally.\n"
    );
  }

  #[test]
  fn missing_paths_are_listed_once_in_sorted_order() {
    let mut report = ValidationReport::default();
    for path in ["assets/gallery/b.jpg", "assets/gallery/a.jpg", "assets/gallery/b.jpg"] {
      report.record_checked();
      report.record_missing(path.to_string());
    }
    report.record_checked();

    let rendered = report.to_string();
    let mut lines = rendered.lines();
    assert_eq!(report.exit_code(), EXIT_MISSING_MEDIA);
    assert_eq!(lines.next(), Some("MISSING 3 / 4 referenced media files:"));
    assert_eq!(lines.next(), Some("  - assets/gallery/a.jpg"));
    assert_eq!(lines.next(), Some("  - assets/gallery/b.jpg"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("Fix options:"));
    assert_eq!(
      lines.nth(1),
      Some("  2) Update sessions.json so media paths match what you actually deployed.")
    );
    assert_eq!(rendered.lines().count(), 7);
  }
}
