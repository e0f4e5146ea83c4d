use std::path::Path;

/// Express `path` relative to the repository `root` using forward slashes.
///
/// Manifests are consumed by the web front-end, so components are always joined with `/`
/// regardless of the native separator used when the file was discovered. Characters inside
/// a component are left untouched; on Unix a backslash is a legal file name character.
/// Returns `None` when `path` does not live under `root`.
pub fn repository_relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let joined = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Some(joined)
}
