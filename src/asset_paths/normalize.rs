use super::filters::is_external_reference;

/// Prefix under which gallery media is published.
pub const GALLERY_PREFIX: &str = "assets/gallery/";

const ASSETS_PREFIX: &str = "assets/";
const SHORT_GALLERY_PREFIX: &str = "gallery/";

/// Map an author-provided media reference onto the path the gallery front-end loads.
///
/// External URLs and `assets/...` paths are kept as-is, `gallery/...` gains the `assets/`
/// prefix and any other fragment is placed under `assets/gallery/` with leading slashes
/// removed. Blank input normalises to an empty string.
pub fn normalize_media_reference(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if is_external_reference(trimmed) {
        return trimmed.to_string();
    }

    if trimmed.starts_with(SHORT_GALLERY_PREFIX) {
        return format!("{ASSETS_PREFIX}{trimmed}");
    }

    if trimmed.starts_with(ASSETS_PREFIX) {
        return trimmed.to_string();
    }

    format!("{GALLERY_PREFIX}{}", trimmed.trim_start_matches('/'))
}
