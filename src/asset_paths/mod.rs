//! Helpers for normalising media references and repository-relative paths.
//!
//! The normalisation rules mirror the ones applied by the gallery front-end when it loads
//! media, so a reference that resolves here resolves in the browser too. Filtering of
//! external references, the normalisation itself and repository-relative path rendering
//! live in focused submodules so each can be tested on its own.

mod filters;
mod normalize;
mod relative;

pub use filters::is_external_reference;
pub use normalize::{GALLERY_PREFIX, normalize_media_reference};
pub use relative::repository_relative_path;
