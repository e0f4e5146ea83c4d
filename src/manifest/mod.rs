//! Gallery manifest generation broken into focused submodules for easier testing.

mod generation;
mod scanning;

pub use generation::{build_gallery_manifest, resolve_scan_root, write_gallery_manifest};
pub use scanning::{
    IMAGE_EXTENSIONS, VIDEO_EXTENSIONS, classify_extension, collect_files_recursively,
};
