#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod models;
pub mod project;
pub mod validation;

pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult};
pub use models::{GalleryManifest, MediaClass, MediaKind, SessionManifest};
pub use project::GalleryLayout;
pub use validation::ValidationReport;
