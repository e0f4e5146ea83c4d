//! Argument parsing and entry points shared by the `validate-assets` and
//! `build-gallery-manifest` binaries.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::GalleryConfig;
use crate::error::{EXIT_FATAL, EXIT_OK, GalleryError};
use crate::manifest::{build_gallery_manifest, write_gallery_manifest};
use crate::validation::validate_session_media;

/// Options accepted by both tools.
#[derive(Debug, Clone, Args)]
pub struct CampaignArgs {
    /// Campaign id, e.g. buctril-super-2025
    #[arg(long, value_parser = parse_campaign_id)]
    pub campaign: String,

    /// Repository root containing `data/` and `assets/`
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Accept campaign ids that name exactly one directory.
pub fn parse_campaign_id(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("campaign id must not be empty".into());
    }
    if trimmed == "." || trimmed == ".." || trimmed.contains(['/', '\\']) {
        return Err(format!("`{trimmed}` is not a valid campaign id"));
    }
    Ok(trimmed.to_string())
}

/// Check the campaign's session manifest, writing the report to `out`.
///
/// Returns the exit status: `0` when every local reference exists, `1` otherwise.
pub fn run_validate(args: &CampaignArgs, out: &mut dyn Write) -> Result<u8> {
    let layout = GalleryConfig::discover(&args.root).into_layout();
    let report = validate_session_media(&args.root, &layout, &args.campaign)
        .with_context(|| format!("validating media for campaign `{}`", args.campaign))?;

    write!(out, "{report}")?;
    Ok(report.exit_code())
}

/// Build and write the campaign's gallery manifest, writing a summary line to `out`.
pub fn run_build(args: &CampaignArgs, out: &mut dyn Write) -> Result<u8> {
    let layout = GalleryConfig::discover(&args.root).into_layout();
    let manifest = build_gallery_manifest(&args.root, &layout, &args.campaign)
        .with_context(|| format!("scanning gallery for campaign `{}`", args.campaign))?;

    let out_path = layout.manifest_path(&args.root, &args.campaign);
    write_gallery_manifest(&out_path, &manifest)
        .with_context(|| format!("writing gallery manifest for campaign `{}`", args.campaign))?;

    writeln!(
        out,
        "Wrote {} with {} images and {} videos.",
        out_path.display(),
        manifest.images.len(),
        manifest.videos.len()
    )?;
    Ok(EXIT_OK)
}

/// Exit status for an error returned by [`run_validate`] or [`run_build`].
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GalleryError>()
        .map_or(EXIT_FATAL, GalleryError::exit_code)
}

/// Print `err` to stderr and convert it into the matching exit status.
///
/// Missing inputs get a one-line message naming the resolved path; anything else prints
/// the full cause chain.
pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<GalleryError>() {
        Some(gallery) if gallery.is_not_found() => eprintln!("ERROR: {gallery}"),
        _ => eprintln!("Error: {err:#}"),
    }
    ExitCode::from(exit_code_for(err))
}

/// Turn the outcome of a run into the process exit status.
pub fn finish(outcome: Result<u8>) -> ExitCode {
    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            log::debug!("run failed: {err:?}");
            report_failure(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_MISSING_MEDIA, EXIT_NOT_FOUND};
    use std::fs;
    use tempfile::tempdir;

    fn args(root: &std::path::Path, campaign: &str) -> CampaignArgs {
        CampaignArgs {
            campaign: campaign.into(),
            root: root.to_path_buf(),
            verbose: 0,
        }
    }

    #[test]
    fn rejects_campaign_ids_that_escape_the_data_directory() {
        assert!(parse_campaign_id("").is_err());
        assert!(parse_campaign_id("  ").is_err());
        assert!(parse_campaign_id("..").is_err());
        assert!(parse_campaign_id("a/b").is_err());
        assert!(parse_campaign_id("a\\b").is_err());
        assert_eq!(parse_campaign_id(" spring-2025 ").unwrap(), "spring-2025");
    }

    #[test]
    fn validate_reports_missing_media_with_status_one() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("data/demo")).unwrap();
        fs::write(
            root.join("data/demo/sessions.json"),
            r#"{"sessions": [{"media": {"images": ["gallery/a.jpg"]}}]}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        let code = run_validate(&args(root, "demo"), &mut out).unwrap();

        assert_eq!(code, EXIT_MISSING_MEDIA);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("MISSING 1 / 1"));
        assert!(text.contains("  - assets/gallery/a.jpg"));
    }

    #[test]
    fn missing_sessions_file_maps_to_not_found_status() {
        let temp = tempdir().unwrap();
        let err = run_validate(&args(temp.path(), "demo"), &mut Vec::new()).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_NOT_FOUND);
    }

    #[test]
    fn malformed_sessions_file_is_fatal() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("data/demo")).unwrap();
        fs::write(root.join("data/demo/sessions.json"), "{ nope").unwrap();

        let err = run_validate(&args(root, "demo"), &mut Vec::new()).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_FATAL);
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn build_writes_manifest_and_summary() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("assets/gallery")).unwrap();
        fs::write(root.join("assets/gallery/a.jpg"), b"jpg").unwrap();

        let mut out = Vec::new();
        let code = run_build(&args(root, "demo"), &mut out).unwrap();

        assert_eq!(code, EXIT_OK);
        assert!(root.join("data/demo/gallery_manifest.json").is_file());
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Wrote "));
        assert!(text.ends_with("with 1 images and 0 videos.\n"));
    }

    #[test]
    fn build_without_gallery_maps_to_not_found_status() {
        let temp = tempdir().unwrap();
        let err = run_build(&args(temp.path(), "demo"), &mut Vec::new()).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_NOT_FOUND);
    }
}
