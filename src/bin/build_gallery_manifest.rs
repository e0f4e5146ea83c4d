use std::io;
use std::process::ExitCode;

use campaign_gallery_tools::cli::{CampaignArgs, finish, run_build};
use campaign_gallery_tools::logging;
use clap::Parser;

/// Build data/<campaign>/gallery_manifest.json from the gallery media directory.
///
/// Exits 0 once the manifest is written and 2 when the gallery directory is absent.
#[derive(Parser)]
#[command(name = "build-gallery-manifest", version)]
struct Cli {
    #[command(flatten)]
    args: CampaignArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.args.verbose);

    let mut stdout = io::stdout().lock();
    finish(run_build(&cli.args, &mut stdout))
}
