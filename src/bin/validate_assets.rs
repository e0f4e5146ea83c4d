use std::io;
use std::process::ExitCode;

use campaign_gallery_tools::cli::{CampaignArgs, finish, run_validate};
use campaign_gallery_tools::logging;
use clap::Parser;

/// Validate gallery media referenced by a campaign's sessions.json.
///
/// Exits 0 when every local reference exists, 1 when some are missing and 2 when the
/// session manifest itself is absent.
#[derive(Parser)]
#[command(name = "validate-assets", version)]
struct Cli {
    #[command(flatten)]
    args: CampaignArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.args.verbose);

    let mut stdout = io::stdout().lock();
    finish(run_validate(&cli.args, &mut stdout))
}
