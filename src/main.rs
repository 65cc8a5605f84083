use anyhow::Result;
use clap::Parser;
use tracing::error;

use guesstogram::{report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match report::chart_results(&args) {
        Ok(tally) => {
            report::print_summary(&tally, &args);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Error");
            std::process::exit(1);
        }
    }
}
