use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "guesstogram",
    about = "Tally guesses-per-answer from a results log and chart the distribution",
    version,
    long_about = None
)]
pub struct Args {
    /// Results log to tally, one solved puzzle per line
    #[arg(short, long, default_value = "results-SLATE.txt")]
    pub input: PathBuf,

    /// Where to write the chart (defaults to the input path with a .png extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolved chart output path.
    pub fn chart_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("png"))
    }
}
