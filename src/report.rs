use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::{chart, tally, tally::GuessTally, Args};

/// Tally the results log and render the chart. The chart is written even
/// when the log is empty (axes with no bars).
pub fn chart_results(args: &Args) -> Result<GuessTally> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "pipeline", "Starting results analysis");

    let tally = tally::tally_results_file(&args.input)?;
    chart::render_guess_chart(&tally, &args.chart_path())?;

    info!(
        action = "done",
        component = "pipeline",
        elapsed_ms = total_start_time.elapsed().as_millis() as u64,
        "Analysis completed successfully"
    );
    Ok(tally)
}

pub fn print_summary(tally: &GuessTally, args: &Args) {
    println!("\n--- Guess distribution for {} ---", args.input.display());
    println!(
        "Answers tallied: {}",
        crate::utils::format_number(tally.total_answers())
    );

    for (guesses, frequency) in tally.iter() {
        println!(
            "- {} guesses: {} solved",
            guesses,
            crate::utils::format_number(frequency)
        );
    }

    println!("Chart written to {}", args.chart_path().display());
}
