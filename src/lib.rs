pub mod args;
pub mod chart;
pub mod report;
pub mod tally;
pub mod utils;

pub use args::Args;
pub use chart::{render_guess_chart, ChartError};
pub use report::chart_results;
pub use tally::{field_count, tally_lines, tally_results_file, GuessTally};
