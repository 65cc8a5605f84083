use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Fields on one result line are separated by a comma and a space.
pub const FIELD_SEPARATOR: &str = ", ";

/// Distribution of guesses-per-answer: guess-count mapped to how many
/// answers took that many guesses.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GuessTally {
    counts: BTreeMap<usize, u64>,
}

impl GuessTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one solved puzzle that took `guess_count` guesses.
    pub fn record(&mut self, guess_count: usize) {
        *self.counts.entry(guess_count).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of answers tallied; equals the number of lines read.
    pub fn total_answers(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn frequency(&self, guess_count: usize) -> u64 {
        self.counts.get(&guess_count).copied().unwrap_or(0)
    }

    pub fn max_guess_count(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    pub fn max_frequency(&self) -> Option<u64> {
        self.counts.values().max().copied()
    }

    /// Guess-counts and frequencies in ascending guess-count order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&guesses, &count)| (guesses, count))
    }
}

impl FromIterator<usize> for GuessTally {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut tally = GuessTally::new();
        for guess_count in iter {
            tally.record(guess_count);
        }
        tally
    }
}

/// Number of `", "`-separated fields on one result line. A line without the
/// separator is a single field.
pub fn field_count(line: &str) -> usize {
    line.split(FIELD_SEPARATOR).count()
}

/// Build a tally from a sequence of result lines.
pub fn tally_lines<I, S>(lines: I) -> GuessTally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| field_count(line.as_ref()))
        .collect()
}

/// Read a results log and tally guesses per line. I/O and decode failures
/// propagate untransformed.
pub fn tally_results_file(path: &Path) -> Result<GuessTally> {
    let start_time = Instant::now();
    info!(action = "start", component = "tally", file_path = ?path, "Reading results log");

    let file =
        File::open(path).with_context(|| format!("Failed to open results log {:?}", path))?;
    let reader = BufReader::new(file);

    let mut tally = GuessTally::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read results log {:?}", path))?;
        tally.record(field_count(&line));
    }

    info!(
        action = "done",
        component = "tally",
        answers = tally.total_answers(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Results log tallied"
    );
    Ok(tally)
}
