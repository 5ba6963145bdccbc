use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::{DEFAULT_WORD_LENGTH, SearchConfig};
use crate::error::UnitFailure;
use crate::partition::{Progress, ProgressObserver};
use crate::search::{Combination, DEFAULT_COMBINATION_SIZE};
use crate::trie::Trie;

/// Find sets of words that share no letters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word list: one word per line, or a JSON object/array of words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Number of words per combination
    #[arg(short = 'k', long = "words", default_value_t = DEFAULT_COMBINATION_SIZE)]
    pub k: usize,

    /// Only use words of this length (0 = any length)
    #[arg(short = 'l', long = "length", default_value_t = DEFAULT_WORD_LENGTH)]
    pub word_length: usize,

    /// Worker threads (0 = one per CPU)
    #[arg(short = 'j', long = "jobs", default_value_t = 0)]
    pub jobs: usize,

    /// Search on a single thread without partitioning
    #[arg(long)]
    pub serial: bool,

    /// Verbose/info output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Debug output
    #[arg(long)]
    pub debug: bool,

    /// Trace output
    #[arg(long)]
    pub trace: bool,
}

impl Cli {
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            k: self.k,
            workers: self.jobs,
            word_length: (self.word_length > 0).then_some(self.word_length),
            serial: self.serial,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Logs "N/M units complete" as the partitioned search advances.
#[derive(Debug, Default)]
pub struct LogProgress {
    pub total: usize,
    pub completed: usize,
}

impl ProgressObserver for LogProgress {
    fn on_start(&mut self, total: usize) {
        self.total = total;
        log::info!("searching {total} unit(s)");
    }

    fn on_unit_complete(&mut self, progress: Progress) {
        self.completed = progress.completed;
        log::info!(
            "{}/{} units complete ('{}': {} found)",
            progress.completed,
            progress.total,
            progress.letter,
            progress.found
        );
    }
}

pub fn format_combination(combination: &Combination, trie: &Trie) -> String {
    let words: Vec<String> = combination
        .words(trie)
        .iter()
        .map(|word| format!("{word:?}"))
        .collect();
    format!("({})", words.join(", "))
}

pub fn display_loaded(word_count: usize, k: usize) {
    println!("Loaded {word_count} words. Searching for {k}-word combinations.");
}

pub fn display_combinations(combinations: &[Combination], trie: &Trie) {
    println!("Number of combinations: {}", combinations.len());
    for combination in combinations {
        println!("{}", format_combination(combination, trie));
    }
}

pub fn display_failures(failures: &[UnitFailure]) {
    eprintln!("Results incomplete, {} unit(s) failed:", failures.len());
    for failure in failures {
        eprintln!("  {failure}");
    }
}

/// Runs `f` and measures it on the monotonic clock.
pub fn run_timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

pub fn display_elapsed(elapsed: Duration) {
    println!("Elapsed ms [{}]", elapsed.as_millis());
}
