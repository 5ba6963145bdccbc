//! Splits a search into one unit per first letter, runs the units on a
//! fixed-size worker pool and merges what they find.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

use rayon::ThreadPoolBuilder;

use crate::config::SearchConfig;
use crate::{debug_log, info_log};
use crate::error::{SearchError, UnitFailure};
use crate::search::{Combination, SearchEngine};
use crate::trie::Trie;

/// An independent slice of the search: every combination whose first word
/// starts with `letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkUnit {
    pub index: usize,
    pub letter: u8,
}

/// One unit per letter the dictionary's words start with, alphabetically.
#[must_use]
pub fn partition(trie: &Trie) -> Vec<WorkUnit> {
    trie.root()
        .children()
        .enumerate()
        .map(|(index, (letter, _))| WorkUnit { index, letter })
        .collect()
}

/// Snapshot sent to observers each time a unit finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub letter: char,
    pub found: usize,
}

/// Receives unit counts while a partitioned search runs. Called from the
/// thread that started the search.
pub trait ProgressObserver {
    fn on_start(&mut self, _total: usize) {}

    fn on_unit_complete(&mut self, progress: Progress);
}

pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_unit_complete(&mut self, _progress: Progress) {}
}

impl<F: FnMut(Progress)> ProgressObserver for F {
    fn on_unit_complete(&mut self, progress: Progress) {
        self(progress);
    }
}

pub struct Partitioner {
    workers: usize,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl Partitioner {
    /// `workers == 0` sizes the pool to the number of CPUs.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.workers)
    }

    /// Runs `engine` over every first-letter unit and returns all
    /// combinations sorted by word id.
    pub fn run<O: ProgressObserver>(
        &self,
        engine: &SearchEngine<'_>,
        observer: &mut O,
    ) -> Result<Vec<Combination>, SearchError> {
        let units = if engine.is_satisfiable() {
            partition(engine.trie())
        } else {
            Vec::new()
        };
        self.run_with(&units, |unit| engine.search_unit(unit), observer)
    }

    /// Dispatches `units` to the pool, calling `search` once per unit.
    ///
    /// A unit that panics is reported as a [`UnitFailure`]; the results of the
    /// remaining units come back in [`SearchError::Incomplete`].
    pub fn run_with<F, O>(
        &self,
        units: &[WorkUnit],
        search: F,
        observer: &mut O,
    ) -> Result<Vec<Combination>, SearchError>
    where
        F: Fn(&WorkUnit) -> Vec<Combination> + Sync,
        O: ProgressObserver,
    {
        observer.on_start(units.len());
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("search-{i}"))
            .build()
            .map_err(|e| SearchError::Pool(e.to_string()))?;
        debug_log!(
            "dispatching {} unit(s) to {} worker(s)",
            units.len(),
            pool.current_num_threads()
        );

        let (tx, rx) = mpsc::channel();
        let mut combinations = Vec::new();
        let mut failures = Vec::new();

        pool.in_place_scope(|scope| {
            for &unit in units {
                let tx = tx.clone();
                let search = &search;
                scope.spawn(move |_| {
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| search(&unit)));
                    // The receiver outlives every job in this scope.
                    let _ = tx.send((unit, outcome));
                });
            }
            drop(tx);

            for (completed, (unit, outcome)) in rx.iter().enumerate() {
                let letter = char::from(unit.letter);
                let found = match outcome {
                    Ok(found) => {
                        let count = found.len();
                        combinations.extend(found);
                        count
                    }
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        log::error!("unit {} ('{letter}') failed: {message}", unit.index);
                        failures.push(UnitFailure {
                            unit: unit.index,
                            letter,
                            message,
                        });
                        0
                    }
                };
                observer.on_unit_complete(Progress {
                    completed: completed + 1,
                    total: units.len(),
                    letter,
                    found,
                });
            }
        });

        info_log!(
            "{} unit(s) finished, {} failed, {} combination(s)",
            units.len(),
            failures.len(),
            combinations.len()
        );
        combinations.sort_unstable();
        if failures.is_empty() {
            Ok(combinations)
        } else {
            failures.sort_by_key(|failure| failure.unit);
            Err(SearchError::Incomplete {
                failures,
                partial: combinations,
            })
        }
    }
}
