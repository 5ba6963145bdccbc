use anyhow::{Context, Result};
use log::info;

use disjoint_words::cli::{
    LogProgress, display_combinations, display_elapsed, display_failures, display_loaded,
    parse_cli, run_timed,
};
use disjoint_words::logging::{init_logging, level_from_flags};
use disjoint_words::{SearchError, Trie, find_combinations, load_wordbank};

fn main() -> Result<()> {
    let cli = parse_cli();
    init_logging(level_from_flags(cli.verbose, cli.debug, cli.trace));
    let config = cli.search_config();

    let words = load_wordbank(cli.wordbank_path.as_deref(), config.word_length)?;
    let trie = Trie::from_words(&words).context("failed to build dictionary trie")?;
    display_loaded(trie.len(), config.k);
    info!(
        "{} first-letter unit(s), {} worker(s) requested",
        trie.root().children().count(),
        config.workers
    );

    let (result, elapsed) =
        run_timed(|| find_combinations(&trie, &config, &mut LogProgress::default()));

    match result {
        Ok(combinations) => {
            display_combinations(&combinations, &trie);
            display_elapsed(elapsed);
            Ok(())
        }
        Err(SearchError::Incomplete { failures, partial }) => {
            display_combinations(&partial, &trie);
            display_failures(&failures);
            anyhow::bail!("search incomplete: {} unit(s) failed", failures.len())
        }
        Err(err) => Err(err.into()),
    }
}
