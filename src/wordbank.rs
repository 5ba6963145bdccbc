use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use serde_json::Value;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

const DATA_DIR_NAME: &str = "disjoint-words";
const DEFAULT_WORDBANK_FILE: &str = "words.txt";

fn keep(word: &str, word_length: Option<usize>) -> bool {
    !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphabetic())
        && word_length.is_none_or(|len| word.len() == len)
}

/// Lowercases, filters and deduplicates `words`, keeping the first occurrence
/// of each.
fn normalize<'a, I>(words: I, word_length: Option<usize>) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| keep(word, word_length))
        .unique()
        .collect()
}

/// Newline-delimited word list.
pub fn load_wordbank_from_str(data: &str, word_length: Option<usize>) -> Vec<String> {
    normalize(data.lines(), word_length)
}

/// A JSON object whose keys are the words, or a JSON array of words. Words
/// keep the order they have in the file.
pub fn load_wordbank_from_json(data: &str, word_length: Option<usize>) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(data).context("word list is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(normalize(map.keys().map(String::as_str), word_length)),
        Value::Array(items) => {
            let words: Vec<&str> = items
                .iter()
                .map(|item| {
                    item.as_str()
                        .with_context(|| format!("expected a string in word array, found {item}"))
                })
                .collect::<Result<_>>()?;
            Ok(normalize(words, word_length))
        }
        other => bail!("expected a JSON object or array of words, found {other}"),
    }
}

/// Reads a word list from disk. Files ending in `.json` are parsed as JSON,
/// anything else as one word per line.
pub fn load_wordbank_from_file<P: AsRef<Path>>(
    path: P,
    word_length: Option<usize>,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list '{}'", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_wordbank_from_json(&data, word_length)
            .with_context(|| format!("failed to parse '{}'", path.display()))
    } else {
        Ok(load_wordbank_from_str(&data, word_length))
    }
}

/// `<data dir>/disjoint-words/words.txt`, used when no list is given.
#[must_use]
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(DEFAULT_WORDBANK_FILE))
}

/// Explicit path if given, else the default path if it exists, else the
/// embedded list.
pub fn load_wordbank(path: Option<&Path>, word_length: Option<usize>) -> Result<Vec<String>> {
    if let Some(path) = path {
        return load_wordbank_from_file(path, word_length);
    }
    if let Some(default) = default_wordbank_path()
        && default.is_file()
    {
        log::info!("using word list {}", default.display());
        return load_wordbank_from_file(&default, word_length);
    }
    log::info!("using embedded word list");
    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK, word_length))
}
