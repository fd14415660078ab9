use super::ModelError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::io::BufRead;

lazy_static! {
    // Words are whatever remains between runs of punctuation and whitespace
    static ref WORD_DELIM: Regex = Regex::new(r"[[:punct:][:space:]]+").unwrap();
}

/// Count word occurrences in a line-oriented text corpus.
///
/// Each line is lowercased and split on punctuation/whitespace; a token
/// counts only if every character is in `a`-`z`. Read failures propagate.
pub fn count_words<R: BufRead>(reader: R) -> Result<BTreeMap<String, u64>, ModelError> {
    let mut counts = BTreeMap::new();

    for line in reader.lines() {
        let line = line?;
        for token in tokenize(&line) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

/// Extract the countable words of a single line.
pub fn tokenize(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();

    WORD_DELIM
        .split(&lowered)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase()))
        .map(str::to_string)
        .collect()
}
