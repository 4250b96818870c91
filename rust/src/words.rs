//! Deterministic word selection.

use once_cell::sync::Lazy;
use rand::random_range;
use std::collections::BTreeSet;

use crate::seed::interpret;

static DEFAULT_WORDS: Lazy<Vec<String>> =
    Lazy::new(|| load_words(include_str!("../data/five_letter_words.txt")));

/// Parse an embedded word file: one word per line, blank lines and `#`
/// comments skipped, deduplicated and sorted.
pub fn load_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The built-in five-letter word list.
pub fn default_words() -> &'static [String] {
    &DEFAULT_WORDS
}

/// Split a comma-separated list, dropping blank entries.
pub fn parse_wordlist(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn effective_sorted<S: AsRef<str>>(wordlist: &[S]) -> Vec<&str> {
    let mut sorted: Vec<&str> = if wordlist.is_empty() {
        DEFAULT_WORDS.iter().map(String::as_str).collect()
    } else {
        wordlist.iter().map(AsRef::as_ref).collect()
    };
    sorted.sort();
    sorted
}

/// Pick a word for `seed_input`; an empty `wordlist` means the default list.
///
/// The list is sorted first, so caller order never matters. Negative seeds
/// wrap with a non-negative modulo.
pub fn select_word<S: AsRef<str>>(seed_input: &str, wordlist: &[S]) -> String {
    let sorted = effective_sorted(wordlist);
    if sorted.is_empty() {
        return String::new();
    }
    let seed = interpret(seed_input);
    let index = seed.value.rem_euclid(sorted.len() as i64) as usize;
    sorted[index].to_string()
}

/// Pick a word at random; an empty `wordlist` means the default list.
pub fn random_word<S: AsRef<str>>(wordlist: &[S]) -> String {
    let sorted = effective_sorted(wordlist);
    if sorted.is_empty() {
        return String::new();
    }
    sorted[random_range(0..sorted.len())].to_string()
}
