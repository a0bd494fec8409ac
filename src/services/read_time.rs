use once_cell::sync::Lazy;
use regex::Regex;

static RE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("Invalid regex pattern for word tokens"));

pub const WORDS_PER_MINUTE: usize = 200;

/// Number of word tokens (runs of letters, digits and underscores).
pub fn word_count(text: &str) -> usize {
    RE_WORD.find_iter(text).count()
}

/// Estimated reading time, e.g. `"3 min read"`. Never below one minute.
///
/// Rounds to the nearest minute with exact halves going to the even
/// neighbour, so 500 words is "2 min read" and 700 words is "4 min read".
pub fn estimate_read_time(text: &str) -> String {
    format!("{} min read", minutes_for(word_count(text)))
}

fn minutes_for(words: usize) -> usize {
    let whole = words / WORDS_PER_MINUTE;
    let remainder = words % WORDS_PER_MINUTE;
    let half = WORDS_PER_MINUTE / 2;

    let rounded = if remainder > half || (remainder == half && whole % 2 == 1) {
        whole + 1
    } else {
        whole
    };
    rounded.max(1)
}
