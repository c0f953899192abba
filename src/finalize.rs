//! Sentence finalization: whitespace cleanup and re-capitalization

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?] ").unwrap());

/// Collapse runs of whitespace into one space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Upper-case the first alphabetic character of `segment`
fn capitalize_first_alphabetic(segment: &str) -> String {
    match segment.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((index, c)) => {
            let mut result = String::with_capacity(segment.len());
            result.push_str(&segment[..index]);
            result.extend(c.to_uppercase());
            result.push_str(&segment[index + c.len_utf8()..]);
            result
        }
        None => segment.to_string(),
    }
}

/// Capitalize every sentence, where sentences end at `.`, `!` or `?`
/// followed by a space
pub fn capitalize_sentences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut start = 0;
    for delimiter in SENTENCE_BREAK.find_iter(text) {
        result.push_str(&capitalize_first_alphabetic(&text[start..delimiter.start()]));
        result.push_str(delimiter.as_str());
        start = delimiter.end();
    }
    result.push_str(&capitalize_first_alphabetic(&text[start..]));
    result
}

/// Whitespace collapse followed by sentence capitalization
pub fn finalize(text: &str) -> String {
    capitalize_sentences(&collapse_whitespace(text))
}
