//! Bad word matching.
//!
//! Matching is a case-insensitive substring scan with no tokenization, so
//! "class" matches a stored "ass".

/// First stored word that occurs in `text`, ignoring case.
pub fn find_bad_word<'a>(text: &str, words: &'a [String]) -> Option<&'a str> {
    let haystack = text.to_lowercase();
    words
        .iter()
        .map(String::as_str)
        .filter(|w| !w.is_empty())
        .find(|w| haystack.contains(&w.to_lowercase()))
}

pub fn should_delete(text: &str, words: &[String]) -> bool {
    find_bad_word(text, words).is_some()
}
