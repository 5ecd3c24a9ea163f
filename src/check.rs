//! Substring predicates: prefix, suffix, abbreviation, tolerant equality and
//! occurrence counting.
//!
//! Every predicate follows the same two conventions: `sensitive` selects
//! exact ASCII comparison over case-folded comparison, and `n` bounds how
//! many characters take part in the comparison, with `0` meaning the full
//! length. A comparison that exhausts `n` without a mismatch is a match,
//! even when the texts differ beyond the cutoff.

use std::ptr;

fn eq(a: u8, b: u8, sensitive: bool) -> bool {
    if sensitive {
        a == b
    } else {
        a.to_ascii_lowercase() == b.to_ascii_lowercase()
    }
}

/// Checks whether the text begins with the given prefix.
///
/// The same buffer passed on both sides short-circuits to `true`; an empty
/// text or prefix, or a prefix longer than the text, is `false`.
///
/// # Examples
///
/// ```
/// # use textfold::check::begins_with;
/// assert!(begins_with("Hello world!", "hello", false, 0));
/// assert!(begins_with("Hello world!", "HelAA", true, 3));
/// ```
pub fn begins_with(text: &str, prefix: &str, sensitive: bool, n: usize) -> bool {
    if ptr::eq(text, prefix) {
        return true;
    }
    if prefix.len() > text.len() || text.is_empty() || prefix.is_empty() {
        return false;
    }

    let mut remaining = n;
    for (a, b) in text.bytes().zip(prefix.bytes()) {
        if !eq(a, b, sensitive) {
            return false;
        }
        if n > 0 {
            remaining -= 1;
            if remaining == 0 {
                return true;
            }
        }
    }
    true
}

/// Checks whether the text ends with the given suffix.
///
/// The comparison walks both texts backwards, so `n` bounds the overlap
/// counted from the end.
pub fn ends_with(text: &str, suffix: &str, sensitive: bool, n: usize) -> bool {
    if ptr::eq(text, suffix) {
        return true;
    }
    if suffix.len() > text.len() || text.is_empty() || suffix.is_empty() {
        return false;
    }

    let mut remaining = n;
    for (a, b) in text.bytes().rev().zip(suffix.bytes().rev()) {
        if !eq(a, b, sensitive) {
            return false;
        }
        if n > 0 {
            remaining -= 1;
            if remaining == 0 {
                return true;
            }
        }
    }
    true
}

/// Checks whether `abbreviation` is a valid shorthand for `word`: a non-empty
/// literal prefix at least `min_length` characters long.
pub fn is_abbreviation_of(abbreviation: &str, word: &str, sensitive: bool, min_length: usize) -> bool {
    abbreviation.len() >= min_length && begins_with(word, abbreviation, sensitive, 0)
}

/// Compares two texts, up to `n` characters (`0` = the full length of both).
///
/// Without a cutoff the texts only match when they are exhausted together.
pub fn compare(a: &str, b: &str, sensitive: bool, n: usize) -> bool {
    let mut remaining = n;
    let mut left = a.bytes();
    let mut right = b.bytes();
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                if !eq(x, y, sensitive) {
                    return false;
                }
                if n > 0 {
                    remaining -= 1;
                    if remaining == 0 {
                        return true;
                    }
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Counts the non-overlapping literal occurrences of `pattern` in the text.
///
/// An empty text or pattern counts zero.
pub fn count_occurrences(text: &str, pattern: &str, sensitive: bool) -> usize {
    if text.is_empty() || pattern.is_empty() {
        return 0;
    }

    let folded_text;
    let folded_pattern;
    let (haystack, needle): (&str, &str) = if sensitive {
        (text, pattern)
    } else {
        folded_text = text.to_ascii_lowercase();
        folded_pattern = pattern.to_ascii_lowercase();
        (&folded_text, &folded_pattern)
    };

    let mut occurrences = 0;
    let mut position = 0;
    while let Some(found) = haystack[position..].find(needle) {
        occurrences += 1;
        position += found + needle.len();
    }
    occurrences
}

/// Checks whether any word of the list matches `control` under the enabled
/// checks: does the word begin with it, end with it, or equal it.
pub fn any_word_matches<I, S>(
    control: &str,
    words: I,
    sensitive: bool,
    check_prefix: bool,
    check_suffix: bool,
    check_exact: bool,
) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().any(|word| {
        let word = word.as_ref();
        (check_prefix && begins_with(word, control, sensitive, 0))
            || (check_suffix && ends_with(word, control, sensitive, 0))
            || (check_exact && compare(word, control, sensitive, 0))
    })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::check::{
        any_word_matches, begins_with, compare, count_occurrences, ends_with, is_abbreviation_of,
    };

    #[test_case("Hello there!", "Hello", true, 0, true ; "sensitive full prefix")]
    #[test_case("Hello there!", "hello", false, 0, true ; "insensitive full prefix")]
    #[test_case("Hello there!", "HelAA", true, 3, true ; "cutoff hides the mismatch")]
    #[test_case("Hello there!", "helAA", false, 3, true ; "insensitive cutoff")]
    #[test_case("Hello there!", "world", true, 0, false ; "no match")]
    #[test_case("Hi", "Hi there", true, 0, false ; "prefix longer than text")]
    #[test_case("Hello", "", true, 0, false ; "empty prefix")]
    #[test_case("", "x", true, 0, false ; "empty text")]
    fn begins_with_cases(text: &str, prefix: &str, sensitive: bool, n: usize, expected: bool) {
        assert_eq!(begins_with(text, prefix, sensitive, n), expected);
    }

    #[test]
    fn begins_with_short_circuits_on_identity() {
        let text = "same buffer";
        assert!(begins_with(text, text, true, 0));
    }

    #[test_case("Hello there!", "there!", true, 0, true ; "sensitive full suffix")]
    #[test_case("Hello there!", "TherE!", false, 0, true ; "insensitive full suffix")]
    #[test_case("Hello there!", "AAAre!", true, 3, true ; "cutoff hides the mismatch")]
    #[test_case("Hello there!", "AAArE!", false, 3, true ; "insensitive cutoff")]
    #[test_case("Hello there!", "there?", true, 0, false ; "no match")]
    fn ends_with_cases(text: &str, suffix: &str, sensitive: bool, n: usize, expected: bool) {
        assert_eq!(ends_with(text, suffix, sensitive, n), expected);
    }

    #[test_case("mag", "magic", true, 3, true ; "exact prefix of minimum length")]
    #[test_case("magi", "magic", true, 3, true ; "longer than minimum")]
    #[test_case("ma", "magic", true, 3, false ; "below minimum length")]
    #[test_case("MAG", "magic", true, 3, false ; "case mismatch")]
    #[test_case("MAG", "magic", false, 3, true ; "case folded")]
    #[test_case("", "magic", true, 0, false ; "empty abbreviation")]
    fn abbreviation_cases(
        abbreviation: &str,
        word: &str,
        sensitive: bool,
        min_length: usize,
        expected: bool,
    ) {
        assert_eq!(is_abbreviation_of(abbreviation, word, sensitive, min_length), expected);
    }

    #[test_case("Hello there!", "Hello there!", true, 0, true ; "identical")]
    #[test_case("Hello there!", "HELLO THERE!", false, 0, true ; "case folded")]
    #[test_case("Hello", "HELLO", true, 0, false ; "case sensitive mismatch")]
    #[test_case("Hello there!", "Hello AAAAA!", true, 4, true ; "cutoff before the mismatch")]
    #[test_case("cat", "catalog", false, 3, true ; "cutoff before the length mismatch")]
    #[test_case("str", "stat", true, 0, false ; "different")]
    #[test_case("str", "string", true, 0, false ; "prefix is not equality")]
    #[test_case("", "", true, 0, true ; "both empty")]
    fn compare_cases(a: &str, b: &str, sensitive: bool, n: usize, expected: bool) {
        assert_eq!(compare(a, b, sensitive, n), expected);
    }

    #[test_case("apple orange apple apple", "apple", true, 3 ; "sensitive")]
    #[test_case("apple orange apple apple", "Apple", true, 0 ; "sensitive mismatch")]
    #[test_case("apple orange apple apple", "APPLE", false, 3 ; "case folded")]
    #[test_case("apple orange apple apple", "dog", true, 0 ; "absent")]
    #[test_case("", "apple", true, 0 ; "empty text")]
    #[test_case("apple", "", true, 0 ; "empty pattern")]
    fn count_cases(text: &str, pattern: &str, sensitive: bool, expected: usize) {
        assert_eq!(count_occurrences(text, pattern, sensitive), expected);
    }

    #[test]
    fn count_is_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa", true), 2);
    }

    #[test]
    fn any_word_matches_prefix_and_exact() {
        let words = ["looking", "lookup", "book"];
        assert!(any_word_matches("look", words.iter(), true, true, false, false));
        assert!(!any_word_matches("look", words.iter(), true, false, false, true));
        assert!(any_word_matches("book", words.iter(), true, false, false, true));
    }

    #[test]
    fn any_word_matches_suffix_is_a_true_suffix_test() {
        let words = ["handbook", "notebook"];
        assert!(any_word_matches("book", words.iter(), true, false, true, false));
        assert!(!any_word_matches("hand", words.iter(), true, false, true, false));
    }

    #[test]
    fn any_word_matches_with_nothing_enabled_is_false() {
        assert!(!any_word_matches("x", ["x"].iter(), true, false, false, false));
    }
}
