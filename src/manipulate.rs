//! Trimming, case conversion, alignment, literal replacement and the other
//! single-pass transformations of the crate.

use crate::scan::{find_first_not_of, find_last_not_of};

/// Removes the characters of `pad` from both ends of the text.
///
/// Returns an empty text when the input is made of pad characters only.
///
/// # Examples
///
/// ```
/// # use textfold::manipulate::trim;
/// assert_eq!(trim("_ _-_abc_-_ _", " _-"), "abc");
/// ```
pub fn trim<'a>(text: &'a str, pad: &str) -> &'a str {
    rtrim(ltrim(text, pad), pad)
}

/// Removes the characters of `pad` from the beginning of the text.
pub fn ltrim<'a>(text: &'a str, pad: &str) -> &'a str {
    match find_first_not_of(text, pad, 0) {
        Some(left) => &text[left..],
        None => "",
    }
}

/// Removes the characters of `pad` from the end of the text.
pub fn rtrim<'a>(text: &'a str, pad: &str) -> &'a str {
    match find_last_not_of(text, pad, text.len()) {
        Some(right) => &text[..right + 1],
        None => "",
    }
}

/// Converts the text to upper-case, one ASCII character at a time.
pub fn to_upper(text: &str) -> String {
    text.chars().map(|c| c.to_ascii_uppercase()).collect()
}

/// Converts the text to lower-case, one ASCII character at a time.
pub fn to_lower(text: &str) -> String {
    text.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Replicates a char n times.
fn replicate(c: char, n: usize) -> String {
    let mut string = String::new();
    for _ in 0..n {
        string.push(c);
    }
    string
}

/// Aligns the text to the left, padding with `fill` up to `width`.
///
/// A text already `width` characters long or longer comes back unchanged,
/// never truncated.
pub fn lalign(text: &str, width: usize, fill: char) -> String {
    let mut aligned = String::from(text);
    aligned.push_str(&replicate(fill, width.saturating_sub(text.len())));
    aligned
}

/// Aligns the text to the right, padding with `fill` up to `width`.
pub fn ralign(text: &str, width: usize, fill: char) -> String {
    let mut aligned = replicate(fill, width.saturating_sub(text.len()));
    aligned.push_str(text);
    aligned
}

/// Centers the text, padding with `fill` up to `width`.
///
/// An odd leftover column goes to the right.
///
/// # Examples
///
/// ```
/// # use textfold::manipulate::calign;
/// assert_eq!(calign("hello", 10, ' '), "  hello   ");
/// ```
pub fn calign(text: &str, width: usize, fill: char) -> String {
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    format!("{}{}{}", replicate(fill, left), text, replicate(fill, pad - left))
}

/// Replaces up to `limit` literal occurrences of `pattern` with `substitute`.
///
/// `limit = 0` replaces them all. The scan resumes right after each inserted
/// substitute, so a substitute containing the pattern is never re-matched. An
/// empty pattern is a no-op.
pub fn replace(text: &str, pattern: &str, substitute: &str, limit: usize) -> String {
    let mut text = text.to_owned();
    replace_inplace(&mut text, pattern, substitute, limit);
    text
}

/// The in-place variant of [`replace`]: mutates the caller's buffer and
/// returns an alias to it.
pub fn replace_inplace<'a>(
    text: &'a mut String,
    pattern: &str,
    substitute: &str,
    limit: usize,
) -> &'a mut String {
    if pattern.is_empty() {
        return text;
    }

    let mut remaining = limit;
    let mut from = 0;
    while let Some(found) = text[from..].find(pattern) {
        let at = from + found;
        text.replace_range(at..at + pattern.len(), substitute);
        from = at + substitute.len();
        if limit > 0 {
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }
    }

    text
}

/// Removes every occurrence of a single character, wherever it appears.
pub fn strip(text: &str, unwanted: char) -> String {
    text.chars().filter(|&c| c != unwanted).collect()
}

/// The in-place variant of [`strip`]: mutates the caller's buffer and returns
/// an alias to it.
pub fn strip_inplace(text: &mut String, unwanted: char) -> &mut String {
    text.retain(|c| c != unwanted);
    text
}

/// Splits the text on runs of characters drawn from `delimiters`.
///
/// Adjacent, leading or trailing delimiters never produce empty tokens.
pub fn split<'a>(text: &'a str, delimiters: &str) -> Vec<&'a str> {
    text.split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}

fn recase_words(text: &str, limit: usize, to_upper: bool) -> String {
    let mut recased = String::with_capacity(text.len());
    let mut remaining = limit;
    let mut previous = None;

    for (i, c) in text.chars().enumerate() {
        // A word starts at index 0 when alphabetic, or right after a literal
        // space. Tabs and line feeds deliberately do not count.
        let word_start = if i == 0 {
            c.is_ascii_alphabetic()
        } else {
            previous == Some(' ')
        };

        if word_start && (limit == 0 || remaining > 0) {
            recased.push(if to_upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            });
            // The counter is consumed by every word start, even one that is
            // not alphabetic and comes through unchanged.
            if limit > 0 {
                remaining -= 1;
            }
        } else {
            recased.push(c);
        }
        previous = Some(c);
    }

    recased
}

/// Upper-cases the first letter of the text and of every word after a single
/// space, up to `limit` word starts (`0` = all of them).
///
/// # Examples
///
/// ```
/// # use textfold::manipulate::capitalize;
/// assert_eq!(capitalize("hello there friend!", 2), "Hello There friend!");
/// ```
pub fn capitalize(text: &str, limit: usize) -> String {
    recase_words(text, limit, true)
}

/// Lower-cases the first letter of the text and of every word after a single
/// space, up to `limit` word starts (`0` = all of them).
pub fn decapitalize(text: &str, limit: usize) -> String {
    recase_words(text, limit, false)
}
