//! This module contains some functions that will help us scanning strings.
//!
//! All positions are byte offsets. Only ASCII bytes can belong to a character
//! set, so every position these functions report as a set member falls on a
//! character boundary and can be spliced at safely.

fn in_set(set: &str, byte: u8) -> bool {
    byte.is_ascii() && set.as_bytes().contains(&byte)
}

/// Finds the first position at or after `from` holding a byte from `set`.
pub(crate) fn find_first_of(text: &str, set: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    (from.min(bytes.len())..bytes.len()).find(|&i| in_set(set, bytes[i]))
}

/// Finds the first position at or after `from` holding a byte outside `set`.
pub(crate) fn find_first_not_of(text: &str, set: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    (from.min(bytes.len())..bytes.len()).find(|&i| !in_set(set, bytes[i]))
}

/// Finds the last position at or before `until` holding a byte from `set`.
pub(crate) fn find_last_of(text: &str, set: &str, until: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    (0..=until.min(bytes.len() - 1)).rev().find(|&i| in_set(set, bytes[i]))
}

/// Finds the last position at or before `until` holding a byte outside `set`.
pub(crate) fn find_last_not_of(text: &str, set: &str, until: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    (0..=until.min(bytes.len() - 1)).rev().find(|&i| !in_set(set, bytes[i]))
}
