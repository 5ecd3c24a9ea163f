//! The word-wrap engine: the logic to fold a single-line text into a
//! fixed-width paragraph, and the inverse merge that undoes it.
//!
//! This is the only place in the crate where a scan index has to survive
//! splices that shrink the buffer it walks, so the arithmetic here is written
//! against a single invariant: the index strictly increases towards the end
//! of the text on every iteration.


use crate::scan::{find_first_not_of, find_first_of, find_last_not_of, find_last_of};

/// The characters `wrap_to_width` considers breakable by default.
pub const DEFAULT_BREAKABLE: &str = " \t\r";

/// Folds a single-line text into a paragraph whose lines are at most `width`
/// characters long.
///
/// The scan advances in strides of `width` and breaks greedily: at each
/// stride boundary it walks back to the nearest run of breakable characters,
/// then replaces that whole run with a single line feed. Words are never
/// hyphenated; when a stride contains no breakable character the text is
/// returned unchanged from that point on. A line feed that already existed
/// inside the current stride re-anchors the next one, so short pre-broken
/// lines are not double-counted.
///
/// A `width` below 2 leaves no room to break anything and returns the text
/// untouched.
///
/// # Examples
///
/// ```
/// # use textfold::paragraph::{wrap_to_width, DEFAULT_BREAKABLE};
/// let wrapped = wrap_to_width("AAAA BBBB CCCC DDDD", 4, DEFAULT_BREAKABLE);
/// assert_eq!(wrapped, "AAAA\nBBBB\nCCCC\nDDDD");
/// ```
pub fn wrap_to_width(text: &str, width: usize, breakable: &str) -> String {
    let mut text = text.to_owned();

    if width < 2 {
        warn!("wrap width {} leaves no room to break, leaving text as is", width);
        return text;
    }

    let mut scan = width - 1;
    while scan < text.len() {
        // Nearest breakable character at or before the stride boundary.
        let breakable_at = match find_last_of(&text, breakable, scan + 1) {
            Some(position) => position,
            None => break,
        };

        // Last character of the word preceding the whitespace run.
        let word_end = match find_last_not_of(&text, breakable, breakable_at) {
            Some(position) => position,
            None => break,
        };

        // Splice the whole run down to a single line feed.
        let run_end = find_first_not_of(&text, breakable, word_end + 1).unwrap_or_else(|| text.len());
        let consumed = run_end - word_end - 1;
        text.replace_range(word_end + 1..run_end, "\n");
        debug!("broke line after byte {}, consumed a run of {}", word_end, consumed);

        // A line feed that already existed inside the current stride becomes
        // the anchor of the next one, otherwise the line it starts would be
        // measured from the wrong origin and could overflow.
        let mut anchor = word_end;
        if let Some(newline) = find_first_of(&text, "\n", word_end + 1 + consumed) {
            if newline < word_end + width {
                anchor = newline;
            }
        }

        // The guard only trips on adversarial breakable sets (a set holding
        // the line feed itself can re-match the splice it just produced);
        // on every normal input the next stride starts past the current one.
        let next = anchor + width + 1;
        if next <= scan {
            break;
        }
        scan = next;
    }

    text
}

/// Merges a wrapped paragraph back into a single line.
///
/// A single left-to-right pass collapses every run of spaces to one space and
/// replaces every run of line feeds, whatever its length, with one space. The
/// first character is never inspected, so a leading space or line feed comes
/// through untouched. Rewritten output is never re-scanned: a space that ends
/// up next to another one because of a collapsed line feed stays as is.
///
/// # Examples
///
/// ```
/// # use textfold::paragraph::unwrap_paragraph;
/// assert_eq!(unwrap_paragraph("AAAA\nBBBB\nCCCC"), "AAAA BBBB CCCC");
/// ```
pub fn unwrap_paragraph(text: &str) -> String {
    let mut text = text.to_owned();

    let mut i = 1;
    while i < text.len() {
        match text.as_bytes()[i] {
            b' ' => {
                // Keep the first space of the run, drop the rest.
                let mut j = i + 1;
                while j < text.len() && text.as_bytes()[j] == b' ' {
                    j += 1;
                }
                text.replace_range(i + 1..j, "");
                i += 1;
            }
            b'\n' => {
                // The whole run becomes a single space.
                let mut j = i + 1;
                while j < text.len() && text.as_bytes()[j] == b'\n' {
                    j += 1;
                }
                text.replace_range(i..j, " ");
                i += 1;
            }
            _ => i += 1,
        }
    }

    text
}
