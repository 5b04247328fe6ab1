//! Token-sort similarity scoring.
//!
//! Card names frequently carry reordered qualifiers ("The Infamous Cruelclaw"
//! vs "Cruelclaw, the Infamous"), so the score must be insensitive to word
//! order. Both strings are processed (lowercased, punctuation stripped,
//! tokens sorted) before a Levenshtein ratio is taken.

use strsim::levenshtein;

/// Process a string for comparison: lowercase, replace non-alphanumeric
/// characters with spaces, sort the whitespace-delimited tokens, and rejoin
/// with single spaces.
///
/// Split-card separators ("//"), commas, and hyphens all collapse to token
/// boundaries, so `"Teysa, Opulent Oligarch"` and `"Opulent Oligarch Teysa"`
/// process to the same string.
#[must_use]
pub fn process(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .flat_map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec![' ']
            }
        })
        .collect();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Token-sort similarity between two strings, scaled to [0, 100].
///
/// Computed as `100 * (1 - d / max_len)` where `d` is the Levenshtein
/// distance between the processed strings and `max_len` the longer processed
/// length in characters, rounded to the nearest integer. Identical token
/// multisets score exactly 100; two strings with no processed content (empty
/// or punctuation-only) also score 100 since their processed forms are equal.
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let a = process(a);
    let b = process(b);

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        // Both processed strings are empty, hence identical
        return 100;
    }

    let distance = levenshtein(&a, &b);

    #[allow(clippy::cast_precision_loss)]
    let ratio = 1.0 - distance as f64 / max_len as f64;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
