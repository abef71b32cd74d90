//! Free-text name canonicalization for comparison.

/// Symbols removed outright: trademark marks and punctuation that titles
/// and file names sprinkle inconsistently.
const STRIPPED: &[char] = &[
    '\u{2122}', '\u{00AE}', '\u{00A9}', ':', ';', '!', '?', '\'', '\u{2019}', '"', '\u{201C}',
    '\u{201D}', ',', '.', '(', ')', '[', ']', '{', '}', '+', '&', '#', '%', '^', '*', '~', '@',
    '=', '|',
];

/// Separators folded into a single space.
const SPACED: &[char] = &['-', '_', '/', '\\'];

/// Canonicalize a free-text name: drop trademark/punctuation symbols, fold
/// separator runs and whitespace runs into single spaces, trim, lowercase.
///
/// Deterministic and idempotent: `normalize_name(normalize_name(x)) ==
/// normalize_name(x)`.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if STRIPPED.contains(&ch) {
            continue;
        }
        if SPACED.contains(&ch) || ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            continue;
        }
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
