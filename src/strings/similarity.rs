//! Edit-distance similarity powered by `strsim`.

use strsim::levenshtein;

/// Similarity percentage between two strings via classic Levenshtein
/// distance (unit-cost insert/delete/substitute):
/// `round((1 - distance / max(len_a, len_b)) * 100)`.
///
/// Defined as 100 when both strings are empty. Symmetric, and 100 for any
/// string compared with itself. Lengths are counted in chars, matching the
/// distance's unit of work.
pub fn similarity_percent(a: &str, b: &str) -> u32 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 100;
    }
    let distance = levenshtein(a, b);
    ((1.0 - distance as f64 / max_len as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflexive() {
        for s in ["witcher 3", "a", "some long game title"] {
            assert_eq!(similarity_percent(s, s), 100);
        }
    }

    #[test]
    fn symmetric() {
        let pairs = [("doom", "dooms"), ("half life", "halflife"), ("", "abc")];
        for (a, b) in pairs {
            assert_eq!(similarity_percent(a, b), similarity_percent(b, a));
        }
    }

    #[test]
    fn both_empty_is_full_match() {
        assert_eq!(similarity_percent("", ""), 100);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity_percent("abcd", "wxyz"), 0);
    }

    #[test]
    fn close_names_score_high() {
        // one deletion out of ten chars
        assert_eq!(similarity_percent("metro 2033", "metro 203"), 90);
        assert!(similarity_percent("witcher 3", "witcher iii") >= 70);
    }
}
