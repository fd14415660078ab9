use std::collections::HashSet;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate every distinct string one elementary edit away from `word`.
///
/// The four edit families of the classic error model: deletion,
/// adjacent transposition, substitution, and insertion, all over the
/// 26-letter lowercase alphabet. For a word of n characters that is
/// n + (n-1) + 26n + 26(n+1) raw candidates before deduplication.
/// The set is unfiltered: callers decide which members are real words.
pub fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut edits = HashSet::with_capacity(54 * n + 26);

    // deletion (remove one letter)
    for i in 0..n {
        let mut edited = chars.clone();
        edited.remove(i);
        edits.insert(edited.into_iter().collect());
    }

    // transposition (swap adjacent letters)
    for i in 0..n.saturating_sub(1) {
        let mut edited = chars.clone();
        edited.swap(i, i + 1);
        edits.insert(edited.into_iter().collect());
    }

    // substitution (change one letter to another)
    for i in 0..n {
        for &letter in ALPHABET {
            let mut edited = chars.clone();
            edited[i] = letter as char;
            edits.insert(edited.into_iter().collect());
        }
    }

    // insertion (add a letter, including before the first and after the last)
    for i in 0..=n {
        for &letter in ALPHABET {
            let mut edited = chars.clone();
            edited.insert(i, letter as char);
            edits.insert(edited.into_iter().collect());
        }
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletions() {
        let edits = edits1("cat");
        assert!(edits.contains("at"));
        assert!(edits.contains("ct"));
        assert!(edits.contains("ca"));
    }

    #[test]
    fn test_transpositions() {
        let edits = edits1("cat");
        assert!(edits.contains("act"));
        assert!(edits.contains("cta"));
        // only adjacent swaps, not a general permutation
        assert!(!edits.contains("tac"));
    }

    #[test]
    fn test_substitutions() {
        let edits = edits1("cat");
        assert!(edits.contains("bat"));
        assert!(edits.contains("cot"));
        assert!(edits.contains("caz"));
        // the no-op substitution reproduces the word itself
        assert!(edits.contains("cat"));
    }

    #[test]
    fn test_insertions() {
        let edits = edits1("cat");
        assert!(edits.contains("acat"));
        assert!(edits.contains("cart"));
        assert!(edits.contains("cats"));
    }

    #[test]
    fn test_candidate_volume() {
        // 54n + 25 raw candidates, fewer after deduplication
        let edits = edits1("something");
        assert!(edits.len() <= 54 * 9 + 25);
        assert!(edits.len() > 400);
        assert!(edits.iter().all(|e| e.len() >= 8 && e.len() <= 10));
    }

    #[test]
    fn test_empty_word() {
        // nothing to delete, swap, or substitute; 26 single-letter insertions
        let edits = edits1("");
        assert_eq!(edits.len(), 26);
        assert!(edits.contains("a"));
        assert!(edits.contains("z"));
    }

    #[test]
    fn test_non_alphabetic_input_is_harmless() {
        let edits = edits1("r2");
        assert!(edits.contains("2"));
        assert!(edits.contains("ra"));
        assert!(edits.contains("2r"));
    }
}
