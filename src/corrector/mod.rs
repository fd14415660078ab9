pub mod edits;

use crate::model::FrequencyModel;
use std::collections::HashSet;

/// Single-word corrector over a borrowed frequency model.
///
/// Stateless apart from the borrow: every call owns its own candidate
/// sets, so one corrector (or many) can run against a shared model from
/// parallel threads.
pub struct Corrector<'a> {
    model: &'a FrequencyModel,
}

impl<'a> Corrector<'a> {
    pub fn new(model: &'a FrequencyModel) -> Self {
        Self { model }
    }

    /// Return the most probable intended word for `word`.
    ///
    /// Priority order: a known word is returned as-is, then the best
    /// known candidate at edit distance 1, then at edit distance 2,
    /// then the (lowercased) input unchanged. Total for any input;
    /// lowercasing is the only normalization applied.
    pub fn correct(&self, word: &str) -> String {
        let word = word.to_lowercase();

        // known word - no correction needed, regardless of neighbors
        if self.model.contains(&word) {
            return word;
        }

        // Distance-1 candidates are kept unfiltered: the same set seeds
        // the distance-2 expansion below. Expanding only from known
        // seeds would miss corrections whose intermediate string is
        // itself not a word.
        let candidates1 = edits::edits1(&word);
        if let Some(best) = self.best_candidate(&candidates1) {
            return best;
        }

        let mut candidates2 = HashSet::new();
        for seed in &candidates1 {
            for candidate in edits::edits1(seed) {
                if self.model.contains(&candidate) {
                    candidates2.insert(candidate);
                }
            }
        }
        if let Some(best) = self.best_candidate(&candidates2) {
            return best;
        }

        // no known correction exists
        word
    }

    /// Highest-frequency known candidate. Equal frequencies resolve to
    /// the lexicographically smallest word so runs are reproducible.
    fn best_candidate(&self, candidates: &HashSet<String>) -> Option<String> {
        candidates
            .iter()
            .filter_map(|candidate| {
                self.model
                    .frequency(candidate)
                    .map(|frequency| (frequency, candidate))
            })
            .max_by(|(freq_a, word_a), (freq_b, word_b)| {
                freq_a.cmp(freq_b).then_with(|| word_b.cmp(word_a))
            })
            .map(|(_, candidate)| candidate.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn model(entries: &[(&str, u64)]) -> FrequencyModel {
        let counts: BTreeMap<String, u64> = entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect();
        FrequencyModel::from_counts(counts).unwrap()
    }

    #[test]
    fn test_known_word_unchanged() {
        let model = model(&[("cat", 100)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("cat"), "cat");
    }

    #[test]
    fn test_known_word_beats_higher_frequency_neighbor() {
        // the error model only activates for unknown input
        let model = model(&[("cat", 10), ("cot", 10_000)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("cat"), "cat");
    }

    #[test]
    fn test_case_insensitive() {
        let model = model(&[("access", 50)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("ACCESS"), "access");
        assert_eq!(corrector.correct("Acess"), corrector.correct("acess"));
        assert_eq!(corrector.correct("ACESS"), "access");
    }

    #[test]
    fn test_distance_one_deletion() {
        let model = model(&[("access", 50)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("acess"), "access");
    }

    #[test]
    fn test_distance_one_prefers_highest_frequency() {
        // "the", "then" and "there" are all one edit from "ther"
        let model = model(&[("the", 10_000), ("there", 500), ("then", 5)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("ther"), "the");
    }

    #[test]
    fn test_unreachable_word_never_wins() {
        // "zzzz" dominates on frequency but is not within two edits
        let model = model(&[("zzzz", 99_999), ("there", 500)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("ther"), "there");
    }

    #[test]
    fn test_distance_two() {
        let model = model(&[("hello", 20)]);
        let corrector = Corrector::new(&model);

        // two deletions away
        assert_eq!(corrector.correct("xhellox"), "hello");
    }

    #[test]
    fn test_distance_one_beats_distance_two() {
        // "access" is one insertion away; "assess" needs two edits, and
        // its much higher frequency must not promote it past the tier order
        let model = model(&[("access", 3), ("assess", 10_000)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("acess"), "access");
    }

    #[test]
    fn test_distance_two_expands_unknown_seeds() {
        // "zcat" (the intermediate string) is not a word, but the
        // expansion must still pass through it to reach "cat"
        let model = model(&[("cat", 5)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("xzcat"), "cat");
    }

    #[test]
    fn test_no_known_correction_echoes_input() {
        let model = model(&[("hello", 1)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("xyzxyz"), "xyzxyz");
    }

    #[test]
    fn test_total_on_degenerate_input() {
        let model = model(&[("hello", 1)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct(""), "");
        assert_eq!(corrector.correct("r2d2"), "r2d2");
        assert_eq!(corrector.correct("!!!"), "!!!");
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // both are one insertion from "ct" at the same frequency
        let model = model(&[("cit", 10), ("cot", 10)]);
        let corrector = Corrector::new(&model);

        assert_eq!(corrector.correct("ct"), "cit");
    }

    #[test]
    fn test_large_input_completes() {
        // cost is quadratic in word length, independent of corpus size
        let model = model(&[("hello", 1)]);
        let corrector = Corrector::new(&model);
        let long_word = "q".repeat(30);

        assert_eq!(corrector.correct(&long_word), long_word);
    }
}
