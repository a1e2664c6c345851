use crate::debug_log;
use std::collections::HashMap;

/// Contribution divisor for a letter already seen earlier in the same word.
pub const REPEAT_PENALTY: f64 = 8.0;

/// Per-position letter counts over a word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    positions: Vec<HashMap<char, usize>>,
}

impl FrequencyTable {
    /// How many words have `letter` at `position`.
    #[must_use]
    pub fn count(&self, position: usize, letter: char) -> usize {
        self.positions
            .get(position)
            .and_then(|counts| counts.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

pub fn build_freq_chart(words: &[String]) -> FrequencyTable {
    let mut positions: Vec<HashMap<char, usize>> = Vec::new();
    for word in words {
        for (i, c) in word.chars().enumerate() {
            if positions.len() <= i {
                positions.resize_with(i + 1, HashMap::new);
            }
            *positions[i].entry(c).or_insert(0) += 1;
        }
    }
    FrequencyTable { positions }
}

pub fn word_weight(word: &str, freq: &FrequencyTable) -> f64 {
    let chars: Vec<char> = word.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let weight = freq.count(i, c) as f64;
            if chars[..i].contains(&c) {
                weight / REPEAT_PENALTY
            } else {
                weight
            }
        })
        .sum()
}

/// Words paired with their weights, heaviest first. Ties keep input order.
#[must_use]
pub fn rank_with_weights(words: &[String]) -> Vec<(String, f64)> {
    let freq = build_freq_chart(words);
    let mut scored: Vec<(String, f64)> = words
        .iter()
        .map(|w| (w.clone(), word_weight(w, &freq)))
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    debug_log!("ranked {} words, best {:?}", scored.len(), scored.first());
    scored
}

#[must_use]
pub fn rank(words: &[String]) -> Vec<String> {
    rank_with_weights(words)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_freq_chart() {
        let freq = build_freq_chart(&words(&["CRANE", "CRATE", "SLATE"]));
        assert_eq!(freq.len(), 5);
        assert_eq!(freq.count(0, 'C'), 2);
        assert_eq!(freq.count(0, 'S'), 1);
        assert_eq!(freq.count(2, 'A'), 3);
        assert_eq!(freq.count(3, 'T'), 2);
        assert_eq!(freq.count(4, 'E'), 3);
        assert_eq!(freq.count(0, 'Z'), 0);
        assert_eq!(freq.count(9, 'C'), 0);
    }

    #[test]
    fn test_build_freq_chart_empty() {
        let freq = build_freq_chart(&[]);
        assert!(freq.is_empty());
    }

    #[test]
    fn test_word_weight_sums_positions() {
        let list = words(&["CRANE", "CRATE", "SLATE"]);
        let freq = build_freq_chart(&list);
        // C=2, R=2, A=3, N=1, E=3
        assert_eq!(word_weight("CRANE", &freq), 11.0);
        // S=1, L=1, A=3, T=2, E=3
        assert_eq!(word_weight("SLATE", &freq), 10.0);
    }

    #[test]
    fn test_word_weight_penalises_repeats() {
        let list = words(&["AAAAA", "ABCDE"]);
        let freq = build_freq_chart(&list);
        // First A counts fully (2), the other four A's count 1/8 each.
        assert_eq!(word_weight("AAAAA", &freq), 2.0 + 4.0 / 8.0);
        assert_eq!(word_weight("ABCDE", &freq), 2.0 + 4.0);
    }

    #[test]
    fn test_penalty_only_applies_after_first_occurrence() {
        let list = words(&["EERIE"]);
        let freq = build_freq_chart(&list);
        // E full, E/8, R full, I full, E/8
        assert_eq!(word_weight("EERIE", &freq), 3.0 + 2.0 / 8.0);
    }

    #[test]
    fn test_rank_distinct_letters_beat_repeats() {
        let ranked = rank(&words(&["AAAAA", "ABCDE"]));
        assert_eq!(ranked, words(&["ABCDE", "AAAAA"]));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let list = words(&["ABCDE", "VWXYZ", "FGHIJ"]);
        assert_eq!(rank(&list), list);
    }

    #[test]
    fn test_rank_orders_by_weight() {
        let ranked = rank_with_weights(&words(&["SLATE", "CRANE", "CRATE"]));
        let order: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();
        // CRATE=12, CRANE=11, SLATE=10
        assert_eq!(order, vec!["CRATE", "CRANE", "SLATE"]);
        assert_eq!(ranked[0].1, 12.0);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let list = words(&["SPEED", "CREEP", "SLEEP", "STEEP", "SWEEP"]);
        assert_eq!(rank(&list), rank(&list));
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
        assert!(rank_with_weights(&[]).is_empty());
    }
}
