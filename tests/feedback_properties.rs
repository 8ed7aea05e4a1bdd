//! Property-based tests for the feedback engine
//!
//! These tests verify the invariants every scoring must hold:
//!
//! 1. **Identity**: a sequence scored against itself is all correct
//! 2. **Disjointness**: sequences with no common value are all absent
//! 3. **Conservation**: no value is credited more often than it occurs in
//!    both the guess and the secret
//! 4. **Exactness**: a position is correct iff the symbols there are equal
//! 5. **Determinism**: the same inputs always produce the same feedback

use proptest::prelude::*;
use shortle::{FeedbackError, Mark, is_win, score};
use std::collections::HashMap;

// Small alphabets so duplicates are common
fn pair(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0..=max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(0u8..4, n),
            prop::collection::vec(0u8..4, n),
        )
    })
}

fn counts(values: &[u8]) -> HashMap<u8, usize> {
    let mut map = HashMap::new();
    for &v in values {
        *map.entry(v).or_insert(0) += 1;
    }
    map
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_self_score_is_all_correct(seq in prop::collection::vec(any::<u8>(), 0..8)) {
        let feedback = score(&seq, &seq).unwrap();
        prop_assert!(is_win(&feedback));
        prop_assert_eq!(feedback.len(), seq.len());
    }

    #[test]
    fn prop_disjoint_is_all_absent(
        guess in prop::collection::vec(0u8..10, 0..8),
        offset in 0usize..8,
    ) {
        // Shift into a range the guess never uses
        let secret: Vec<u8> = guess.iter().map(|&g| 10 + ((g as usize + offset) % 10) as u8).collect();
        let feedback = score(&guess, &secret).unwrap();
        prop_assert!(feedback.iter().all(|&m| m == Mark::Absent));
    }

    #[test]
    fn prop_credit_never_exceeds_occurrences((guess, secret) in pair(8)) {
        let feedback = score(&guess, &secret).unwrap();
        let in_guess = counts(&guess);
        let in_secret = counts(&secret);

        let mut credited: HashMap<u8, usize> = HashMap::new();
        for (g, m) in guess.iter().zip(&feedback) {
            if *m != Mark::Absent {
                *credited.entry(*g).or_insert(0) += 1;
            }
        }
        for (value, &n) in &credited {
            let limit = in_guess[value].min(in_secret.get(value).copied().unwrap_or(0));
            prop_assert!(n <= limit, "value {} credited {} times, limit {}", value, n, limit);
        }
    }

    #[test]
    fn prop_credit_is_maximal((guess, secret) in pair(8)) {
        // Every value gets exactly min(k, m) credits
        let feedback = score(&guess, &secret).unwrap();
        let in_guess = counts(&guess);
        let in_secret = counts(&secret);
        for (value, &m) in &in_guess {
            let credited = guess
                .iter()
                .zip(&feedback)
                .filter(|(g, f)| *g == value && **f != Mark::Absent)
                .count();
            prop_assert_eq!(credited, m.min(in_secret.get(value).copied().unwrap_or(0)));
        }
    }

    #[test]
    fn prop_correct_iff_equal_at_position((guess, secret) in pair(8)) {
        let feedback = score(&guess, &secret).unwrap();
        for i in 0..guess.len() {
            prop_assert_eq!(feedback[i] == Mark::Correct, guess[i] == secret[i]);
        }
    }

    #[test]
    fn prop_repeated_calls_agree((guess, secret) in pair(8)) {
        prop_assert_eq!(score(&guess, &secret).unwrap(), score(&guess, &secret).unwrap());
    }

    #[test]
    fn prop_length_mismatch_is_an_error(
        guess in prop::collection::vec(any::<u8>(), 0..8),
        secret in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        prop_assume!(guess.len() != secret.len());
        prop_assert_eq!(
            score(&guess, &secret),
            Err(FeedbackError::LengthMismatch { guess: guess.len(), secret: secret.len() })
        );
    }
}

#[test]
fn scoring_is_not_symmetric() {
    let a: Vec<char> = "AABB".chars().collect();
    let b: Vec<char> = "ABCA".chars().collect();
    assert_ne!(score(&a, &b).unwrap(), score(&b, &a).unwrap());
}
