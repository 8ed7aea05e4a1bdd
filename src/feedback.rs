//! Scoring a guess against the secret.
//!
//! [`score`] is the two-pass algorithm shared by every game mode: exact
//! matches first, then leftover matches against the secret positions that
//! have not been consumed yet. It works over any symbol type with equality,
//! so letters and sword parts go through the same code.
//!
//! Note that scoring is not symmetric: `score(a, b)` and `score(b, a)` can
//! differ whenever either side holds duplicates.

use crate::error::FeedbackError;
use std::collections::HashMap;
use std::hash::Hash;

/// Classification of one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Symbol does not occur among the unconsumed secret positions
    Absent,
    /// Symbol occurs elsewhere in the secret
    Present,
    /// Symbol is in the right position
    Correct,
}

impl Mark {
    /// Single-letter glyph: G (correct), Y (present), X (absent)
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }
}

/// Score `guess` against `secret`.
///
/// Each secret position is consumed at most once across both passes, so a
/// value occurring `k` times in the secret is never credited more than `k`
/// times in the result.
pub fn score<T: PartialEq>(guess: &[T], secret: &[T]) -> Result<Vec<Mark>, FeedbackError> {
    if guess.len() != secret.len() {
        return Err(FeedbackError::LengthMismatch {
            guess: guess.len(),
            secret: secret.len(),
        });
    }

    let mut feedback = vec![Mark::Absent; guess.len()];
    let mut unconsumed: Vec<Option<&T>> = secret.iter().map(Some).collect();

    // First pass: exact matches
    for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            feedback[i] = Mark::Correct;
            unconsumed[i] = None;
        }
    }

    // Second pass: leftovers, lowest secret index first
    for (i, g) in guess.iter().enumerate() {
        if feedback[i] == Mark::Correct {
            continue;
        }
        if let Some(pos) = unconsumed.iter().position(|s| s.is_some_and(|s| s == g)) {
            feedback[i] = Mark::Present;
            unconsumed[pos] = None;
        }
    }

    Ok(feedback)
}

/// True when every position is [`Mark::Correct`]
pub fn is_win(feedback: &[Mark]) -> bool {
    feedback.iter().all(|&m| m == Mark::Correct)
}

/// Render feedback as a G/Y/X string
pub fn to_pattern(feedback: &[Mark]) -> String {
    feedback.iter().map(|m| m.to_char()).collect()
}

/// Best mark seen so far for each symbol, used to colour the keyboard.
///
/// A symbol's hint only ever improves: absent, then present, then correct.
#[derive(Debug, Clone)]
pub struct KeyHints<T: Eq + Hash> {
    marks: HashMap<T, Mark>,
}

impl<T: Eq + Hash> Default for KeyHints<T> {
    fn default() -> Self {
        Self {
            marks: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> KeyHints<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints
    pub fn record(&mut self, guess: &[T], feedback: &[Mark]) {
        for (symbol, &mark) in guess.iter().zip(feedback) {
            self.marks
                .entry(symbol.clone())
                .and_modify(|best| *best = (*best).max(mark))
                .or_insert(mark);
        }
    }

    pub fn get(&self, symbol: &T) -> Option<Mark> {
        self.marks.get(symbol).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}
