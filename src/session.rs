//! State of one game: the secret, submitted rows and the row being typed.

use crate::error::GameError;
use crate::feedback::{KeyHints, Mark, is_win, score};
use crate::variant::Variant;
use crate::{debug_log, info_log};
use std::fmt::Debug;
use std::hash::Hash;

pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess and how it scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<S> {
    pub guess: Vec<S>,
    pub feedback: Vec<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: Vec<Mark>,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct GameSession<S: Eq + Hash> {
    secret: Vec<S>,
    max_guesses: usize,
    rows: Vec<Row<S>>,
    entry: Vec<S>,
    status: GameStatus,
    hints: KeyHints<S>,
}

impl<S: Clone + Eq + Hash + Debug> GameSession<S> {
    /// A limit of zero guesses gives a session that is already lost.
    pub fn new(secret: Vec<S>, max_guesses: usize) -> Self {
        let status = if max_guesses == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        Self {
            secret,
            max_guesses,
            rows: Vec::with_capacity(max_guesses),
            entry: Vec::new(),
            status,
            hints: KeyHints::new(),
        }
    }

    /// Draw a secret from `variant` and start a standard six-guess game
    pub fn start<V, R>(variant: &V, rng: &mut R) -> Result<Self, GameError>
    where
        V: Variant<Symbol = S>,
        R: rand::Rng + ?Sized,
    {
        let secret = variant.pick_secret(rng)?;
        debug_log!("New {} game, secret: {:?}", variant.name(), secret);
        Ok(Self::new(secret, MAX_GUESSES))
    }

    pub fn length(&self) -> usize {
        self.secret.len()
    }

    pub fn secret(&self) -> &[S] {
        &self.secret
    }

    pub fn rows(&self) -> &[Row<S>] {
        &self.rows
    }

    pub fn entry(&self) -> &[S] {
        &self.entry
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn hints(&self) -> &KeyHints<S> {
        &self.hints
    }

    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Index of the row being typed
    pub fn current_row(&self) -> usize {
        self.rows.len()
    }

    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.rows.len())
    }

    /// Append to the current entry. Returns false if nothing changed.
    pub fn push(&mut self, symbol: S) -> bool {
        if self.status.is_over() || self.entry.len() >= self.length() {
            return false;
        }
        self.entry.push(symbol);
        true
    }

    pub fn pop(&mut self) -> Option<S> {
        if self.status.is_over() {
            return None;
        }
        self.entry.pop()
    }

    /// Replace the current entry wholesale, as typed on one line
    pub fn set_entry(&mut self, symbols: Vec<S>) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if symbols.len() > self.length() {
            return Err(GameError::InvalidInput(format!(
                "Expected {} symbols, got {}",
                self.length(),
                symbols.len()
            )));
        }
        self.entry = symbols;
        Ok(())
    }

    /// Score the current entry and advance the game.
    ///
    /// On error the entry is left as it was so the player can fix it.
    pub fn submit<V>(&mut self, variant: &V) -> Result<SubmitOutcome, GameError>
    where
        V: Variant<Symbol = S>,
    {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.entry.len() < self.length() {
            return Err(GameError::IncompleteGuess);
        }
        variant.validate(&self.entry)?;

        let feedback = score(&self.entry, &self.secret)?;
        let guess = std::mem::take(&mut self.entry);
        self.hints.record(&guess, &feedback);
        self.rows.push(Row {
            guess,
            feedback: feedback.clone(),
        });

        if is_win(&feedback) {
            self.status = GameStatus::Won;
        } else if self.rows.len() >= self.max_guesses {
            self.status = GameStatus::Lost;
        }
        info_log!(
            "Row {} scored {}, status {:?}",
            self.rows.len(),
            crate::feedback::to_pattern(&feedback),
            self.status
        );

        Ok(SubmitOutcome {
            feedback,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::LetterVariant;
    use Mark::{Absent, Correct};

    fn variant() -> LetterVariant {
        let guesses = ["SHOP", "LAMP", "WOLF", "BEAR", "DUCK", "FROG", "KITE"];
        LetterVariant::new(
            vec!["SHIP".to_string()],
            guesses.iter().map(|s| s.to_string()),
        )
        .unwrap()
    }

    fn session() -> GameSession<char> {
        GameSession::new("SHIP".chars().collect(), MAX_GUESSES)
    }

    fn type_word(session: &mut GameSession<char>, word: &str) {
        for c in word.chars() {
            session.push(c);
        }
    }

    #[test]
    fn test_push_stops_at_length() {
        let mut s = session();
        type_word(&mut s, "SHOPS");
        assert_eq!(s.entry(), &['S', 'H', 'O', 'P']);
        assert_eq!(s.pop(), Some('P'));
        assert_eq!(s.entry().len(), 3);
    }

    #[test]
    fn test_overlong_entry_rejected() {
        let mut s = session();
        let err = s.set_entry("SHIPS".chars().collect()).unwrap_err();
        assert_eq!(err, GameError::InvalidInput("Expected 4 symbols, got 5".to_string()));
        assert!(s.entry().is_empty());
    }

    #[test]
    fn test_incomplete_guess_rejected() {
        let mut s = session();
        type_word(&mut s, "SHO");
        assert_eq!(s.submit(&variant()), Err(GameError::IncompleteGuess));
        assert_eq!(s.entry().len(), 3);
        assert!(s.rows().is_empty());
    }

    #[test]
    fn test_unknown_word_rejected_and_kept() {
        let mut s = session();
        type_word(&mut s, "ZZZZ");
        assert_eq!(s.submit(&variant()), Err(GameError::NotInGuessList));
        assert_eq!(s.entry(), &['Z', 'Z', 'Z', 'Z']);
        assert_eq!(s.current_row(), 0);
    }

    #[test]
    fn test_submit_scores_and_advances() {
        let mut s = session();
        type_word(&mut s, "SHOP");
        let outcome = s.submit(&variant()).unwrap();
        assert_eq!(outcome.feedback, vec![Correct, Correct, Absent, Correct]);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.remaining_guesses(), 5);
        assert!(s.entry().is_empty());
        assert_eq!(s.hints().get(&'O'), Some(Absent));
        assert_eq!(s.hints().get(&'S'), Some(Correct));
    }

    #[test]
    fn test_win_ends_game() {
        let mut s = session();
        type_word(&mut s, "SHIP");
        let outcome = s.submit(&variant()).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(!s.push('A'));
        assert_eq!(s.submit(&variant()), Err(GameError::GameOver));
        assert_eq!(s.set_entry(vec!['S'; 4]), Err(GameError::GameOver));
    }

    #[test]
    fn test_six_misses_lose() {
        let mut s = session();
        let words = ["LAMP", "WOLF", "BEAR", "DUCK", "FROG", "KITE"];
        for (i, word) in words.iter().enumerate() {
            assert_eq!(s.status(), GameStatus::InProgress);
            s.set_entry(word.chars().collect()).unwrap();
            let outcome = s.submit(&variant()).unwrap();
            assert_eq!(outcome.status == GameStatus::Lost, i == words.len() - 1);
        }
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.rows().len(), MAX_GUESSES);
        assert_eq!(s.remaining_guesses(), 0);
    }

    #[test]
    fn test_zero_guess_limit_is_already_over() {
        let mut s = GameSession::new("SHIP".chars().collect(), 0);
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.remaining_guesses(), 0);
        assert!(!s.push('S'));
        assert_eq!(s.set_entry("SHIP".chars().collect()), Err(GameError::GameOver));
        assert_eq!(s.submit(&variant()), Err(GameError::GameOver));
        assert!(s.rows().is_empty());
        assert_eq!(s.remaining_guesses(), 0);
    }

    #[test]
    fn test_start_uses_variant_secret() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let s = GameSession::start(&variant(), &mut rng).unwrap();
        assert_eq!(s.secret(), &['S', 'H', 'I', 'P']);
        assert_eq!(s.max_guesses(), MAX_GUESSES);
    }
}
