//! The game-mode seam.
//!
//! A [`Variant`] supplies everything mode-specific around the shared
//! feedback engine: what a symbol is, how long a sequence is, how player
//! input becomes symbols, which guesses are acceptable and how a secret is
//! drawn.

use crate::error::GameError;
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

pub trait Variant {
    type Symbol: Clone + Eq + Hash + Debug;

    /// Short mode name used in titles and logs
    fn name(&self) -> &'static str;

    /// Number of symbols in every guess and secret
    fn length(&self) -> usize;

    /// What a typed guess looks like, for prompts
    fn input_hint(&self) -> String;

    /// Turn one line of typed input into a full guess
    fn parse_guess(&self, input: &str) -> Result<Vec<Self::Symbol>, GameError>;

    /// Turn a single keypress into the symbol for `slot`, if it names one
    fn parse_key(&self, slot: usize, key: char) -> Option<Self::Symbol>;

    /// Reject guesses outside the accepted vocabulary
    fn validate(&self, guess: &[Self::Symbol]) -> Result<(), GameError>;

    fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Self::Symbol>, GameError>;

    /// Human-readable form of a whole sequence
    fn describe(&self, sequence: &[Self::Symbol]) -> String;

    /// Short label for a single board cell or key
    fn label(&self, symbol: &Self::Symbol) -> String;

    /// Symbols laid out as on-screen keyboard rows
    fn keyboard_rows(&self) -> Vec<Vec<Self::Symbol>>;

    /// Caption shown in front of a keyboard row
    fn keyboard_caption(&self, _row: usize) -> Option<String> {
        None
    }
}
