//! Error types for scoring, game sessions and word-list loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the feedback engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// Guess and secret must be the same length
    #[error("length mismatch: guess has {guess} symbols, secret has {secret}")]
    LengthMismatch {
        /// Length of the guess sequence
        guess: usize,
        /// Length of the secret sequence
        secret: usize,
    },
}

/// Errors from submitting or preparing a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The current row is not filled yet
    #[error("Not enough letters")]
    IncompleteGuess,

    /// The word is not in the accepted vocabulary
    #[error("Not in guess list")]
    NotInGuessList,

    /// A part does not exist in its slot's category
    #[error("Unknown part for {category}: {file}")]
    UnknownPart {
        /// Category name of the offending slot
        category: String,
        /// Asset the player asked for
        file: String,
    },

    /// Line input could not be turned into a guess
    #[error("{0}")]
    InvalidInput(String),

    /// No further guesses are accepted
    #[error("The game is over")]
    GameOver,

    /// Nothing to draw a secret from
    #[error("answer list is empty")]
    EmptyAnswerList,

    /// The engine rejected the sequences
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

impl GameError {
    /// Returns true if this error cannot be fixed by the player retyping a guess
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::EmptyAnswerList | Self::Feedback(_) => true,

            Self::IncompleteGuess
            | Self::NotInGuessList
            | Self::UnknownPart { .. }
            | Self::InvalidInput(_)
            | Self::GameOver => false,
        }
    }
}

/// Errors from loading word lists
#[derive(Debug, Error)]
pub enum WordListError {
    /// Reading the list failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The list had no usable words
    #[error("{name} contains no usable words")]
    Empty {
        /// Which list was empty
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_not_fatal() {
        assert!(!GameError::IncompleteGuess.is_fatal());
        assert!(!GameError::NotInGuessList.is_fatal());
        assert!(!GameError::GameOver.is_fatal());
    }

    #[test]
    fn configuration_errors_are_fatal() {
        assert!(GameError::EmptyAnswerList.is_fatal());
        let err = GameError::from(FeedbackError::LengthMismatch { guess: 3, secret: 4 });
        assert!(err.is_fatal());
    }

    #[test]
    fn error_display() {
        assert_eq!(GameError::IncompleteGuess.to_string(), "Not enough letters");
        assert_eq!(GameError::NotInGuessList.to_string(), "Not in guess list");
        let err = FeedbackError::LengthMismatch { guess: 5, secret: 4 };
        assert_eq!(err.to_string(), "length mismatch: guess has 5 symbols, secret has 4");
        assert_eq!(GameError::Feedback(err.clone()).to_string(), err.to_string());
    }

    #[test]
    fn word_list_error_names_path() {
        let err = WordListError::Io {
            path: PathBuf::from("answer_list.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read answer_list.txt: missing");
    }
}
