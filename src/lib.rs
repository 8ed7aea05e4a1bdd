// Library interface for shortle
// This allows integration tests to access internal modules

pub mod logging;

pub mod cli;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod parts;
pub mod session;
pub mod tui;
pub mod variant;
pub mod words;

// Re-export commonly used items for easier testing
pub use error::{FeedbackError, GameError, WordListError};
pub use feedback::{KeyHints, Mark, is_win, score, to_pattern};
pub use game_state::{GameInterface, GameRecord, Message, MessageKind, UserAction, game_loop};
pub use parts::{Category, Part, PartCatalogue, PartVariant};
pub use session::{GameSession, GameStatus, MAX_GUESSES, Row, SubmitOutcome};
pub use variant::Variant;
pub use words::{LetterVariant, WordList, load_word_list_from_file, load_word_list_from_str};
