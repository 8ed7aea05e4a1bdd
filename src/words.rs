use crate::error::{GameError, WordListError};
use crate::variant::Variant;
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const WORD_LENGTH: usize = 4;

pub const EMBEDDED_ANSWER_LIST: &str = include_str!("resources/answer_list.txt");
pub const EMBEDDED_GUESS_LIST: &str = include_str!("resources/guess_list.txt");

pub const ANSWER_LIST_FILE: &str = "answer_list.txt";
pub const GUESS_LIST_FILE: &str = "guess_list.txt";

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooShort,
    /// Longer than the word length; never cut down to fit
    TooLong,
    NotAlphabetic,
}

/// A line that did not make it into a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// 1-based line number in the source
    pub line: usize,
    pub entry: String,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
    pub rejected: Vec<RejectedEntry>,
}

impl WordList {
    /// Entries that were dropped because they were too long
    pub fn overlong(&self) -> impl Iterator<Item = &RejectedEntry> {
        self.rejected
            .iter()
            .filter(|r| r.reason == RejectReason::TooLong)
    }

    fn push_line(&mut self, seen: &mut HashSet<String>, line_no: usize, raw: &str, length: usize) {
        let word = raw.trim().to_uppercase();
        if word.is_empty() {
            return;
        }
        let reason = if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(RejectReason::NotAlphabetic)
        } else if word.len() > length {
            Some(RejectReason::TooLong)
        } else if word.len() < length {
            Some(RejectReason::TooShort)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                if reason == RejectReason::TooLong {
                    log::warn!("line {line_no}: '{word}' is longer than {length} letters, skipped");
                } else {
                    debug_log!("line {}: '{}' rejected ({:?})", line_no, word, reason);
                }
                self.rejected.push(RejectedEntry {
                    line: line_no,
                    entry: word,
                    reason,
                });
            }
            None => {
                if seen.insert(word.clone()) {
                    self.words.push(word);
                }
            }
        }
    }
}

pub fn load_word_list_from_str(data: &str, length: usize) -> WordList {
    let mut list = WordList::default();
    let mut seen = HashSet::new();
    for (i, line) in data.lines().enumerate() {
        list.push_line(&mut seen, i + 1, line, length);
    }
    list
}

pub fn load_word_list_from_file<P: AsRef<Path>>(
    path: P,
    length: usize,
) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let io_err = |source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut list = WordList::default();
    let mut seen = HashSet::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        list.push_line(&mut seen, i + 1, &line, length);
    }
    Ok(list)
}

/// Per-user location for a replacement word list, e.g.
/// `~/.local/share/shortle/answer_list.txt`
pub fn user_list_path(file_name: &str) -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("shortle").join(file_name))
}

/// Load a list from an explicit path, the per-user data directory, or the
/// embedded copy, in that order.
pub fn resolve_word_list(
    explicit: Option<&Path>,
    file_name: &str,
    embedded: &str,
) -> Result<WordList, WordListError> {
    if let Some(path) = explicit {
        info_log!("Loading {} from {}", file_name, path.display());
        return load_word_list_from_file(path, WORD_LENGTH);
    }
    if let Some(path) = user_list_path(file_name)
        && path.is_file()
    {
        info_log!("Loading {} from {}", file_name, path.display());
        return load_word_list_from_file(&path, WORD_LENGTH);
    }
    debug_log!("Using embedded {}", file_name);
    Ok(load_word_list_from_str(embedded, WORD_LENGTH))
}

/// Letter mode: guess a four-letter word
#[derive(Debug, Clone)]
pub struct LetterVariant {
    answers: Vec<String>,
    guesses: HashSet<String>,
}

impl LetterVariant {
    /// Every answer is also accepted as a guess.
    pub fn new<I>(answers: Vec<String>, guesses: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = String>,
    {
        if answers.is_empty() {
            return Err(WordListError::Empty {
                name: ANSWER_LIST_FILE.to_string(),
            });
        }
        let mut guesses: HashSet<String> = guesses.into_iter().collect();
        guesses.extend(answers.iter().cloned());
        Ok(Self { answers, guesses })
    }

    pub fn from_lists(answers: WordList, guesses: WordList) -> Result<Self, WordListError> {
        Self::new(answers.words, guesses.words)
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn is_accepted(&self, word: &str) -> bool {
        self.guesses.contains(word)
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

impl Variant for LetterVariant {
    type Symbol = char;

    fn name(&self) -> &'static str {
        "letters"
    }

    fn length(&self) -> usize {
        WORD_LENGTH
    }

    fn input_hint(&self) -> String {
        format!("{WORD_LENGTH} letters")
    }

    fn parse_guess(&self, input: &str) -> Result<Vec<char>, GameError> {
        let word = input.trim().to_uppercase();
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidInput(
                "Only letters are allowed".to_string(),
            ));
        }
        match word.len() {
            n if n < WORD_LENGTH => Err(GameError::IncompleteGuess),
            n if n > WORD_LENGTH => Err(GameError::InvalidInput(format!(
                "Guess must be exactly {WORD_LENGTH} letters"
            ))),
            _ => Ok(word.chars().collect()),
        }
    }

    fn parse_key(&self, slot: usize, key: char) -> Option<char> {
        (slot < WORD_LENGTH && key.is_ascii_alphabetic()).then(|| key.to_ascii_uppercase())
    }

    fn validate(&self, guess: &[char]) -> Result<(), GameError> {
        let word: String = guess.iter().collect();
        if self.is_accepted(&word) {
            Ok(())
        } else {
            Err(GameError::NotInGuessList)
        }
    }

    fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<char>, GameError> {
        let word = self.answers.choose(rng).ok_or(GameError::EmptyAnswerList)?;
        Ok(word.chars().collect())
    }

    fn describe(&self, sequence: &[char]) -> String {
        sequence.iter().collect()
    }

    fn label(&self, symbol: &char) -> String {
        symbol.to_string()
    }

    fn keyboard_rows(&self) -> Vec<Vec<char>> {
        KEYBOARD_ROWS.iter().map(|row| row.chars().collect()).collect()
    }
}
