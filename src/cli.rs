use crate::feedback::to_pattern;
use crate::game_state::{GameInterface, Message, MessageKind, UserAction};
use crate::session::GameSession;
use crate::variant::Variant;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Shortle: guess the secret word, or the parts of the secret sword
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which game to play
    #[arg(long, value_enum, default_value_t = Mode::Letters)]
    pub mode: Mode,

    /// Newline-delimited list of secret words
    #[arg(short = 'a', long = "answers")]
    pub answers_path: Option<PathBuf>,

    /// Newline-delimited list of accepted guesses
    #[arg(short = 'g', long = "guesses")]
    pub guesses_path: Option<PathBuf>,

    /// Use the full-screen terminal UI
    #[arg(long)]
    pub tui: bool,

    /// Seed for secret selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Guess a four-letter word
    Letters,
    /// Guess the five parts of a sword
    Parts,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

enum LineInput {
    Exit,
    NewGame,
    Blank,
    Text(String),
}

fn classify_line(line: &str) -> LineInput {
    let trimmed = line.trim();
    match trimmed.to_uppercase().as_str() {
        "EXIT" => LineInput::Exit,
        "NEXT" => LineInput::NewGame,
        "" => LineInput::Blank,
        _ => LineInput::Text(trimmed.to_string()),
    }
}

fn guess_prompt<V: Variant>(variant: &V) -> String {
    format!(
        "Enter your guess ({}, or 'exit' to quit, or 'next' to start a new game):",
        variant.input_hint()
    )
}

/// Line-oriented interface over any reader and writer
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R, io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_hints<V: Variant>(
        &mut self,
        variant: &V,
        session: &GameSession<V::Symbol>,
    ) -> io::Result<()> {
        let hints = session.hints();
        if hints.is_empty() {
            return Ok(());
        }
        let known: Vec<String> = variant
            .keyboard_rows()
            .iter()
            .flatten()
            .filter_map(|key| {
                hints.get(key).map(|mark| {
                    format!(
                        "{}={}",
                        variant.describe(std::slice::from_ref(key)),
                        mark.to_char()
                    )
                })
            })
            .collect();
        writeln!(self.writer, "Keys: {}", known.join(" "))
    }
}

impl<V: Variant, R: BufRead, W: Write> GameInterface<V> for CliInterface<R, W> {
    fn render(&mut self, variant: &V, session: &GameSession<V::Symbol>) -> io::Result<()> {
        writeln!(self.writer)?;
        for row in session.rows() {
            let labels: Vec<String> = row.guess.iter().map(|s| variant.label(s)).collect();
            writeln!(self.writer, "{}  {}", labels.join(" "), to_pattern(&row.feedback))?;
        }
        self.write_hints(variant, session)?;
        if !session.status().is_over() {
            writeln!(
                self.writer,
                "{} of {} guesses left",
                session.remaining_guesses(),
                session.max_guesses()
            )?;
        }
        Ok(())
    }

    fn show_message(&mut self, message: &Message) -> io::Result<()> {
        if message.is_empty() {
            return Ok(());
        }
        match message.kind {
            MessageKind::Error => writeln!(self.writer, "Error: {}", message.text),
            MessageKind::Info | MessageKind::Win | MessageKind::Loss => {
                writeln!(self.writer, "{}", message.text)
            }
        }
    }

    fn read_action(
        &mut self,
        variant: &V,
        session: &GameSession<V::Symbol>,
    ) -> io::Result<UserAction<V::Symbol>> {
        loop {
            if session.status().is_over() {
                writeln!(self.writer, "Type 'next' for a new game or 'exit' to quit:")?;
            } else {
                writeln!(self.writer, "{}", guess_prompt(variant))?;
            }
            self.writer.flush()?;

            let mut input = String::new();
            if self.reader.read_line(&mut input)? == 0 {
                return Ok(UserAction::Exit);
            }

            match classify_line(&input) {
                LineInput::Exit => {
                    writeln!(self.writer, "Exiting.")?;
                    return Ok(UserAction::Exit);
                }
                LineInput::NewGame => {
                    writeln!(self.writer, "New game started.")?;
                    return Ok(UserAction::NewGame);
                }
                LineInput::Blank => {}
                LineInput::Text(_) if session.status().is_over() => {}
                LineInput::Text(text) => match variant.parse_guess(&text) {
                    Ok(symbols) => return Ok(UserAction::Guess(symbols)),
                    Err(e) => writeln!(self.writer, "Invalid guess: {e}")?,
                },
            }
        }
    }
}
