use crate::error::GameError;
use crate::session::{GameSession, GameStatus};
use crate::variant::Variant;
use crate::{debug_log, info_log};
use rand::Rng;
use std::io;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction<S> {
    /// Type one symbol into the current row
    Push(S),
    /// Delete the last typed symbol
    Pop,
    /// Submit the current row
    Submit,
    /// Replace the current row and submit it in one go
    Guess(Vec<S>),
    NewGame,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
    Win,
    Loss,
}

/// Transient status line shown under the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn clear() -> Self {
        Self::new("", MessageKind::Info)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub status: GameStatus,
    pub guesses_used: usize,
    pub secret: String,
}

/// Presentation seam: the controller only talks to the player through this.
pub trait GameInterface<V: Variant> {
    fn render(&mut self, variant: &V, session: &GameSession<V::Symbol>) -> io::Result<()>;

    fn show_message(&mut self, message: &Message) -> io::Result<()>;

    /// Block until the player does something. End of input maps to `Exit`.
    fn read_action(
        &mut self,
        variant: &V,
        session: &GameSession<V::Symbol>,
    ) -> io::Result<UserAction<V::Symbol>>;
}

impl<V: Variant, T: GameInterface<V> + ?Sized> GameInterface<V> for &mut T {
    fn render(&mut self, variant: &V, session: &GameSession<V::Symbol>) -> io::Result<()> {
        (**self).render(variant, session)
    }

    fn show_message(&mut self, message: &Message) -> io::Result<()> {
        (**self).show_message(message)
    }

    fn read_action(
        &mut self,
        variant: &V,
        session: &GameSession<V::Symbol>,
    ) -> io::Result<UserAction<V::Symbol>> {
        (**self).read_action(variant, session)
    }
}

/// Message for a submission that went through
pub fn outcome_message<V: Variant>(variant: &V, session: &GameSession<V::Symbol>) -> Message {
    match session.status() {
        GameStatus::Won => Message::new("You win!", MessageKind::Win),
        GameStatus::Lost => Message::new(
            format!("Game over! The answer was: {}", variant.describe(session.secret())),
            MessageKind::Loss,
        ),
        GameStatus::InProgress => Message::clear(),
    }
}

fn record<V: Variant>(variant: &V, session: &GameSession<V::Symbol>) -> GameRecord {
    GameRecord {
        status: session.status(),
        guesses_used: session.rows().len(),
        secret: variant.describe(session.secret()),
    }
}

fn submit<V: Variant>(
    variant: &V,
    session: &mut GameSession<V::Symbol>,
    finished: &mut Vec<GameRecord>,
) -> Result<Message, GameError> {
    session.submit(variant)?;
    let message = outcome_message(variant, session);
    if session.status().is_over() {
        info_log!("Game finished: {}", message.text);
        finished.push(record(variant, session));
    }
    Ok(message)
}

/// Run games until the player exits. Returns every game that reached an end.
pub fn game_loop<V, I, R>(variant: &V, mut interface: I, rng: &mut R) -> io::Result<Vec<GameRecord>>
where
    V: Variant,
    I: GameInterface<V>,
    R: Rng + ?Sized,
{
    let mut session = new_session(variant, rng)?;
    let mut finished = Vec::new();

    loop {
        interface.render(variant, &session)?;
        let action = interface.read_action(variant, &session)?;
        debug_log!("Action: {:?}", action);

        let result = match action {
            UserAction::Exit => break,
            UserAction::NewGame => {
                session = new_session(variant, rng)?;
                interface.show_message(&Message::clear())?;
                continue;
            }
            _ if session.status().is_over() => {
                debug_log!("Ignoring input after game over");
                continue;
            }
            UserAction::Push(symbol) => {
                session.push(symbol);
                Ok(None)
            }
            UserAction::Pop => {
                session.pop();
                Ok(None)
            }
            UserAction::Submit => submit(variant, &mut session, &mut finished).map(Some),
            UserAction::Guess(symbols) => session
                .set_entry(symbols)
                .and_then(|()| submit(variant, &mut session, &mut finished))
                .map(Some),
        };

        match result {
            Ok(Some(message)) => interface.show_message(&message)?,
            Ok(None) => {}
            Err(e) if e.is_fatal() => return Err(io::Error::other(e)),
            Err(e) => interface.show_message(&Message::new(e.to_string(), MessageKind::Error))?,
        }
    }

    Ok(finished)
}

fn new_session<V, R>(variant: &V, rng: &mut R) -> io::Result<GameSession<V::Symbol>>
where
    V: Variant,
    R: Rng + ?Sized,
{
    GameSession::start(variant, rng).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::LetterVariant;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Scripted interface that records what it was shown
    struct Scripted {
        actions: VecDeque<UserAction<char>>,
        messages: Vec<Message>,
        renders: usize,
    }

    impl Scripted {
        fn new(actions: Vec<UserAction<char>>) -> Self {
            Self {
                actions: actions.into(),
                messages: Vec::new(),
                renders: 0,
            }
        }
    }

    impl GameInterface<LetterVariant> for Scripted {
        fn render(&mut self, _: &LetterVariant, _: &GameSession<char>) -> io::Result<()> {
            self.renders += 1;
            Ok(())
        }

        fn show_message(&mut self, message: &Message) -> io::Result<()> {
            self.messages.push(message.clone());
            Ok(())
        }

        fn read_action(
            &mut self,
            _: &LetterVariant,
            _: &GameSession<char>,
        ) -> io::Result<UserAction<char>> {
            Ok(self.actions.pop_front().unwrap_or(UserAction::Exit))
        }
    }

    fn variant() -> LetterVariant {
        let guesses = ["SHOP", "WOLF", "BEAR", "DUCK", "FROG", "CALM", "YARD"];
        LetterVariant::new(vec!["SHIP".to_string()], guesses.iter().map(|s| s.to_string()))
            .unwrap()
    }

    fn guess(word: &str) -> UserAction<char> {
        UserAction::Guess(word.chars().collect())
    }

    fn run(actions: Vec<UserAction<char>>) -> (Vec<GameRecord>, Scripted) {
        let mut ui = Scripted::new(actions);
        let mut rng = StdRng::seed_from_u64(0);
        let records = game_loop(&variant(), &mut ui, &mut rng).unwrap();
        (records, ui)
    }

    #[test]
    fn test_immediate_exit() {
        let (records, ui) = run(vec![UserAction::Exit]);
        assert!(records.is_empty());
        assert_eq!(ui.renders, 1);
    }

    #[test]
    fn test_typed_win() {
        let actions = vec![
            UserAction::Push('S'),
            UserAction::Push('H'),
            UserAction::Push('I'),
            UserAction::Push('X'),
            UserAction::Pop,
            UserAction::Push('P'),
            UserAction::Submit,
        ];
        let (records, ui) = run(actions);
        assert_eq!(
            records,
            vec![GameRecord {
                status: GameStatus::Won,
                guesses_used: 1,
                secret: "SHIP".to_string()
            }]
        );
        assert_eq!(ui.messages.last().unwrap().kind, MessageKind::Win);
    }

    #[test]
    fn test_errors_become_messages() {
        let (records, ui) = run(vec![UserAction::Push('S'), UserAction::Submit, guess("ZZZZ")]);
        assert!(records.is_empty());
        let texts: Vec<_> = ui.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["Not enough letters", "Not in guess list"]);
        assert!(ui.messages.iter().all(|m| m.kind == MessageKind::Error));
    }

    #[test]
    fn test_six_misses_reveal_secret() {
        let words = ["WOLF", "BEAR", "DUCK", "FROG", "CALM", "YARD"];
        let actions = words.iter().map(|w| guess(w)).collect();
        let (records, ui) = run(actions);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, GameStatus::Lost);
        assert_eq!(records[0].guesses_used, 6);
        let last = ui.messages.last().unwrap();
        assert_eq!(last.kind, MessageKind::Loss);
        assert_eq!(last.text, "Game over! The answer was: SHIP");
    }

    #[test]
    fn test_input_after_game_over_ignored_until_new_game() {
        let actions = vec![
            guess("SHIP"),
            guess("SHOP"),
            UserAction::NewGame,
            guess("SHOP"),
            guess("SHIP"),
        ];
        let (records, ui) = run(actions);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.status == GameStatus::Won));
        assert_eq!(records[1].guesses_used, 2);
        // win, clear on new game, continue after SHOP, win
        let kinds: Vec<_> = ui.messages.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MessageKind::Win, MessageKind::Info, MessageKind::Info, MessageKind::Win]
        );
    }

    #[test]
    fn test_outcome_message_in_progress_is_empty() {
        let v = variant();
        let session = GameSession::new(vec!['S', 'H', 'I', 'P'], 6);
        assert!(outcome_message(&v, &session).is_empty());
    }
}
