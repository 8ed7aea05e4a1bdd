//! TUI (Terminal User Interface) module for Shortle
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Title, the guess board (one row per allowed guess), the on-screen
//! keyboard coloured with the best mark seen per key, the message line and
//! the key instructions.
//!
//! # Input
//! Keys are translated by [`map_key`] into [`UserAction`]s for the game loop.
//! While a game is running, symbol keys fill the current row; once it ends
//! only `N` (new game) and `ESC` (quit) do anything.

use crate::feedback::Mark;
use crate::game_state::{GameInterface, Message, MessageKind, UserAction};
use crate::session::{GameSession, GameStatus};
use crate::variant::Variant;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const CAPTION_WIDTH: usize = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum CellState {
    Empty,
    Entered,
    Scored(Mark),
}

impl CellState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Scored(Mark::Correct) => (Color::Green, Color::Black),
            Self::Scored(Mark::Present) => (Color::Yellow, Color::Black),
            Self::Scored(Mark::Absent) => (Color::Gray, Color::White),
        }
    }

    fn style(self) -> Style {
        let (bg, fg) = self.colors();
        Style::default().fg(fg).bg(bg)
    }
}

fn message_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Info => MESSAGE_STYLE,
        MessageKind::Error => ERROR_STYLE,
        MessageKind::Win => WIN_STYLE,
        MessageKind::Loss => LOSS_STYLE,
    }
}

/// Translate a key press into an action.
///
/// `Ok(None)` means the key is ignored; `Err` carries a message for the
/// player.
pub fn map_key<V: Variant>(
    key: KeyEvent,
    variant: &V,
    session: &GameSession<V::Symbol>,
) -> Result<Option<UserAction<V::Symbol>>, String> {
    // Only process Press events, ignore Release and Repeat to avoid double input
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let over = session.status().is_over();

    match key.code {
        KeyCode::Esc => Ok(Some(UserAction::Exit)),
        KeyCode::Char('n' | 'N') if ctrl || over => Ok(Some(UserAction::NewGame)),
        _ if over => Ok(None),
        KeyCode::Enter => Ok(Some(UserAction::Submit)),
        KeyCode::Backspace => Ok(Some(UserAction::Pop)),
        KeyCode::Char(_) if ctrl || alt => Ok(None),
        KeyCode::Char(_) if session.entry().len() >= variant.length() => Ok(None),
        KeyCode::Char(c) => variant
            .parse_key(session.entry().len(), c)
            .map(|symbol| Some(UserAction::Push(symbol)))
            .ok_or_else(|| format!("'{c}' is not a valid key here")),
        _ => Ok(None),
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a, V: Variant> {
    variant: &'a V,
    session: &'a GameSession<V::Symbol>,
    message: &'a Message,
}

/// Run `undo` if `result` failed. Setup steps that run before `Self` exists
/// have no `Drop` to restore the terminal for them.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if let Err(e) = &result {
        debug_log!("Terminal setup failed: {}", e);
        undo();
    }
    result
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    message: Message,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let terminal = undo_on_err(Self::open_terminal(), || {
            let _ = disable_raw_mode();
        })?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            message: Message::clear(),
        })
    }

    fn open_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw<V: Variant>(&mut self, variant: &V, session: &GameSession<V::Symbol>) -> io::Result<()> {
        let ctx = RenderContext {
            variant,
            session,
            message: &self.message,
        };
        self.terminal.draw(|f| Self::render_static(f, &ctx))?;
        Ok(())
    }

    fn render_static<V: Variant>(f: &mut Frame, ctx: &RenderContext<'_, V>) {
        let board_height = ctx.session.max_guesses() as u16 + 2;
        let keyboard_height = ctx.variant.keyboard_rows().len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Title
                Constraint::Length(board_height),    // Board
                Constraint::Length(keyboard_height), // Keyboard
                Constraint::Length(3),               // Message
                Constraint::Min(3),                  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.variant);
        Self::render_board(f, chunks[1], ctx);
        Self::render_keyboard(f, chunks[2], ctx);
        Self::render_message(f, chunks[3], ctx.message);
        Self::render_instructions(f, chunks[4], ctx.session.status());
    }

    fn render_title<V: Variant>(f: &mut Frame, area: Rect, variant: &V) {
        let title = Paragraph::new(format!("SHORTLE ({})", variant.name()))
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn cell(label: &str, state: CellState) -> Span<'static> {
        let label = if label.is_empty() { " " } else { label };
        Span::styled(format!(" {label} "), state.style())
    }

    fn render_board<V: Variant>(f: &mut Frame, area: Rect, ctx: &RenderContext<'_, V>) {
        let session = ctx.session;
        let width = session.length();
        let mut lines = Vec::with_capacity(session.max_guesses());

        for r in 0..session.max_guesses() {
            let mut spans = Vec::with_capacity(width * 2);
            for c in 0..width {
                let (label, state) = if let Some(row) = session.rows().get(r) {
                    (ctx.variant.label(&row.guess[c]), CellState::Scored(row.feedback[c]))
                } else if r == session.current_row() && !session.status().is_over() {
                    match session.entry().get(c) {
                        Some(symbol) => (ctx.variant.label(symbol), CellState::Entered),
                        None => (String::new(), CellState::Empty),
                    }
                } else {
                    (String::new(), CellState::Empty)
                };
                spans.push(Self::cell(&label, state));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        let board = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Board").borders(Borders::ALL));
        f.render_widget(board, area);
    }

    fn render_keyboard<V: Variant>(f: &mut Frame, area: Rect, ctx: &RenderContext<'_, V>) {
        let hints = ctx.session.hints();
        let lines: Vec<Line> = ctx
            .variant
            .keyboard_rows()
            .iter()
            .enumerate()
            .map(|(i, keys)| {
                let mut spans = Vec::new();
                if let Some(caption) = ctx.variant.keyboard_caption(i) {
                    spans.push(Span::raw(format!("{caption:>width$} ", width = CAPTION_WIDTH)));
                }
                for key in keys {
                    let state = hints.get(key).map_or(CellState::Entered, CellState::Scored);
                    spans.push(Self::cell(&ctx.variant.label(key), state));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        let keyboard = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Keys").borders(Borders::ALL));
        f.render_widget(keyboard, area);
    }

    fn render_message(f: &mut Frame, area: Rect, message: &Message) {
        let paragraph = Paragraph::new(message.text.as_str())
            .style(message_style(message.kind))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, status: GameStatus) {
        let text = match status {
            GameStatus::InProgress => {
                "Type to fill the row | ENTER: Submit | BACKSPACE: Delete | CTRL-N: New game | ESC: Quit"
            }
            GameStatus::Won | GameStatus::Lost => "N: New game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

impl<V: Variant> GameInterface<V> for TuiInterface {
    fn render(&mut self, variant: &V, session: &GameSession<V::Symbol>) -> io::Result<()> {
        self.draw(variant, session)
    }

    fn show_message(&mut self, message: &Message) -> io::Result<()> {
        self.message = message.clone();
        Ok(())
    }

    fn read_action(
        &mut self,
        variant: &V,
        session: &GameSession<V::Symbol>,
    ) -> io::Result<UserAction<V::Symbol>> {
        loop {
            self.draw(variant, session)?;
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }

            let Event::Key(key) = event::read()? else {
                debug_log!("read_action() - Ignoring non-key event");
                continue;
            };

            match map_key(key, variant, session) {
                Ok(Some(action)) => {
                    if self.message.kind == MessageKind::Error {
                        self.message = Message::clear();
                    }
                    return Ok(action);
                }
                Ok(None) => {}
                Err(text) => {
                    debug_log!("read_action() - {}", text);
                    self.message = Message::new(text, MessageKind::Error);
                }
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
