//! TUI application state and logic

use crate::companion::{Companion, CompanionRequest, WordContext};
use crate::core::{Outcome, SubmitError, Word};
use crate::session::GameSession;
use crate::words::{Category, WordSource};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What the keyboard is currently driving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Picking a category to play
    CategorySelect,
    /// Typing a guess into the current row
    Typing,
    /// Composing a question for the Merlion
    Chat,
    /// Round decided; post-round choices
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
    Merlion,
}

/// Application state
pub struct App {
    pub session: GameSession,
    source: Box<dyn WordSource>,
    companion: Box<dyn Companion>,
    pub category: Option<Category>,
    pub pending: String,
    pub chat_input: String,
    pub messages: Vec<Message>,
    pub hint_shown: bool,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        session: GameSession,
        source: Box<dyn WordSource>,
        companion: Box<dyn Companion>,
    ) -> Self {
        Self {
            session,
            source,
            companion,
            category: None,
            pending: String::new(),
            chat_input: String::new(),
            messages: Vec::new(),
            hint_shown: false,
            input_mode: InputMode::CategorySelect,
            should_quit: false,
        }
    }

    /// Start a round in the category and switch to typing
    pub fn start_round(&mut self, category: Category) {
        self.category = Some(category);
        self.pending.clear();
        self.chat_input.clear();
        self.messages.clear();
        self.hint_shown = false;

        match self.session.begin(self.source.as_ref(), category) {
            Ok(active) => {
                let len = active.entry.word.len();
                self.input_mode = InputMode::Typing;
                self.add_message(
                    &format!("{} {}: the word has {len} letters", category.icon(), category.label()),
                    MessageStyle::Info,
                );
                self.add_message("Type letters to guess. TAB asks the Merlion.", MessageStyle::Info);
            }
            Err(err) => {
                self.input_mode = InputMode::CategorySelect;
                self.add_message(&format!("{err}"), MessageStyle::Error);
            }
        }
    }

    fn word_len(&self) -> usize {
        self.session.active().map_or(0, |a| a.round.word_len())
    }

    fn ctx(&self) -> Option<WordContext> {
        self.session.active().map(|active| WordContext {
            word: active.entry.word.text().to_string(),
            category: active.entry.category,
            hint: active.entry.hint.clone(),
        })
    }

    pub fn push_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() || self.pending.len() >= self.word_len() {
            return;
        }
        self.pending.push(c.to_ascii_lowercase());

        // The row filled up: submit through the same path as Enter
        if self.pending.len() == self.word_len() {
            self.submit_current();
        }
    }

    pub fn backspace(&mut self) {
        self.pending.pop();
    }

    /// The single submission path for both Enter and a just-filled row
    pub fn submit_current(&mut self) {
        let guess = match Word::new(&self.pending) {
            Ok(word) => word,
            Err(err) => {
                self.add_message(&format!("{err}"), MessageStyle::Error);
                return;
            }
        };

        match self.session.submit(&guess) {
            Ok(submission) => {
                self.pending.clear();
                if submission.outcome.is_terminal() {
                    self.finish_round(submission.outcome == Outcome::Won);
                }
            }
            Err(err @ SubmitError::LengthMismatch { .. }) => {
                self.add_message(&format!("{err}"), MessageStyle::Error);
            }
            Err(SubmitError::RoundTerminated) => {
                self.input_mode = InputMode::RoundOver;
            }
        }
    }

    fn finish_round(&mut self, won: bool) {
        self.input_mode = InputMode::RoundOver;

        let attempts = self.session.active().map_or(0, |a| a.round.attempt());
        let (word, emoji) = self.session.active().map_or_else(
            || (String::new(), String::new()),
            |a| (a.entry.word.text().to_uppercase(), a.entry.emoji.clone()),
        );

        if won {
            self.add_message(
                &format!("{emoji} Shiok ah! {word} in {attempts} tries"),
                MessageStyle::Success,
            );
            let streak = self.session.streak();
            if streak > 1 {
                self.add_message(&format!("🔥 {streak} streak!"), MessageStyle::Success);
            }
        } else {
            self.add_message(
                &format!("😢 Jialat! The word was {word}"),
                MessageStyle::Error,
            );
        }

        for warning in self.session.take_warnings() {
            self.add_message(&warning, MessageStyle::Error);
        }

        if let Some(ctx) = self.ctx() {
            let request = CompanionRequest::Reaction {
                won,
                guess_number: attempts,
            };
            if let Ok(reply) = self.companion.respond(&ctx, &request) {
                self.add_message(&reply, MessageStyle::Merlion);
            }
        }

        self.add_message(
            "n: play again | m: menu | f: fun fact | e: learn more | q: quit",
            MessageStyle::Info,
        );
    }

    /// Ask the Merlion, optionally with a typed question
    pub fn ask_merlion(&mut self, question: Option<String>) {
        let Some(ctx) = self.ctx() else { return };
        let request = CompanionRequest::Hint {
            user_message: question,
        };
        match self.companion.respond(&ctx, &request) {
            Ok(reply) => {
                self.hint_shown = true;
                self.add_message(&reply, MessageStyle::Merlion);
            }
            Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
        }
    }

    /// Post-round extras from the companion
    pub fn request_extra(&mut self, request: &CompanionRequest) {
        let Some(ctx) = self.ctx() else { return };
        match self.companion.respond(&ctx, request) {
            Ok(reply) => self.add_message(&reply, MessageStyle::Merlion),
            Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
        }
    }

    pub fn send_chat(&mut self) {
        let question = self.chat_input.trim().to_string();
        self.chat_input.clear();
        self.input_mode = InputMode::Typing;
        if !question.is_empty() {
            self.add_message(&format!("You: {question}"), MessageStyle::Info);
            self.ask_merlion(Some(question));
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::CategorySelect => handle_category_select(&mut app, key.code),
                    InputMode::Typing => handle_typing(&mut app, key.code),
                    InputMode::Chat => handle_chat(&mut app, key.code),
                    InputMode::RoundOver => handle_round_over(&mut app, key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_category_select(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.start_round(Category::Food),
        KeyCode::Char('2') => app.start_round(Category::Places),
        KeyCode::Char('3') => app.start_round(Category::Singlish),
        KeyCode::Char('4') => app.start_round(Category::All),
        _ => {}
    }
}

fn handle_typing(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            // Abandon the round, back to the menu
            app.input_mode = InputMode::CategorySelect;
            app.pending.clear();
        }
        KeyCode::Tab => app.ask_merlion(None),
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Chat;
        }
        KeyCode::Char(c) => app.push_letter(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => {
            if !app.pending.is_empty() {
                app.submit_current();
            }
        }
        _ => {}
    }
}

fn handle_chat(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.chat_input.clear();
            app.input_mode = InputMode::Typing;
        }
        KeyCode::Enter => app.send_chat(),
        KeyCode::Char(c) => app.chat_input.push(c),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        _ => {}
    }
}

fn handle_round_over(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('n') | KeyCode::Enter => {
            if let Some(category) = app.category {
                app.start_round(category);
            }
        }
        KeyCode::Char('m') | KeyCode::Esc => {
            app.input_mode = InputMode::CategorySelect;
        }
        KeyCode::Char('f') => app.request_extra(&CompanionRequest::FunFact),
        KeyCode::Char('e') => app.request_extra(&CompanionRequest::Explain),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companion::Merlion;
    use crate::core::Word;
    use crate::words::{CatalogSource, PickMode, WordEntry};

    fn test_app(secret: &str) -> App {
        let source = CatalogSource::from_entries(
            vec![WordEntry {
                word: Word::new(secret).unwrap(),
                hint: "test hint".to_string(),
                emoji: "🎲".to_string(),
                category: Category::Food,
            }],
            PickMode::Daily,
        );
        App::new(
            GameSession::new(None, None),
            Box::new(source),
            Box::new(Merlion),
        )
    }

    #[test]
    fn starts_in_category_select() {
        let app = test_app("laksa");
        assert_eq!(app.input_mode, InputMode::CategorySelect);
        assert!(app.session.active().is_none());
    }

    #[test]
    fn starting_a_round_switches_to_typing() {
        let mut app = test_app("laksa");
        app.start_round(Category::Food);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.session.active().is_some());
    }

    #[test]
    fn filling_the_row_auto_submits() {
        let mut app = test_app("laksa");
        app.start_round(Category::Food);
        for c in "laksa".chars() {
            app.push_letter(c);
        }
        // Submitted through the single path and won
        assert!(app.pending.is_empty());
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(
            app.session.active().unwrap().round.outcome(),
            Outcome::Won
        );
    }

    #[test]
    fn non_letters_are_ignored_while_typing() {
        let mut app = test_app("laksa");
        app.start_round(Category::Food);
        app.push_letter('1');
        app.push_letter('!');
        assert!(app.pending.is_empty());
    }

    #[test]
    fn backspace_edits_the_pending_row() {
        let mut app = test_app("laksa");
        app.start_round(Category::Food);
        app.push_letter('l');
        app.push_letter('a');
        app.backspace();
        assert_eq!(app.pending, "l");
    }

    #[test]
    fn merlion_hint_is_added_as_message() {
        let mut app = test_app("laksa");
        app.start_round(Category::Food);
        let before = app.messages.len();
        app.ask_merlion(None);
        assert!(app.messages.len() > before);
        assert!(app.hint_shown);
        // The hint never contains the word itself
        let last = app.messages.last().unwrap();
        assert!(!last.text.to_lowercase().contains("laksa"));
    }
}
