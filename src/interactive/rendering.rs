//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, and the Merlion panel.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterState, TileState};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::words::Category;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.input_mode == InputMode::CategorySelect {
        render_category_menu(f, app, chunks[1]);
    } else {
        // Main content area - split horizontally
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Board and keyboard
                Constraint::Percentage(45), // Info and messages
            ])
            .split(chunks[1]);

        render_board_panel(f, app, main_chunks[0]);
        render_info_panel(f, app, main_chunks[1]);
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🦁 GUESS SG - Guess Singapore in 6 Tries")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_category_menu(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Playing as {}", app.session.display_name()),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from("  Pick a category:"),
        Line::from(""),
    ];

    for (i, category) in Category::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", i + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{} {:<12}", category.icon(), category.label())),
            Span::styled(
                category.subtitle(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let stats = app.session.stats();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  📊 Played {} | Won {}% | Streak {} | Max {}",
            stats.played,
            stats.win_percent(),
            stats.streak,
            stats.max_streak
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board grid
            Constraint::Length(5), // On-screen keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn tile_style(state: TileState) -> Style {
    match state {
        TileState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TileState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        TileState::Filled => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        TileState::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];

    if let Some(active) = app.session.active() {
        for row in active.round.board(&app.pending) {
            let mut spans = vec![Span::raw("  ")];
            for (letter, state) in row {
                let cell = if state == TileState::Empty {
                    " · ".to_string()
                } else {
                    format!(" {} ", letter.to_ascii_uppercase())
                };
                spans.push(Span::styled(cell, tile_style(state)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(status: Option<LetterState>) -> Style {
    match status {
        Some(LetterState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(3);

    if let Some(active) = app.session.active() {
        let keyboard = active.round.keyboard();
        for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
            let mut spans = vec![Span::raw(" ".repeat(2 + i))];
            for letter in row.bytes() {
                spans.push(Span::styled(
                    format!("{}", (letter as char).to_ascii_uppercase()),
                    key_style(keyboard.status_of(letter)),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Round info
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_round_info(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round_info(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(active) = app.session.active() {
        let category = active.entry.category;
        lines.push(Line::from(format!(
            "{} {}, {} letters",
            category.icon(),
            category.label(),
            active.round.word_len()
        )));
        lines.push(Line::from(format!(
            "Attempt {} of {}",
            active.round.attempt().min(active.round.max_attempts()),
            active.round.max_attempts()
        )));

        let streak = app.session.streak();
        if streak > 0 {
            lines.push(Line::from(Span::styled(
                format!("🔥 {streak} streak"),
                Style::default().fg(Color::Yellow),
            )));
        }
        if app.hint_shown {
            lines.push(Line::from(Span::styled(
                format!("💡 {}", active.entry.hint),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let info = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(info, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let (prefix, style) = match msg.style {
                MessageStyle::Info => ("", Style::default().fg(Color::White)),
                MessageStyle::Success => ("", Style::default().fg(Color::Green)),
                MessageStyle::Error => ("", Style::default().fg(Color::Red)),
                MessageStyle::Merlion => ("🦁 ", Style::default().fg(Color::Cyan)),
            };
            ListItem::new(format!("{prefix}{}", msg.text)).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::CategorySelect => (
            " Press 1-4 to pick a category | q to quit ",
            String::new(),
            Color::Cyan,
        ),
        InputMode::Typing => (
            " Type your guess | TAB: hint | /: ask Merlion | ESC: menu ",
            app.pending.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::Chat => (
            " Ask the Merlion | ENTER: send | ESC: cancel ",
            app.chat_input.clone(),
            Color::Cyan,
        ),
        InputMode::RoundOver => (
            " Round over | n: play again | m: menu | f/e: fun fact, learn more | q: quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.session.display_name()))
        .alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Played: {} | Win rate: {}%",
        stats.played,
        stats.win_percent()
    );
    let stats_widget = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[1]);

    let streak = Paragraph::new(format!("Streak: {} (max {})", stats.streak, stats.max_streak))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(streak, chunks[2]);
}
