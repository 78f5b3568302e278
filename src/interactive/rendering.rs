//! TUI rendering with ratatui
//!
//! Board, keyboard hints, toasts and a status bar.

use super::app::App;
use super::toasts::MessageStyle;
use crate::core::{EvaluationStatus, GameState};
use crate::engine::{BLANK, GameSnapshot};
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let state = app.engine.state();
    let board_height = u16::try_from(state.guess_limit()).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Min(3),               // Toasts
            Constraint::Length(3),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, state, chunks[1]);
    render_keyboard(f, state, chunks[2]);
    render_toasts(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn status_style(status: EvaluationStatus) -> Style {
    match status {
        EvaluationStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        EvaluationStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        EvaluationStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        EvaluationStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_board(f: &mut Frame, state: &GameSnapshot, area: Rect) {
    let submitted = state.guesses_used();

    let lines: Vec<Line> = state
        .board()
        .iter()
        .zip(state.evaluations())
        .enumerate()
        .map(|(row, (letters, statuses))| {
            let is_active = row == state.current_guess_index() && !state.is_over();
            let spans: Vec<Span> = letters
                .iter()
                .zip(statuses)
                .enumerate()
                .flat_map(|(col, (&letter, &status))| {
                    let style = if row < submitted {
                        status_style(status)
                    } else if letter == BLANK {
                        if is_active && col == state.current_char_index() {
                            Style::default().fg(Color::Cyan)
                        } else {
                            Style::default().fg(Color::DarkGray)
                        }
                    } else {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    };
                    let shown = if letter == BLANK { '·' } else { letter };
                    [Span::styled(format!(" {shown} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, state: &GameSnapshot, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::styled(" ENTER ", Style::default().fg(Color::Cyan)));
                spans.push(Span::raw(" "));
            }
            for letter in row.chars() {
                spans.push(Span::styled(
                    format!(" {letter} "),
                    status_style(state.hint(letter)),
                ));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(Span::styled(" ⌫ ", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_toasts(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .toasts
        .iter()
        .rev()
        .map(|toast| {
            let style = match toast.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            let marker = if toast.is_persistent() { "» " } else { "  " };
            ListItem::new(format!("{marker}{}", toast.text)).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.state();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let progress_text = match state.game_state() {
        GameState::InProgress => {
            format!("Guess {}/{}", state.guess_number(), state.guess_limit())
        }
        GameState::Win => format!("Solved {}/{}", state.guesses_used(), state.guess_limit()),
        GameState::Lose => format!("X/{}", state.guess_limit()),
    };
    let progress = Paragraph::new(progress_text).alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let distribution: Vec<String> = (1..=state.guess_limit())
        .map(|n| format!("{n}:{}", app.stats.wins_in(n)))
        .collect();
    let distribution = Paragraph::new(distribution.join(" ")).alignment(Alignment::Center);
    f.render_widget(distribution, chunks[2]);

    let help_text = if state.is_over() {
        "Esc: Quit | Tab: New Game"
    } else {
        "Esc: Quit | Enter: Submit | ⌫: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
