//! TUI rendering with ratatui
//!
//! Widgets for the duel screen: both guess histories, the opponent's
//! status, the message log, and the mode-aware input line.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::GuessRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
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

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Guess histories
            Constraint::Percentage(45), // Opponent status + messages
        ])
        .split(chunks[1]);

    render_histories(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚔ JOTTO DUEL - shared letters, hidden words")
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

fn render_histories(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_guess_list(
        f,
        " Your Guesses (at my word) ",
        app.session.human_guesses(),
        Color::Yellow,
        chunks[0],
    );
    render_guess_list(
        f,
        " My Guesses (at yours) ",
        app.session.opponent_guesses(),
        Color::Magenta,
        chunks[1],
    );
}

fn render_guess_list(f: &mut Frame, title: &str, records: &[GuessRecord], color: Color, area: Rect) {
    // Newest first, like the scoreboard of the original game
    let items: Vec<ListItem> = records
        .iter()
        .rev()
        .enumerate()
        .map(|(i, record)| {
            let turn = records.len() - i;
            let line = Line::from(vec![
                Span::styled(format!("{turn:>2}. "), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    record.word.text().to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{}/5", record.score),
                    if record.score.is_winning() {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Candidate gauge
            Constraint::Length(4), // Opponent's current move
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_candidate_gauge(f, app, chunks[0]);
    render_opponent_move(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_candidate_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary_size().max(1);
    let remaining = app.session.candidates_remaining();
    let eliminated_pct = ((total - remaining) as f64 / total as f64 * 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" My Deduction Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct.min(100))
        .label(format!("{remaining}/{total} words still possible"));

    f.render_widget(gauge, area);
}

fn render_opponent_move(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.is_thinking() {
        vec![Line::from(Span::styled(
            "🤔 thinking...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if let Some(ref guess) = app.pending_guess {
        vec![
            Line::from(vec![
                Span::raw("My guess: "),
                Span::styled(
                    guess.text().to_string(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "How many of its letters are in your secret? Press 0-5.",
                Style::default().fg(Color::White),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "Waiting for your turn...",
            Style::default().fg(Color::DarkGray),
        ))]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Opponent ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new duel or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Anomaly => (
            " Scores don't add up | Press 'n' to restart or 'q' to quit ",
            "",
            Color::Red,
        ),
        InputMode::HumanGuess => (
            " Your guess (5 distinct letters, Enter to submit) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::OpponentScore => (
            " Score my guess: press 0-5 ",
            "",
            Color::Magenta,
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::HumanGuess => "Turn: yours",
        InputMode::OpponentScore => "Turn: mine",
        InputMode::GameOver => "Game over",
        InputMode::Anomaly => "Anomaly",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Duels: {} | Won: {}",
        app.stats.duels_played, app.stats.duels_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.session.candidates_remaining());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::HumanGuess => "Esc: Quit | Enter: Submit",
        InputMode::OpponentScore => "Esc: Quit | 0-5: Score",
        InputMode::GameOver | InputMode::Anomaly => "q: Quit | n: New Duel",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
