//! TUI rendering with ratatui
//!
//! Layout for the jumble game: letter tiles, the word board, progress and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::core::char_len;
use crate::output::formatters::{letter_tiles, masked_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
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

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 JUMBLE - Find the hidden words")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Tiles
            Constraint::Min(5),    // Word board
        ])
        .split(area);

    render_tiles(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            letter_tiles(&app.tiles),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    let mut current_length = 0;

    // Words arrive sorted; group them under a header per length
    let mut words: Vec<(&String, bool)> = app
        .game
        .sub_words()
        .iter()
        .map(|(word, &found)| (word, found))
        .collect();
    words.sort_by_key(|(word, _)| char_len(word));

    for (word, found) in words {
        let length = char_len(word);
        if length != current_length {
            current_length = length;
            lines.push(Line::from(Span::styled(
                format!("{length} letters"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let span = if found {
            Span::styled(
                format!("  {}", word.to_uppercase()),
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled(
                format!("  {}", masked_word(word)),
                Style::default().fg(Color::DarkGray),
            )
        };
        lines.push(Line::from(span));
    }

    if lines.is_empty() {
        lines.push(Line::from("No words hide in these letters"));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(4),    // Remaining by length
            Constraint::Min(7),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_remaining(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.game.found_count();
    let total = app.game.total_count();
    let percent = if total == 0 {
        100
    } else {
        u16::try_from(found * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{total} words found"));

    f.render_widget(gauge, area);
}

fn render_remaining(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .remaining_by_length()
        .into_iter()
        .map(|(length, count)| ListItem::new(format!("{length} letters: {count} left")))
        .collect();

    let list =
        List::new(items).block(Block::default().title(" Remaining ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        InputMode::Finished => (
            " 🎉 Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter a word | Tab: hint | Space: shuffle | F5: reveal ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
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

    let seed_text = format!("Seed: {} letters", char_len(app.game.original()));
    let seed = Paragraph::new(seed_text).alignment(Alignment::Center);
    f.render_widget(seed, chunks[0]);

    let stats_text = format!(
        "Games: {} | Solved: {:.0}%",
        app.stats.games_played,
        if app.stats.games_played > 0 {
            app.stats.games_completed as f64 / app.stats.games_played as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words found: {}", app.stats.words_found);
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help = Paragraph::new("Esc: Quit | F2: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
