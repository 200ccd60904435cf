//! Trivia flashcard UI rendering.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_loading_status_bar, render_status_bar,
};
use crate::games::flashcards::FlashcardGame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the flashcard screen while the deck is still downloading.
pub fn render_flashcard_loading(frame: &mut Frame, area: Rect) {
    let layout = create_game_layout(frame, area, " 📖 Trivia Time ", Color::Cyan, 10, 22);

    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Consulting the elf archives...",
            Style::default().fg(Color::Cyan),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(message, layout.content);

    render_loading_status_bar(frame, layout.status_bar, "Fetching trivia");
    render_info_panel_frame(frame, layout.info_panel);
}

/// Render the flashcard scene.
pub fn render_flashcard_scene(frame: &mut Frame, area: Rect, game: &FlashcardGame) {
    let layout = create_game_layout(frame, area, " 📖 Trivia Time ", Color::Cyan, 10, 22);

    render_card(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Render the current card as a centered bordered box.
fn render_card(frame: &mut Frame, area: Rect, game: &FlashcardGame) {
    let card = match game.current() {
        Some(card) => card,
        None => return,
    };

    let card_width = area.width.saturating_sub(6).clamp(24, 52);
    let card_height = 10u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(card_width)) / 2;
    let y = area.y + (area.height.saturating_sub(card_height)) / 2;
    let card_area = Rect::new(x, y, card_width, card_height);

    let (position, total) = game.position();
    let block = Block::default()
        .title(format!(" Card {}/{} ", position, total))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            card.topic.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if game.revealed {
        lines.push(Line::from(Span::styled(
            card.fact.clone(),
            Style::default().fg(Color::White),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "· · ·",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Space] to reveal",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}

/// Render the status bar below the card.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlashcardGame) {
    let advance_hint = if game.revealed { "Next card" } else { "Reveal" };
    render_status_bar(
        frame,
        area,
        "Did you know?",
        Color::Cyan,
        &[("[Space/Enter]", advance_hint), ("[Q]", "Quit")],
    );
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlashcardGame) {
    let inner = render_info_panel_frame(frame, area);
    let (position, total) = game.position();

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Card: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", position, total),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Read each card,",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "then step through",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "to the finale.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}
