//! Closing message UI: a letter typed onto a dark screen, old-terminal
//! style, with a heart at the end.

use crate::games::message::{MessageGame, MessagePhase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HEADER_TEXT: &str = "MISSION ACCOMPLISHED";
const CLOSING_COLOR: Color = Color::LightRed;

/// Render the closing message scene.
pub fn render_message_scene(frame: &mut Frame, area: Rect, game: &MessageGame) {
    frame.render_widget(Clear, area);

    let column_width = area.width.min(64);
    let column_x = area.x + (area.width.saturating_sub(column_width)) / 2;

    let total_height: u16 = 18;
    let top = area.y + (area.height.saturating_sub(total_height)) / 2;
    let bottom = area.y + area.height;

    // Header
    let header = Paragraph::new(Line::from(Span::styled(
        HEADER_TEXT,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    render_clipped(frame, header, Rect::new(column_x, top, column_width, 1), bottom);

    // Letter panel
    let panel_area = Rect::new(column_x, top + 2, column_width, 9);
    if panel_area.y + panel_area.height <= bottom {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(70, 70, 80)));
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);

        // Body with a trailing block cursor while it types
        let mut body_spans = vec![Span::styled(
            game.primary_visible(),
            Style::default().fg(Color::White),
        )];
        if game.phase == MessagePhase::TypingPrimary && game.cursor_on() {
            body_spans.push(Span::styled("█", Style::default().fg(Color::White)));
        }
        let body = Paragraph::new(Line::from(body_spans)).wrap(Wrap { trim: true });
        let body_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        frame.render_widget(body, body_area);

        // Closing signature, right-aligned on the panel's last line
        let mut closing_spans = vec![Span::styled(
            game.secondary_visible(),
            Style::default().fg(CLOSING_COLOR).add_modifier(Modifier::ITALIC),
        )];
        if game.phase == MessagePhase::TypingSecondary && game.cursor_on() {
            closing_spans.push(Span::styled("█", Style::default().fg(CLOSING_COLOR)));
        }
        let closing = Paragraph::new(Line::from(closing_spans)).alignment(Alignment::Right);
        let closing_area = Rect {
            y: inner.y + inner.height.saturating_sub(1),
            height: 1,
            ..inner
        };
        frame.render_widget(closing, closing_area);
    }

    // Heart and trimmings once the letter is done
    if game.heart_visible {
        let heart = Paragraph::new(vec![
            Line::from(Span::styled(
                "❤",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "❄   ✨   ❄",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        render_clipped(
            frame,
            heart,
            Rect::new(column_x, top + 12, column_width, 3),
            bottom,
        );
    }

    // Footer hint
    let hint = if game.phase == MessagePhase::Done {
        "[R] Play Again   [Q] Exit"
    } else {
        "[Any key] Skip"
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    render_clipped(
        frame,
        footer,
        Rect::new(column_x, top + 16, column_width, 1),
        bottom,
    );
}

/// Render a widget only when it fits above the given bottom edge.
fn render_clipped(frame: &mut Frame, widget: Paragraph, widget_area: Rect, bottom: u16) {
    if widget_area.y + widget_area.height <= bottom {
        frame.render_widget(widget, widget_area);
    }
}
