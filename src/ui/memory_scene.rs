//! Memory Match game UI rendering.

use super::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use crate::games::memory::{MemoryGame, GRID_COLS, GRID_ROWS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Each card renders 6 terminal columns wide ("[xx] " plus a margin).
const CARD_WIDTH: u16 = 6;

/// Render the Memory Match scene.
pub fn render_memory_scene(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    let layout = create_game_layout(frame, area, " 🎴 Memory Match ", Color::Green, 10, 22);

    render_board(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Render the 4x4 card grid, centered in the content area.
fn render_board(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    let grid_width = GRID_COLS as u16 * CARD_WIDTH;
    // One blank row between card rows
    let grid_height = (GRID_ROWS as u16) * 2 - 1;

    let x_offset = area.x + (area.width.saturating_sub(grid_width)) / 2;
    let y_offset = area.y + (area.height.saturating_sub(grid_height)) / 2;

    for row in 0..GRID_ROWS {
        let mut spans = Vec::new();

        for col in 0..GRID_COLS {
            let card = &game.cards[row * GRID_COLS + col];
            let is_cursor = (game.cursor_row, game.cursor_col) == (row, col);

            let (text, mut style) = if card.matched {
                (
                    format!(" {} ", card.symbol),
                    Style::default().add_modifier(Modifier::DIM),
                )
            } else if card.face_up {
                (
                    format!("[{}]", card.symbol),
                    Style::default().fg(Color::Yellow),
                )
            } else {
                ("[░░]".to_string(), Style::default().fg(Color::Gray))
            };

            if is_cursor && !game.complete {
                style = style.bg(Color::DarkGray);
            }

            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }

        let line = Paragraph::new(Line::from(spans));
        let line_area = Rect::new(x_offset, y_offset + row as u16 * 2, grid_width, 1);
        if line_area.y < area.y + area.height {
            frame.render_widget(line, line_area);
        }
    }
}

/// Render the status bar below the board.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    let (status, color) = if game.complete || game.completion_ms.is_some() {
        ("All pairs found!", Color::Green)
    } else if let Some(pending) = &game.pending {
        if pending.matched {
            ("A pair!", Color::Green)
        } else {
            ("Not a match...", Color::Red)
        }
    } else if game.first_pick.is_some() {
        ("Find its twin", Color::Yellow)
    } else {
        ("Flip two cards", Color::Green)
    };

    render_status_bar(
        frame,
        area,
        status,
        color,
        &[("[Arrows]", "Move"), ("[Space/Enter]", "Flip"), ("[Q]", "Quit")],
    );
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &MemoryGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Pairs: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.matched_pairs(), game.cards.len() / 2),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Moves: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", game.moves), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Match all eight",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "pairs to move on.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}
