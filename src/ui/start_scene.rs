//! Title screen: snowfall, the game's name, and a prompt to start.

use crate::build_info;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Render the title screen.
pub fn render_start_scene(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    render_snowfall(frame, area);

    let lines = vec![
        Line::from(Span::styled(
            "🎅  S A N T A   D A S H  🎄",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "STEADY & RETRO",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Jump the chimneys, dodge the snowmen,",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "and grab 100 presents' worth of gifts.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Three rounds stand between you and the finale.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(" Play Now   ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let height = lines.len() as u16;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(area.x, y, area.width, height.min(area.height)),
    );

    // Version tag in the bottom-right corner
    let version = format!("v{} ({})", env!("CARGO_PKG_VERSION"), build_info::BUILD_COMMIT);
    let tag_width = version.len() as u16;
    if area.height > 1 && area.width > tag_width + 1 {
        let tag = Paragraph::new(Line::from(Span::styled(
            version,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(
            tag,
            Rect::new(
                area.x + area.width - tag_width - 1,
                area.y + area.height - 1,
                tag_width,
                1,
            ),
        );
    }
}

/// Sparse snowfall drifting down the title screen.
fn render_snowfall(frame: &mut Frame, area: Rect) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let drift = millis / 200;

    for i in 0..30u64 {
        let col = (i * 37 + i * i) % area.width as u64;
        let row = (i * 13 + drift + i * 7) % area.height as u64;
        let flake = if i % 3 == 0 { '❄' } else { '·' };

        let cell = Rect::new(area.x + col as u16, area.y + row as u16, 1, 1);
        let widget = Paragraph::new(Line::from(Span::styled(
            flake.to_string(),
            Style::default().fg(Color::Rgb(148, 163, 184)),
        )));
        frame.render_widget(widget, cell);
    }
}
