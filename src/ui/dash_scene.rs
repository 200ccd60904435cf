//! Santa Dash game UI rendering.
//!
//! Uses a cell buffer for per-character color control: the night sky,
//! parallax layers, entities, and the runner are drawn into a 2D grid
//! and then stamped row-by-row as Paragraph widgets.

use super::game_common::{
    create_game_layout, render_forfeit_status_bar, render_game_over_overlay,
    render_info_panel_frame, render_status_bar, GameResultType,
};
use crate::games::dash::{DashGame, RunOutcome, GROUND_Y, PLAYER_X, WORLD_HEIGHT, WORLD_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cell grid the 800x400 world is projected onto.
const RENDER_WIDTH: u16 = 100;
const RENDER_HEIGHT: u16 = 25;

// ── Palette ─────────────────────────────────────────────────────────
const SKY_HIGH: Color = Color::Rgb(10, 10, 42);
const SKY_LOW: Color = Color::Rgb(30, 27, 75);
const MOON: Color = Color::Rgb(254, 243, 199);
const MOUNTAIN: Color = Color::Rgb(51, 65, 85);
const TREE: Color = Color::Rgb(6, 78, 59);
const SNOW_SURFACE: Color = Color::Rgb(248, 250, 252);
const SNOW_EDGE: Color = Color::Rgb(203, 213, 225);
const SUIT: Color = Color::Rgb(220, 38, 38);
const BEARD: Color = Color::Rgb(241, 245, 249);
const BOOTS: Color = Color::Rgb(40, 40, 48);

// ── Runner sprite (8 cells wide) ────────────────────────────────────
const SANTA_BODY: [(&str, Color); 3] = [
    ("  ▄█▄   ", SUIT),
    ("  ▒█▒   ", BEARD),
    (" ▐███▌  ", SUIT),
];
const SANTA_FEET: [&str; 2] = ["  ▙ ▟   ", "  ▟ ▙   "];
const SANTA_CROUCH_BODY: (&str, Color) = (" ▄███▄  ", SUIT);

/// Render the Santa Dash scene.
pub fn render_dash_scene(frame: &mut Frame, area: Rect, game: &DashGame) {
    // Outcome overlay takes priority
    if game.outcome.is_some() {
        render_dash_outcome(frame, area, game);
        return;
    }

    let layout = create_game_layout(frame, area, " 🎅 Santa Dash ", Color::Red, 15, 22);

    render_play_field(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Render the main play field: backdrop, entities, runner, particles, HUD.
fn render_play_field(frame: &mut Frame, area: Rect, game: &DashGame) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let render_height = area.height.min(RENDER_HEIGHT);
    let render_width = area.width.min(RENDER_WIDTH);

    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); render_width as usize]; render_height as usize];

    // Cells per world pixel
    let x_scale = render_width as f64 / WORLD_WIDTH;
    let y_scale = render_height as f64 / WORLD_HEIGHT;
    let ground_row = ((GROUND_Y * y_scale).round() as usize).min(render_height as usize - 1);

    // Hit shake nudges the foreground sideways while it decays
    let shake_dx: i32 = if game.screen_shake > 1.0 {
        let magnitude = if game.screen_shake > 8.0 { 2 } else { 1 };
        if game.frame_counter % 2 == 0 {
            magnitude
        } else {
            -magnitude
        }
    } else {
        0
    };

    // ── Night sky ─────────────────────────────────────────────────────
    for (row_idx, row) in buffer.iter_mut().enumerate().take(ground_row) {
        let bg = if row_idx < ground_row / 2 { SKY_HIGH } else { SKY_LOW };
        for cell in row.iter_mut() {
            cell.bg = bg;
        }
    }

    // ── Stars, drifting with the slowest layer ────────────────────────
    for i in 0..30u64 {
        let px = (i as f64 * 123.0 - game.offset_far).rem_euclid(WORLD_WIDTH);
        let py = (i as f64 * 77.0) % (GROUND_Y - 50.0);
        let col = (px * x_scale) as usize;
        let row = (py * y_scale) as usize;
        if row < ground_row && col < render_width as usize {
            buffer[row][col].ch = '·';
            buffer[row][col].fg = Color::White;
        }
    }

    // ── Moon ──────────────────────────────────────────────────────────
    for row in 0..ground_row {
        for col in 0..render_width as usize {
            let px = (col as f64 + 0.5) / x_scale;
            let py = (row as f64 + 0.5) / y_scale;
            let dx = px - 700.0;
            let dy = py - 60.0;
            if dx * dx + dy * dy <= 30.0 * 30.0 {
                buffer[row][col] = Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg: MOON,
                };
            }
        }
    }

    // ── Mountain silhouettes (mid layer) ──────────────────────────────
    for col in 0..render_width as usize {
        let px = col as f64 / x_scale;
        let phase = (px + game.offset_mid).rem_euclid(300.0) / 300.0;
        let peak_px = 120.0 * (1.0 - (2.0 * phase - 1.0).abs());
        let peak_rows = (peak_px * y_scale).round() as usize;
        for row in ground_row.saturating_sub(peak_rows)..ground_row {
            buffer[row][col] = Cell {
                ch: ' ',
                fg: Color::Reset,
                bg: MOUNTAIN,
            };
        }
    }

    // ── Pine trees (near layer) ───────────────────────────────────────
    for col in 0..render_width as usize {
        let px = col as f64 / x_scale;
        let phase = (px + game.offset_near).rem_euclid(150.0);
        if phase < 60.0 {
            let peak_px = 60.0 * (1.0 - (2.0 * (phase / 60.0) - 1.0).abs());
            let peak_rows = (peak_px * y_scale).round() as usize;
            for row in ground_row.saturating_sub(peak_rows)..ground_row {
                buffer[row][col] = Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg: TREE,
                };
            }
        }
    }

    // ── Snowfield ─────────────────────────────────────────────────────
    for (row_idx, row) in buffer
        .iter_mut()
        .enumerate()
        .take(render_height as usize)
        .skip(ground_row)
    {
        for cell in row.iter_mut() {
            *cell = if row_idx == ground_row {
                Cell {
                    ch: '▀',
                    fg: SNOW_SURFACE,
                    bg: SNOW_EDGE,
                }
            } else {
                Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg: SNOW_SURFACE,
                }
            };
        }
    }

    // ── Ambient snowfall ──────────────────────────────────────────────
    for i in 0..40u64 {
        let px = ((i * 55 + game.frame_counter * 2) % WORLD_WIDTH as u64) as f64;
        let py = ((i * 99 + game.frame_counter * 3) % WORLD_HEIGHT as u64) as f64;
        let col = (px * x_scale) as usize;
        let row = (py * y_scale) as usize;
        if row < render_height as usize && col < render_width as usize && buffer[row][col].ch == ' '
        {
            buffer[row][col].ch = '·';
            buffer[row][col].fg = Color::White;
        }
    }

    // ── Entities ──────────────────────────────────────────────────────
    for entity in &game.entities {
        let ent_col = (entity.x * x_scale).round() as i32 + shake_dx;
        let ent_row = (entity.y * y_scale).round() as i32;
        let ent_w = ((entity.width * x_scale).round() as i32).max(1);
        let ent_h = ((entity.height * y_scale).round() as i32).max(1);

        for dy in 0..ent_h {
            let row = ent_row + dy;
            if row < 0 || row >= render_height as i32 {
                continue;
            }
            for dx in 0..ent_w {
                let col = ent_col + dx;
                if col >= 0 && col < render_width as i32 {
                    buffer[row as usize][col as usize] = Cell {
                        ch: entity.glyph,
                        fg: entity.color,
                        bg: buffer[row as usize][col as usize].bg,
                    };
                }
            }
        }
    }

    // ── Santa (flickers through the invulnerability window) ───────────
    if game.invulnerability % 10 < 5 {
        let santa_col = (PLAYER_X * x_scale).round() as i32 + shake_dx;
        let santa_row = (game.player_y * y_scale).round() as i32;
        let feet = SANTA_FEET[((game.frame_counter / 6) % 2) as usize];

        let rows: Vec<(i32, &str, Color)> = if game.crouching {
            vec![
                (santa_row + 2, SANTA_CROUCH_BODY.0, SANTA_CROUCH_BODY.1),
                (santa_row + 3, feet, BOOTS),
            ]
        } else {
            vec![
                (santa_row, SANTA_BODY[0].0, SANTA_BODY[0].1),
                (santa_row + 1, SANTA_BODY[1].0, SANTA_BODY[1].1),
                (santa_row + 2, SANTA_BODY[2].0, SANTA_BODY[2].1),
                (santa_row + 3, feet, BOOTS),
            ]
        };

        for (row, sprite_row, color) in rows {
            if row < 0 || row >= render_height as i32 {
                continue;
            }
            for (dx, ch) in sprite_row.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let col = santa_col + dx as i32;
                if col >= 0 && col < render_width as i32 {
                    buffer[row as usize][col as usize] = Cell {
                        ch,
                        fg: color,
                        bg: buffer[row as usize][col as usize].bg,
                    };
                }
            }
        }
    }

    // ── Burst particles ───────────────────────────────────────────────
    for particle in &game.particles {
        let col = (particle.x * x_scale).round() as i32 + shake_dx;
        let row = (particle.y * y_scale).round() as i32;
        if row < 0 || row >= render_height as i32 {
            continue;
        }

        // Fading particles dim instead of going translucent
        let fg = if particle.life < 0.4 {
            match particle.color {
                Color::Rgb(r, g, b) => Color::Rgb(r / 2, g / 2, b / 2),
                other => other,
            }
        } else {
            particle.color
        };

        if let Some(text) = &particle.text {
            for (dx, ch) in text.chars().enumerate() {
                let col = col + dx as i32;
                if col >= 0 && col < render_width as i32 {
                    buffer[row as usize][col as usize] = Cell {
                        ch,
                        fg,
                        bg: buffer[row as usize][col as usize].bg,
                    };
                }
            }
        } else if col >= 0 && col < render_width as i32 {
            let ch = if particle.size > 4.0 { '•' } else { '·' };
            buffer[row as usize][col as usize] = Cell {
                ch,
                fg,
                bg: buffer[row as usize][col as usize].bg,
            };
        }
    }

    // ── HUD ───────────────────────────────────────────────────────────
    let hud = format!("PRESENTS {:>3}/{}", game.score, game.config.win_score);
    stamp_text(&mut buffer, 0, 1, &hud, Color::White);

    let hearts: String = (0..game.config.starting_lives)
        .map(|i| if i < game.lives { '♥' } else { '♡' })
        .collect();
    stamp_text(&mut buffer, 1, 1, &hearts, Color::Red);

    let speed = format!("{:>3.0} km/h", game.world_speed * 10.0);
    let speed_col = (render_width as usize).saturating_sub(speed.len() + 1);
    stamp_text(&mut buffer, 0, speed_col, &speed, Color::DarkGray);

    // ── Render buffer to terminal ─────────────────────────────────────
    let x_offset = area.x;
    let y_offset = area.y;

    for (row_idx, row_data) in buffer.iter().enumerate().take(render_height as usize) {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(x_offset, y_offset + row_idx as u16, render_width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// Write a short string into the buffer at (row, col), skipping overflow.
fn stamp_text(buffer: &mut [Vec<Cell>], row: usize, col: usize, text: &str, fg: Color) {
    if row >= buffer.len() {
        return;
    }
    let width = buffer[row].len();
    for (i, ch) in text.chars().enumerate() {
        let col = col + i;
        if col < width {
            buffer[row][col].ch = ch;
            buffer[row][col].fg = fg;
        }
    }
}

/// Render the status bar below the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &DashGame) {
    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    let duck_hint = if game.crouching { "Stand" } else { "Duck" };
    render_status_bar(
        frame,
        area,
        "Deliver the presents!",
        Color::Red,
        &[("[Space/Up]", "Jump"), ("[Down]", duck_hint), ("[Esc]", "Forfeit")],
    );
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &DashGame) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Presents: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.score, game.config.win_score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "♥".repeat(game.lives as usize),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0} km/h", game.world_speed * 10.0),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for spec in &game.config.collectibles {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", spec.glyph), Style::default().fg(spec.color)),
            Span::styled(spec.label, Style::default().fg(Color::DarkGray)),
        ]));
    }
    for spec in &game.config.obstacles {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", spec.glyph), Style::default().fg(spec.color)),
            Span::styled(spec.label, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the end-of-run overlay.
fn render_dash_outcome(frame: &mut Frame, area: Rect, game: &DashGame) {
    let (result_type, title, message, detail, footer) = match game.outcome {
        Some(RunOutcome::Win) => (
            GameResultType::Win,
            ":: YOU SAVED CHRISTMAS! ::",
            format!("All {} presents delivered on time.", game.score),
            "The elves have more games lined up...".to_string(),
            "Next challenge incoming...",
        ),
        Some(RunOutcome::Loss(score)) => {
            let message = if game.lives > 0 {
                "You called off the run.".to_string()
            } else {
                "Santa got frosted! The storm wins this round.".to_string()
            };
            (
                GameResultType::Loss,
                "RUN OVER",
                message,
                format!("Final haul: {} presents.", score),
                "[R] Try Again  [Q] Quit",
            )
        }
        None => return,
    };

    render_game_over_overlay(frame, area, result_type, title, &message, &detail, footer);
}
