//! TUI rendering with ratatui
//!
//! Draws the guess grid, alerts and the on-screen keyboard. Screen geometry is
//! computed by pure functions so mouse clicks can be mapped back to keys.

use super::animation::Timeline;
use super::app::App;
use crate::core::{Classification, KeyIndicators, Tile, TileState, WORD_LENGTH};
use crate::game::{Phase, RoundOutcome, WordValidator};
use crate::output::formatters::{KEYBOARD_ROWS, tile_class};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Duration;

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const KEY_HEIGHT: u16 = 3;
const WIDE_KEY_WIDTH: u16 = 8;

/// A clickable key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(u8),
    Enter,
    Delete,
}

impl KeyCap {
    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => KEY_WIDTH,
            Self::Enter | Self::Delete => WIDE_KEY_WIDTH,
        }
    }

    fn label(self) -> String {
        match self {
            Self::Letter(letter) => char::from(letter).to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub alerts: Rect,
    pub grid: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect, rows: usize) -> Self {
        let grid_height = u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_mul(TILE_HEIGHT)
            .saturating_add(1);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                          // Header
                Constraint::Length(2),                          // Alerts
                Constraint::Length(grid_height),                // Guess grid
                Constraint::Length(KEY_HEIGHT * 3),             // Keyboard
                Constraint::Min(1),                             // Status
            ])
            .split(area);

        Self {
            header: chunks[0],
            alerts: chunks[1],
            grid: chunks[2],
            keyboard: chunks[3],
            status: chunks[4],
        }
    }
}

/// Positions of every on-screen key inside `area`
#[must_use]
pub fn keyboard_layout(area: Rect) -> Vec<(KeyCap, Rect)> {
    let mut keys = Vec::with_capacity(28);

    for (i, letters) in KEYBOARD_ROWS.iter().enumerate() {
        let mut caps: Vec<KeyCap> = letters.bytes().map(KeyCap::Letter).collect();
        if i == KEYBOARD_ROWS.len() - 1 {
            caps.insert(0, KeyCap::Enter);
            caps.push(KeyCap::Delete);
        }

        let y = area.y + i as u16 * KEY_HEIGHT;
        if y + KEY_HEIGHT > area.bottom() {
            break;
        }

        let width: u16 = caps.iter().map(|c| c.width()).sum();
        let mut x = area.x + area.width.saturating_sub(width) / 2;
        for cap in caps {
            let rect = Rect::new(x, y, cap.width(), KEY_HEIGHT).intersection(area);
            if !rect.is_empty() {
                keys.push((cap, rect));
            }
            x = x.saturating_add(cap.width());
        }
    }

    keys
}

/// The key under a mouse position, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    keyboard_layout(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(cap, _)| cap)
}

/// Main UI rendering function
pub fn ui<V: WordValidator>(f: &mut Frame, app: &App<V>, now: Duration) {
    let layout = ScreenLayout::new(f.area(), app.game.grid().rows().len());

    render_header(f, layout.header);
    render_alerts(f, &app.timeline, layout.alerts);
    render_grid(f, app, layout.grid, now);
    render_keyboard(f, app.game.keys(), layout.keyboard);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Plain)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(header, area);
}

fn render_alerts(f: &mut Frame, timeline: &Timeline, area: Rect) {
    let lines: Vec<Line> = timeline
        .alerts()
        .take(area.height as usize)
        .map(|text| {
            Line::styled(
                format!(" {text} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_grid<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect, now: Duration) {
    let row_width = TILE_WIDTH * WORD_LENGTH as u16 + (WORD_LENGTH as u16 - 1);
    let left = area.x + area.width.saturating_sub(row_width) / 2;

    for (r, row) in app.game.grid().rows().iter().enumerate() {
        let y = area.y + 1 + r as u16 * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.bottom() {
            break;
        }
        let shake = app.timeline.shake_offset(r, now);
        let row_left = left.saturating_add_signed(shake);

        for (p, tile) in row.tiles().iter().enumerate() {
            let x = row_left + p as u16 * (TILE_WIDTH + 1);
            let lift = u16::from(app.timeline.is_lifted(r, p, now));
            let rect = Rect::new(x, y - lift, TILE_WIDTH, TILE_HEIGHT).intersection(area);
            let scale = app.timeline.tile_scale(r, p, now);
            render_tile(f, tile, rect, scale);
        }
    }
}

fn class_style(class: Classification) -> Style {
    match class {
        Classification::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Classification::WrongLocation => Style::default().fg(Color::Black).bg(Color::Yellow),
        Classification::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_tile(f: &mut Frame, tile: &Tile, area: Rect, scale: f32) {
    if area.is_empty() {
        return;
    }
    let label = tile
        .letter()
        .map(|l| char::from(l).to_ascii_uppercase().to_string())
        .unwrap_or_default();
    let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);

    let style = match tile_class(tile.state()) {
        Some(class) => class_style(class).add_modifier(Modifier::BOLD),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    };

    // Edge-on: a thin line
    if scale < 0.35 {
        let edge = Paragraph::new("━".repeat(area.width as usize))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(edge, middle);
        return;
    }

    // Half turned: no border, just the face
    if scale < 0.75 {
        f.render_widget(
            Paragraph::new(label).style(style).alignment(Alignment::Center),
            middle,
        );
        return;
    }

    let border_color = match tile.state() {
        TileState::Empty => Color::DarkGray,
        TileState::Active | TileState::Flipping => Color::Gray,
        TileState::Correct => Color::Green,
        TileState::WrongLocation => Color::Yellow,
        TileState::Wrong => Color::DarkGray,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(style);
    f.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_keyboard(f: &mut Frame, keys: &KeyIndicators, area: Rect) {
    for (cap, rect) in keyboard_layout(area) {
        let style = match cap {
            KeyCap::Letter(letter) => keys.get(letter).map_or_else(
                || Style::default().fg(Color::White),
                |class| class_style(class).add_modifier(Modifier::BOLD),
            ),
            KeyCap::Enter | KeyCap::Delete => Style::default().fg(Color::Cyan),
        };
        let key = Paragraph::new(cap.label())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(style),
            );
        f.render_widget(key, rect);
    }
}

fn render_status<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let (text, color) = match (app.game.phase(), app.game.outcome()) {
        (_, Some(RoundOutcome::Win)) => (
            format!(
                "🎉 Solved in {}/{} | Esc: Quit",
                app.game.history().len(),
                app.game.config().max_attempts
            ),
            Color::Green,
        ),
        (_, Some(_)) => ("Out of guesses | Esc: Quit".to_string(), Color::Red),
        (Phase::Revealing(_), None) => ("Revealing...".to_string(), Color::DarkGray),
        _ => (
            "Type or click letters | Enter: Submit | Backspace: Delete | Esc: Quit".to_string(),
            Color::DarkGray,
        ),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_has_every_letter_and_both_actions() {
        let keys = keyboard_layout(Rect::new(0, 0, 80, 9));
        assert_eq!(keys.len(), 28);
        assert!(keys.iter().any(|(c, _)| *c == KeyCap::Enter));
        assert!(keys.iter().any(|(c, _)| *c == KeyCap::Delete));
        for letter in b'a'..=b'z' {
            assert!(keys.iter().any(|(c, _)| *c == KeyCap::Letter(letter)));
        }
    }

    #[test]
    fn keys_do_not_overlap() {
        let keys = keyboard_layout(Rect::new(0, 0, 80, 9));
        for (i, (_, a)) in keys.iter().enumerate() {
            for (_, b) in &keys[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn clicks_map_to_keys() {
        let area = Rect::new(0, 20, 80, 9);
        for (cap, rect) in keyboard_layout(area) {
            let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(key_at(area, x, y), Some(cap));
        }
        assert_eq!(key_at(area, 0, 0), None);
    }

    #[test]
    fn short_area_drops_rows() {
        let keys = keyboard_layout(Rect::new(0, 0, 80, 4));
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn layout_survives_huge_row_counts() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = ScreenLayout::new(area, 25_000);
        assert!(layout.grid.bottom() <= area.bottom());
        assert!(layout.keyboard.bottom() <= area.bottom());
    }

    #[test]
    fn layout_stacks_sections() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 40), 6);
        assert_eq!(layout.grid.height, 19);
        assert!(layout.header.bottom() <= layout.alerts.y);
        assert!(layout.grid.bottom() <= layout.keyboard.y);
        assert_eq!(layout.keyboard.height, 9);
    }
}
