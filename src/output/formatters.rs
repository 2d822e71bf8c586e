//! Formatting utilities for terminal output

use crate::core::{Classification, KeyIndicators, Row, TileState};
use colored::{ColoredString, Colorize};

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Classification a tile state shows, if any
#[must_use]
pub const fn tile_class(state: TileState) -> Option<Classification> {
    match state {
        TileState::Correct => Some(Classification::Correct),
        TileState::WrongLocation => Some(Classification::WrongLocation),
        TileState::Wrong => Some(Classification::Wrong),
        TileState::Empty | TileState::Active | TileState::Flipping => None,
    }
}

/// Uppercase label of a tile, `_` when empty
#[must_use]
pub fn tile_label(letter: Option<u8>) -> char {
    letter.map_or('_', |l| char::from(l).to_ascii_uppercase())
}

/// A letter cell painted with its classification
#[must_use]
pub fn paint(label: char, class: Option<Classification>) -> ColoredString {
    let cell = format!(" {label} ");
    match class {
        Some(Classification::Correct) => cell.black().on_green().bold(),
        Some(Classification::WrongLocation) => cell.black().on_yellow().bold(),
        Some(Classification::Wrong) => cell.white().on_bright_black(),
        None => cell.bold(),
    }
}

/// A guess row as coloured tiles
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.tiles()
        .iter()
        .map(|tile| paint(tile_label(tile.letter()), tile_class(tile.state())).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows with each key painted by its best classification
#[must_use]
pub fn format_keyboard(keys: &KeyIndicators) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells: Vec<String> = row
                .bytes()
                .map(|b| paint(char::from(b).to_ascii_uppercase(), keys.get(b)).to_string())
                .collect();
            format!("{}{}", " ".repeat(i * 2), cells.join(""))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;

    #[test]
    fn tile_labels() {
        assert_eq!(tile_label(Some(b'a')), 'A');
        assert_eq!(tile_label(None), '_');
    }

    #[test]
    fn only_revealed_states_have_a_class() {
        assert_eq!(tile_class(TileState::Active), None);
        assert_eq!(tile_class(TileState::Flipping), None);
        assert_eq!(
            tile_class(TileState::WrongLocation),
            Some(Classification::WrongLocation)
        );
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
        assert_eq!(format_keyboard(&KeyIndicators::new()).len(), 3);
    }

    #[test]
    fn blank_row_shows_placeholders() {
        let grid = Grid::new(1);
        assert_eq!(format_row(&grid.rows()[0]).matches('_').count(), 5);
    }
}
