//! The guess grid
//!
//! An ordered list of rows, one per attempt. Exactly one row at a time accepts
//! letters; once submitted it becomes read-only and the cursor moves down.

use super::tile::{Tile, TileState};
use super::word::WORD_LENGTH;

/// A guess row; a tile's position is its index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
}

impl Row {
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// Number of tiles holding a letter
    #[must_use]
    pub fn filled(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == WORD_LENGTH
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.tiles.iter().all(Tile::is_empty)
    }

    /// Letters of the filled tiles in position order
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        self.tiles.iter().filter_map(Tile::letter).collect()
    }

    /// States of all tiles in position order
    #[must_use]
    pub fn states(&self) -> [TileState; WORD_LENGTH] {
        self.tiles.map(|t| t.state())
    }

    pub(crate) fn tile_mut(&mut self, position: usize) -> &mut Tile {
        &mut self.tiles[position]
    }
}

/// All guess rows plus the cursor of the row currently taking input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    active: usize,
}

impl Grid {
    /// Create an empty grid with `attempts` rows
    #[must_use]
    pub fn new(attempts: usize) -> Self {
        Self {
            rows: vec![Row::default(); attempts],
            active: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Index of the row taking input, or `None` once every row is used
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (self.active < self.rows.len()).then_some(self.active)
    }

    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.rows.get(self.active)
    }

    /// Number of rows with no letters at all
    #[must_use]
    pub fn empty_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.is_blank()).count()
    }

    /// Put a letter in the next empty tile of the active row
    ///
    /// Returns the position filled, or `None` if the row is already full.
    pub(crate) fn push_letter(&mut self, letter: u8) -> Option<usize> {
        let row = self.rows.get_mut(self.active)?;
        let position = row.filled();
        if position >= WORD_LENGTH {
            return None;
        }
        row.tile_mut(position).fill(letter);
        Some(position)
    }

    /// Clear the last filled tile of the active row
    ///
    /// Returns the position cleared, or `None` if the row is empty.
    pub(crate) fn pop_letter(&mut self) -> Option<usize> {
        let row = self.rows.get_mut(self.active)?;
        let position = row.filled().checked_sub(1)?;
        row.tile_mut(position).clear();
        Some(position)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Move the input cursor to the next row
    pub(crate) fn advance(&mut self) {
        self.active = (self.active + 1).min(self.rows.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(grid: &mut Grid, word: &str) {
        for b in word.bytes() {
            grid.push_letter(b);
        }
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(6);
        assert_eq!(grid.rows().len(), 6);
        assert_eq!(grid.empty_rows(), 6);
        assert_eq!(grid.active_index(), Some(0));
    }

    #[test]
    fn push_fills_in_order_and_stops_when_full() {
        let mut grid = Grid::new(6);
        assert_eq!(grid.push_letter(b'c'), Some(0));
        assert_eq!(grid.push_letter(b'r'), Some(1));
        fill(&mut grid, "ane");

        let row = grid.active_row().unwrap();
        assert!(row.is_full());
        assert_eq!(row.letters(), b"crane".to_vec());
        assert_eq!(row.states(), [TileState::Active; WORD_LENGTH]);

        assert_eq!(grid.push_letter(b'x'), None);
        assert_eq!(grid.active_row().unwrap().letters(), b"crane".to_vec());
    }

    #[test]
    fn pop_removes_last_letter() {
        let mut grid = Grid::new(6);
        assert_eq!(grid.pop_letter(), None);

        fill(&mut grid, "ab");
        assert_eq!(grid.pop_letter(), Some(1));
        assert_eq!(grid.active_row().unwrap().letters(), b"a".to_vec());
        assert_eq!(grid.active_row().unwrap().tiles()[1].state(), TileState::Empty);
    }

    #[test]
    fn advance_moves_cursor_and_saturates() {
        let mut grid = Grid::new(2);
        fill(&mut grid, "crane");
        grid.advance();
        assert_eq!(grid.active_index(), Some(1));
        assert_eq!(grid.empty_rows(), 1);

        grid.advance();
        assert_eq!(grid.active_index(), None);
        assert_eq!(grid.push_letter(b'a'), None);
        assert_eq!(grid.pop_letter(), None);

        grid.advance();
        assert_eq!(grid.active_index(), None);
    }
}
