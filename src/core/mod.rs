//! Core domain types for the game
//!
//! Pure data types: words, per-tile feedback, the tile grid and the keyboard
//! indicators. Nothing here knows about timing or rendering.

mod feedback;
mod grid;
mod keyboard;
mod tile;
mod word;

pub use feedback::{Classification, Feedback};
pub use grid::{Grid, Row};
pub use keyboard::KeyIndicators;
pub use tile::{Tile, TileState};
pub use word::{WORD_LENGTH, Word, WordError};
