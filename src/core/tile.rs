//! Grid tiles and their state

use super::feedback::Classification;

/// Display state of a tile
///
/// Within one submission a tile only moves forward:
/// `Active -> Flipping -> Correct | WrongLocation | Wrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    #[default]
    Empty,
    Active,
    Flipping,
    Correct,
    WrongLocation,
    Wrong,
}

impl TileState {
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Correct | Self::WrongLocation | Self::Wrong)
    }

    /// Whether moving from `self` to `next` is allowed
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Empty, Self::Active) | (Self::Active, Self::Empty | Self::Flipping) => true,
            (Self::Flipping, next) => next.is_revealed(),
            _ => false,
        }
    }
}

impl From<Classification> for TileState {
    fn from(class: Classification) -> Self {
        match class {
            Classification::Correct => Self::Correct,
            Classification::WrongLocation => Self::WrongLocation,
            Classification::Wrong => Self::Wrong,
        }
    }
}

/// One letter cell of a guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    letter: Option<u8>,
    state: TileState,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Place a letter and mark the tile active
    pub(crate) fn fill(&mut self, letter: u8) {
        debug_assert!(self.state.can_transition_to(TileState::Active));
        self.letter = Some(letter);
        self.state = TileState::Active;
    }

    pub(crate) fn clear(&mut self) {
        debug_assert!(self.state.can_transition_to(TileState::Empty));
        self.letter = None;
        self.state = TileState::Empty;
    }

    pub(crate) fn start_flip(&mut self) {
        debug_assert!(self.state.can_transition_to(TileState::Flipping));
        self.state = TileState::Flipping;
    }

    pub(crate) fn reveal(&mut self, class: Classification) {
        let next = TileState::from(class);
        debug_assert!(self.state.can_transition_to(next));
        self.state = next;
    }
}
