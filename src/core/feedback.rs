//! Per-letter feedback for a guess
//!
//! Every tile of a submitted row is classified on its own:
//! - Correct: the letter sits at the same position in the target
//! - `WrongLocation`: the letter appears somewhere else in the target
//! - Wrong: the letter does not appear in the target at all
//!
//! Repeated letters are not rationed against the target's letter counts: a guess
//! of "speed" against "erase" marks both E tiles as `WrongLocation`.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single tile
///
/// The ordering is the keyboard upgrade order: `Wrong < WrongLocation < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Wrong,
    WrongLocation,
    Correct,
}

impl Classification {
    /// Classify `letter` guessed at `position` against `target`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn classify(letter: u8, position: usize, target: &Word) -> Self {
        if target.char_at(position) == letter {
            Self::Correct
        } else if target.has_letter(letter) {
            Self::WrongLocation
        } else {
            Self::Wrong
        }
    }

    /// Name used for tile and key state in the presentation layer
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wrong => "wrong",
            Self::WrongLocation => "wrong-location",
            Self::Correct => "correct",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongLocation => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifications of all five tiles of one guess, in position order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All tiles correct
    pub const PERFECT: Self = Self([Classification::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(classes: [Classification; WORD_LENGTH]) -> Self {
        Self(classes)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, Feedback, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.get(3), Classification::Wrong);
    /// assert_eq!(feedback.count_correct(), 4);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut classes = [Classification::Wrong; WORD_LENGTH];
        for (position, (class, &letter)) in classes.iter_mut().zip(guess.chars()).enumerate() {
            *class = Classification::classify(letter, position, target);
        }
        Self(classes)
    }

    /// Classification at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Classification {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Check if every tile is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Classification::Correct)
    }

    #[must_use]
    pub fn count_wrong_location(&self) -> usize {
        self.count(Classification::WrongLocation)
    }

    fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for wrong location
    /// - '-'/'_'/⬜ for wrong
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut classes = [Classification::Wrong; WORD_LENGTH];
        for (class, ch) in classes.iter_mut().zip(chars) {
            *class = match ch {
                'G' | 'g' | '🟩' => Classification::Correct,
                'Y' | 'y' | '🟨' => Classification::WrongLocation,
                '-' | '_' | '⬜' => Classification::Wrong,
                _ => return None,
            };
        }

        Some(Self(classes))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
