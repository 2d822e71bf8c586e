//! Ordered tile reveal
//!
//! Classifications are known the moment a row is accepted. What the reveal
//! tracks is which flips the presentation has finished, so tiles are
//! classified strictly left to right no matter the order completions arrive in.

use crate::core::{Classification, Feedback, WORD_LENGTH, Word};

/// Progress of one row's reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    row: usize,
    guess: Word,
    feedback: Feedback,
    flipped: [bool; WORD_LENGTH],
    next: usize,
}

/// Why a flip completion was not recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipRejected {
    OutOfRange,
    Duplicate,
}

impl Reveal {
    #[must_use]
    pub fn new(row: usize, guess: Word, feedback: Feedback) -> Self {
        Self {
            row,
            guess,
            feedback,
            flipped: [false; WORD_LENGTH],
            next: 0,
        }
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Number of tiles already classified
    #[must_use]
    pub const fn classified(&self) -> usize {
        self.next
    }

    /// All five tiles classified; only the settle signal is outstanding
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        self.next == WORD_LENGTH
    }

    #[must_use]
    pub fn is_flipped(&self, position: usize) -> bool {
        self.flipped.get(position).copied().unwrap_or(false)
    }

    /// Record that the flip at `position` finished
    pub(crate) fn record_flip(&mut self, position: usize) -> Result<(), FlipRejected> {
        let slot = self
            .flipped
            .get_mut(position)
            .ok_or(FlipRejected::OutOfRange)?;
        if *slot {
            return Err(FlipRejected::Duplicate);
        }
        *slot = true;
        Ok(())
    }

    /// Take the next tile that may be classified, in position order
    pub(crate) fn next_ready(&mut self) -> Option<(usize, Classification)> {
        if self.next < WORD_LENGTH && self.flipped[self.next] {
            let position = self.next;
            self.next += 1;
            Some((position, self.feedback.get(position)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal() -> Reveal {
        let guess = Word::new("crate").unwrap();
        let target = Word::new("crane").unwrap();
        Reveal::new(0, guess.clone(), Feedback::calculate(&guess, &target))
    }

    fn drain(reveal: &mut Reveal) -> Vec<usize> {
        std::iter::from_fn(|| reveal.next_ready())
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn in_order_completions_release_immediately() {
        let mut r = reveal();
        for position in 0..WORD_LENGTH {
            r.record_flip(position).unwrap();
            assert_eq!(drain(&mut r), vec![position]);
        }
        assert!(r.is_classified());
    }

    #[test]
    fn early_completions_wait_for_predecessors() {
        let mut r = reveal();
        r.record_flip(2).unwrap();
        r.record_flip(1).unwrap();
        assert!(drain(&mut r).is_empty());

        r.record_flip(0).unwrap();
        assert_eq!(drain(&mut r), vec![0, 1, 2]);
        assert_eq!(r.classified(), 3);
        assert!(!r.is_classified());
    }

    #[test]
    fn classifications_come_from_feedback() {
        let mut r = reveal();
        r.record_flip(3).unwrap();
        for p in 0..3 {
            r.record_flip(p).unwrap();
        }
        let classes: Vec<_> = std::iter::from_fn(|| r.next_ready()).collect();
        assert_eq!(classes[3], (3, Classification::Wrong));
        assert_eq!(classes[0], (0, Classification::Correct));
    }

    #[test]
    fn rejects_bad_positions() {
        let mut r = reveal();
        assert_eq!(r.record_flip(5), Err(FlipRejected::OutOfRange));
        r.record_flip(0).unwrap();
        assert_eq!(r.record_flip(0), Err(FlipRejected::Duplicate));
    }
}
