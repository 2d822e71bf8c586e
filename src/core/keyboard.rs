//! On-screen keyboard indicators
//!
//! Each letter key shows the best classification seen for that letter so far.
//! A later, weaker classification (a repeated letter in another position, say)
//! never downgrades a key.

use super::feedback::Classification;
use rustc_hash::FxHashMap;

/// Best classification seen per letter
#[derive(Debug, Clone, Default)]
pub struct KeyIndicators {
    keys: FxHashMap<u8, Classification>,
}

impl KeyIndicators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classification for `letter`
    ///
    /// Returns `true` if the displayed state of the key changed.
    pub fn mark(&mut self, letter: u8, class: Classification) -> bool {
        match self.keys.get_mut(&letter) {
            Some(current) if *current >= class => false,
            Some(current) => {
                *current = class;
                true
            }
            None => {
                self.keys.insert(letter, class);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Classification> {
        self.keys.get(&letter).copied()
    }

    /// Number of letters with an indicator
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Correct, Wrong, WrongLocation};

    #[test]
    fn first_mark_is_recorded() {
        let mut keys = KeyIndicators::new();
        assert!(keys.is_empty());
        assert!(keys.mark(b'a', Wrong));
        assert_eq!(keys.get(b'a'), Some(Wrong));
        assert_eq!(keys.get(b'b'), None);
    }

    #[test]
    fn upgrades_are_applied() {
        let mut keys = KeyIndicators::new();
        keys.mark(b'e', Wrong);
        assert!(keys.mark(b'e', WrongLocation));
        assert!(keys.mark(b'e', Correct));
        assert_eq!(keys.get(b'e'), Some(Correct));
    }

    #[test]
    fn downgrades_are_ignored() {
        let mut keys = KeyIndicators::new();
        keys.mark(b'e', Correct);
        assert!(!keys.mark(b'e', WrongLocation));
        assert!(!keys.mark(b'e', Wrong));
        assert!(!keys.mark(b'e', Correct));
        assert_eq!(keys.get(b'e'), Some(Correct));
        assert_eq!(keys.len(), 1);
    }
}
