//! Guess validation seam

use crate::core::Word;

/// Decides whether a guess is an acceptable word
pub trait WordValidator {
    fn is_valid(&self, word: &Word) -> bool;
}

impl<F> WordValidator for F
where
    F: Fn(&Word) -> bool,
{
    fn is_valid(&self, word: &Word) -> bool {
        self(word)
    }
}
