//! Guess membership set

use super::embedded::{ALLOWED, ANSWERS};
use crate::core::Word;
use crate::game::WordValidator;
use rustc_hash::FxHashSet;

/// Every word accepted as a guess
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<Word>,
}

impl WordList {
    /// Answers plus the extra allowed words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(ANSWERS.iter().chain(ALLOWED).copied())
    }

    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Build from strings, skipping anything that is not a valid word
    pub fn from_strs<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self::from_words(words.into_iter().filter_map(|s| Word::new(s).ok()))
    }

    /// Add more words, e.g. from a user-supplied file
    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words);
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidator for WordList {
    fn is_valid(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn embedded_contains_answers_and_allowed() {
        let list = WordList::embedded();
        assert_eq!(list.len(), ANSWERS.len() + ALLOWED.len());
        assert!(list.contains(&word(ANSWERS[0])));
        assert!(list.contains(&word(ALLOWED[0])));
        assert!(list.contains(&word("crane")));
        assert!(!list.contains(&word("zzzzz")));
    }

    #[test]
    fn from_strs_skips_invalid_and_dedupes() {
        let list = WordList::from_strs(["crane", "CRANE", "nope", "slate"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn extend_adds_words() {
        let mut list = WordList::from_strs(["crane"]);
        assert!(!list.is_valid(&word("qajaq")));
        list.extend([word("qajaq")]);
        assert!(list.is_valid(&word("qajaq")));
    }
}
