//! Score a single guess against a target

use crate::core::{Feedback, Word, WordError};
use crate::wordlists::WordList;

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    /// Whether the guess would be accepted during play
    pub guess_known: bool,
}

/// Compute the feedback `guess` would receive against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn score_guess(guess: &str, target: &str, words: &WordList) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::calculate(&guess, &target);
    let guess_known = words.contains(&guess);

    Ok(ScoreResult {
        guess,
        target,
        feedback,
        guess_known,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;

    #[test]
    fn scores_crate_against_crane() {
        let words = WordList::from_strs(["crane", "crate"]);
        let result = score_guess("CRATE", "crane", &words).unwrap();

        assert_eq!(result.feedback.get(3), Classification::Wrong);
        assert_eq!(result.feedback.count_correct(), 4);
        assert!(result.guess_known);
    }

    #[test]
    fn unknown_guess_is_flagged_not_rejected() {
        let words = WordList::from_strs(["crane"]);
        let result = score_guess("zzzzz", "crane", &words).unwrap();
        assert!(!result.guess_known);
    }

    #[test]
    fn invalid_words_are_errors() {
        let words = WordList::default();
        assert!(matches!(
            score_guess("cr", "crane", &words),
            Err(WordError::InvalidLength(2))
        ));
        assert!(score_guess("crane", "cran3", &words).is_err());
    }
}
