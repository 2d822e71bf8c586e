//! End-of-round evaluation

use super::effect::RoundOutcome;
use crate::core::Word;

/// Decide what happens after a row has been fully revealed
///
/// An exact match wins; otherwise the round is lost once no empty rows remain.
#[must_use]
pub fn evaluate_round(guess: &Word, target: &Word, empty_rows: usize) -> RoundOutcome {
    if guess == target {
        RoundOutcome::Win
    } else if empty_rows == 0 {
        RoundOutcome::Lose
    } else {
        RoundOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(
            evaluate_round(&word("crane"), &word("crane"), 3),
            RoundOutcome::Win
        );
    }

    #[test]
    fn exact_match_on_last_row_still_wins() {
        assert_eq!(
            evaluate_round(&word("crane"), &word("crane"), 0),
            RoundOutcome::Win
        );
    }

    #[test]
    fn miss_with_rows_left_continues() {
        assert_eq!(
            evaluate_round(&word("crate"), &word("crane"), 1),
            RoundOutcome::Continue
        );
    }

    #[test]
    fn miss_without_rows_loses() {
        let outcome = evaluate_round(&word("crate"), &word("crane"), 0);
        assert_eq!(outcome, RoundOutcome::Lose);
        assert!(outcome.is_terminal());
        assert!(!RoundOutcome::Continue.is_terminal());
    }
}
