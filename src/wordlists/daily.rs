//! Target word selection

use crate::core::Word;
use chrono::{Datelike, Local, NaiveDate};
use rand::seq::IndexedRandom;

/// Day zero of the daily rotation, 2022-01-01, as days from the common era
const EPOCH_DAYS_FROM_CE: i64 = 738_156;

/// The target word for `date`
///
/// Counts whole days since 2022-01-01 and wraps around the answer list, so
/// every date (including ones before the epoch) maps to a word.
#[must_use]
pub fn daily_word(answers: &[Word], date: NaiveDate) -> Option<&Word> {
    if answers.is_empty() {
        return None;
    }
    let days = i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE;
    let index = days.rem_euclid(answers.len() as i64) as usize;
    answers.get(index)
}

/// The target word for today's local date
#[must_use]
pub fn todays_word(answers: &[Word]) -> Option<&Word> {
    daily_word(answers, Local::now().date_naive())
}

/// A uniformly random target word
#[must_use]
pub fn random_word(answers: &[Word]) -> Option<&Word> {
    answers.choose(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn answers() -> Vec<Word> {
        words_from_slice(&["alpha", "bravo", "charm"])
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_constant_matches_calendar() {
        assert_eq!(
            i64::from(date(2022, 1, 1).num_days_from_ce()),
            EPOCH_DAYS_FROM_CE
        );
    }

    #[test]
    fn epoch_is_first_word() {
        let answers = answers();
        assert_eq!(daily_word(&answers, date(2022, 1, 1)).unwrap().text(), "alpha");
        assert_eq!(daily_word(&answers, date(2022, 1, 2)).unwrap().text(), "bravo");
    }

    #[test]
    fn wraps_around() {
        let answers = answers();
        assert_eq!(daily_word(&answers, date(2022, 1, 4)).unwrap().text(), "alpha");
    }

    #[test]
    fn dates_before_epoch_wrap_backwards() {
        let answers = answers();
        assert_eq!(daily_word(&answers, date(2021, 12, 31)).unwrap().text(), "charm");
    }

    #[test]
    fn empty_list_has_no_word() {
        assert!(daily_word(&[], date(2024, 5, 1)).is_none());
        assert!(random_word(&[]).is_none());
    }

    #[test]
    fn random_word_comes_from_list() {
        let answers = answers();
        let picked = random_word(&answers).unwrap();
        assert!(answers.contains(picked));
    }
}
