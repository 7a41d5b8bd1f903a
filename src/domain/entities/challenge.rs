//! Daily eco-challenges and the points they earn

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points awarded per completed challenge
pub const POINTS_PER_CHALLENGE: u32 = 10;

/// A single eco-challenge suggested for today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub text: String,
    pub completed: bool,
}

impl Challenge {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// The list of challenges generated for a session, with per-item completion flags
///
/// Points and the species unlock are derived from the flags every time they
/// are read; nothing else is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeBoard {
    challenges: Vec<Challenge>,
    generated_on: Option<NaiveDate>,
}

impl ChallengeBoard {
    /// Fresh board with every challenge incomplete
    pub fn new<I, S>(texts: I, generated_on: NaiveDate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            challenges: texts.into_iter().map(Challenge::new).collect(),
            generated_on: Some(generated_on),
        }
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn generated_on(&self) -> Option<NaiveDate> {
        self.generated_on
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Set the completion flag of the challenge at `index`
    pub fn set_completed(&mut self, index: usize, completed: bool) -> Result<(), ChallengeError> {
        let len = self.challenges.len();
        let challenge = self
            .challenges
            .get_mut(index)
            .ok_or(ChallengeError::IndexOutOfRange { index, len })?;
        challenge.completed = completed;
        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.challenges.iter().filter(|c| c.completed).count()
    }

    pub fn points(&self) -> u32 {
        self.completed_count() as u32 * POINTS_PER_CHALLENGE
    }

    /// True once every challenge on a non-empty board is completed
    pub fn all_completed(&self) -> bool {
        !self.is_empty() && self.completed_count() == self.challenges.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeError {
    #[error("Challenge {index} does not exist (board has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: usize) -> ChallengeBoard {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        ChallengeBoard::new((0..n).map(|i| format!("Challenge {}", i)), today)
    }

    #[test]
    fn test_new_board_starts_incomplete() {
        let board = board(5);
        assert_eq!(board.challenges().len(), 5);
        assert_eq!(board.points(), 0);
        assert!(!board.all_completed());
    }

    #[test]
    fn test_completing_all_unlocks_and_scores() {
        let mut board = board(4);
        for i in 0..4 {
            board.set_completed(i, true).unwrap();
        }
        assert_eq!(board.points(), 40);
        assert!(board.all_completed());
    }

    #[test]
    fn test_one_short_of_all_stays_locked() {
        let mut board = board(5);
        for i in 0..4 {
            board.set_completed(i, true).unwrap();
        }
        assert_eq!(board.points(), 40);
        assert!(!board.all_completed());
    }

    #[test]
    fn test_unchecking_removes_points() {
        let mut board = board(2);
        board.set_completed(0, true).unwrap();
        board.set_completed(1, true).unwrap();
        board.set_completed(1, false).unwrap();
        assert_eq!(board.points(), 10);
        assert!(!board.all_completed());
    }

    #[test]
    fn test_empty_board_never_unlocks() {
        let board = ChallengeBoard::default();
        assert_eq!(board.points(), 0);
        assert!(!board.all_completed());
    }

    #[test]
    fn test_out_of_range_index() {
        let mut board = board(2);
        assert_eq!(
            board.set_completed(2, true),
            Err(ChallengeError::IndexOutOfRange { index: 2, len: 2 })
        );
    }
}
