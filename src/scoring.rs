//! Match/mismatch/gap scoring scheme.

use crate::traits::{Scorer, Symbol};

pub const DEFAULT_MATCH_REWARD: i32 = 1;
pub const DEFAULT_MISMATCH_PENALTY: i32 = -1;
pub const DEFAULT_GAP_PENALTY: i32 = -2;

/// Fixed integer scoring for one alignment run.
///
/// Penalties are stored with their sign: a typical scheme has a positive
/// `match_reward` and negative `mismatch_penalty` and `gap_penalty`, but the
/// recurrence does not depend on any sign convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringScheme {
    pub match_reward: i32,
    pub mismatch_penalty: i32,
    pub gap_penalty: i32,
}

impl ScoringScheme {
    pub const fn new(match_reward: i32, mismatch_penalty: i32, gap_penalty: i32) -> Self {
        Self {
            match_reward,
            mismatch_penalty,
            gap_penalty,
        }
    }

    /// `match_reward` for equal symbols, `mismatch_penalty` otherwise.
    #[inline]
    pub fn score<T: Symbol>(&self, a: T, b: T) -> i32 {
        if a == b {
            self.match_reward
        } else {
            self.mismatch_penalty
        }
    }
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::new(
            DEFAULT_MATCH_REWARD,
            DEFAULT_MISMATCH_PENALTY,
            DEFAULT_GAP_PENALTY,
        )
    }
}

impl Scorer for ScoringScheme {
    #[inline]
    fn pair<T: Symbol>(&self, a: T, b: T) -> i32 {
        self.score(a, b)
    }

    #[inline]
    fn gap(&self) -> i32 {
        self.gap_penalty
    }
}
