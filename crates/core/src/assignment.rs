//! Reviewer selection policy.
//!
//! Pure functions over a candidate pool. The only source of nondeterminism is
//! the injected [`RandomSource`], so tests can pin the outcome.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of reviewers requested when a pull request is created.
pub const INITIAL_REVIEWER_COUNT: usize = 2;

/// Number of reviewers picked to replace a departing one.
pub const REASSIGN_REVIEWER_COUNT: usize = 1;

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

/// Source of uniform random indices.
///
/// Shared across request tasks, hence `Send + Sync`.
pub trait RandomSource: Send + Sync {
    /// Return an index uniformly distributed in `0..upper`. `upper > 0`.
    fn index(&self, upper: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

/// Reproducible source seeded with a fixed value.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, upper: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..upper)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Candidates from `pool` that are not in `excluded`, first occurrence only,
/// in pool order.
pub fn eligible_candidates(pool: &[String], excluded: &[String]) -> Vec<String> {
    let mut eligible: Vec<String> = Vec::with_capacity(pool.len());
    for candidate in pool {
        if excluded.contains(candidate) || eligible.contains(candidate) {
            continue;
        }
        eligible.push(candidate.clone());
    }
    eligible
}

/// Pick up to `count` distinct reviewers uniformly at random.
///
/// Returns `min(count, eligible)` ids. An empty result is not an error here;
/// callers decide whether it is.
pub fn select_reviewers(
    pool: &[String],
    excluded: &[String],
    count: usize,
    random: &dyn RandomSource,
) -> Vec<String> {
    let mut eligible = eligible_candidates(pool, excluded);
    let take = count.min(eligible.len());

    // Partial Fisher-Yates: the first `take` slots end up a uniform sample.
    for i in 0..take {
        let j = i + random.index(eligible.len() - i);
        eligible.swap(i, j);
    }
    eligible.truncate(take);
    eligible
}

/// Pick one replacement reviewer, or `None` if nobody is eligible.
pub fn select_replacement(
    pool: &[String],
    excluded: &[String],
    random: &dyn RandomSource,
) -> Option<String> {
    select_reviewers(pool, excluded, REASSIGN_REVIEWER_COUNT, random)
        .into_iter()
        .next()
}
