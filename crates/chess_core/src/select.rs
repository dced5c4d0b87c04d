//! Final move choice among scored candidates.

use rand::Rng;

use crate::types::Score;

/// A candidate move and the rating a search gave it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove<M> {
    pub mv: M,
    pub score: Score,
}

impl<M> ScoredMove<M> {
    pub fn new(mv: M, score: Score) -> Self {
        Self { mv, score }
    }
}

/// Sorts `candidates` best first and returns the tied leaders.
///
/// The sort is stable, so leaders keep their generation order.
pub fn top_candidates<M>(candidates: &mut [ScoredMove<M>]) -> &[ScoredMove<M>] {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    let best = match candidates.first() {
        Some(first) => first.score,
        None => return candidates,
    };
    let ties = candidates.iter().take_while(|c| c.score == best).count();
    &candidates[..ties]
}

/// Picks uniformly at random among the highest-scored candidates.
/// `candidates` is left sorted best first, as by [`top_candidates`].
///
/// # Panics
///
/// Panics if `candidates` is empty. Searches only call this for positions
/// with at least one legal move, so an empty list is a caller bug.
pub fn pick_best<M: Copy, G: Rng + ?Sized>(candidates: &mut [ScoredMove<M>], rng: &mut G) -> M {
    assert!(
        !candidates.is_empty(),
        "pick_best called with no candidates; position has no legal moves"
    );
    let leaders = top_candidates(candidates);
    leaders[rng.gen_range(0..leaders.len())].mv
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
