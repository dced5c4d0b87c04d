//! Leaf evaluation for the alpha-beta search.

use chess_core::eval::leaf_score;
use chess_core::{PieceValueTable, Rules, Score};
use rand::rngs::StdRng;
use rand::Rng;

/// Scores search leaves in the absolute convention (positive = White),
/// optionally jittered by a small uniform noise.
#[derive(Debug)]
pub struct LeafEval<'a> {
    table: &'a PieceValueTable,
    noise: Score,
    rng: &'a mut StdRng,
}

impl<'a> LeafEval<'a> {
    pub fn new(table: &'a PieceValueTable, noise: Score, rng: &'a mut StdRng) -> Self {
        Self { table, noise, rng }
    }

    /// Material balance plus the checkmate term, plus noise in
    /// `[-noise, noise)` when enabled.
    pub fn evaluate<R: Rules>(&mut self, pos: &R) -> Score {
        let score = leaf_score(pos, self.table);
        if self.noise > 0 {
            score.saturating_add(self.rng.gen_range(-self.noise..self.noise))
        } else {
            score
        }
    }
}
