//! Opponent-worst-case rating of every legal move.
//!
//! Scores here are side-relative: positive is good for the side choosing
//! the move at the root.

use chess_core::eval::{draw_score, side_relative};
use chess_core::{PieceValueTable, Rules, Score, ScoredMove, MATE_SCORE};

/// Rates every legal move of the side to move. No pruning: each move and
/// every reply to it is visited.
pub fn rate_moves<R: Rules>(
    pos: &mut R,
    table: &PieceValueTable,
    nodes: &mut u64,
) -> Vec<ScoredMove<R::Move>> {
    pos.legal_moves()
        .into_iter()
        .map(|mv| ScoredMove::new(mv, rate_move(pos, mv, table, nodes)))
        .collect()
}

/// Rating of `mv` for the side to move.
///
/// - Mate: `MATE_SCORE`.
/// - Draw: `MATE_SCORE` when the mover is behind on material, `-MATE_SCORE`
///   otherwise.
/// - Otherwise the worst material balance over all opponent replies, with a
///   reply that mates the mover counting as `-MATE_SCORE`.
pub fn rate_move<R: Rules>(
    pos: &mut R,
    mv: R::Move,
    table: &PieceValueTable,
    nodes: &mut u64,
) -> Score {
    let mut after = pos.play(mv);
    *nodes += 1;

    if after.is_checkmate() {
        return MATE_SCORE;
    }
    if after.is_draw() {
        return draw_score(&*after, table);
    }

    let replies = after.legal_moves();
    if replies.is_empty() {
        return side_relative(&*after, table);
    }

    let mut worst = Score::MAX;
    for reply in replies {
        let answered = after.play(reply);
        *nodes += 1;
        let score = if answered.is_checkmate() {
            -MATE_SCORE
        } else {
            // The opponent just moved, so negate to the mover's view
            side_relative(&*answered, table).saturating_neg()
        };
        worst = worst.min(score);
    }
    worst
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
