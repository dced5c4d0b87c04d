//! Minimax search with alpha-beta pruning

use chess_core::{Rules, Score};

use crate::eval::LeafEval;

/// Searches the position and returns the best move with its score.
///
/// The side to move maximizes when it is White. Scores are absolute
/// (positive = good for White).
///
/// # Arguments
/// * `pos` - The position to search, restored before returning
/// * `depth` - Search depth in plies
/// * `leaf` - Leaf evaluator
/// * `nodes` - Counter for moves applied (for statistics)
///
/// # Returns
/// The best move and its score, or None if there are no legal moves
pub fn pick_best_move<R: Rules>(
    pos: &mut R,
    depth: u8,
    leaf: &mut LeafEval<'_>,
    nodes: &mut u64,
) -> Option<(R::Move, Score)> {
    let maximizing = pos.white_to_move();
    let (best, score) = alpha_beta(pos, maximizing, Score::MIN, Score::MAX, depth, leaf, nodes);

    match best {
        Some(mv) => Some((mv, score)),
        // Every child sat exactly on the sentinel, so nothing strictly
        // improved on it. Any legal move is as good as the others.
        None => pos.legal_moves().first().map(|&mv| {
            tracing::debug!(?mv, score, "no move beat the sentinel, using first legal move");
            (mv, score)
        }),
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Returns `(None, leaf score)` at depth 0 or when there are no legal moves.
/// Otherwise returns the first move attaining the best score; later moves
/// with an equal score do not replace it. The returned move can still be
/// None if no child strictly beats the initial `Score::MIN` / `Score::MAX`.
pub fn alpha_beta<R: Rules>(
    pos: &mut R,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
    depth: u8,
    leaf: &mut LeafEval<'_>,
    nodes: &mut u64,
) -> (Option<R::Move>, Score) {
    if depth == 0 {
        return (None, leaf.evaluate(pos));
    }

    let moves = pos.legal_moves();
    if moves.is_empty() {
        return (None, leaf.evaluate(pos));
    }

    let mut best_move = None;
    let mut best_score = if maximizing { Score::MIN } else { Score::MAX };

    for mv in moves {
        let score = {
            let mut child = pos.play(mv);
            *nodes += 1;
            alpha_beta(&mut *child, !maximizing, alpha, beta, depth - 1, leaf, nodes).1
        };

        if maximizing {
            if score > best_score {
                best_move = Some(mv);
                best_score = score;
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_move = Some(mv);
                best_score = score;
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break; // Cutoff
        }
    }

    (best_move, best_score)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
