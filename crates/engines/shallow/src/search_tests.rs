use super::*;
use chess_core::tree::{TreeGame, TreeNode};
use chess_core::Game;

fn rate(pos: &mut Game, uci: &str) -> Score {
    let mv = pos.parse_move(uci).unwrap();
    rate_move(pos, mv, &PieceValueTable::default(), &mut 0)
}

#[test]
fn mate_in_one_gets_the_maximal_rating() {
    let mut pos = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    assert_eq!(rate(&mut pos, "e1e8"), MATE_SCORE);

    let rated = rate_moves(&mut pos, &PieceValueTable::default(), &mut 0);
    let best = rated.iter().max_by_key(|c| c.score).unwrap();
    assert_eq!(pos.move_to_uci(best.mv), "e1e8");
}

#[test]
fn allowing_mate_in_one_gets_the_minimal_rating() {
    // After 1.f3 e5, 2.g4 allows ...Qh4#
    let mut pos =
        Game::from_fen("rnbqkbnr/pppp1ppp/8/4p3/8/5P2/PPPPP1PP/RNBQKBNR w KQkq - 0 2").unwrap();
    assert_eq!(rate(&mut pos, "g2g4"), -MATE_SCORE);
    assert_eq!(rate(&mut pos, "e2e4"), 0);
}

#[test]
fn hanging_a_piece_is_rated_by_the_capture() {
    // Qd1-d5 walks into ...exd5
    let mut pos = Game::from_fen("4k3/8/4p3/8/8/8/8/3QK3 w - - 0 1").unwrap();
    assert_eq!(rate(&mut pos, "d1d5"), -100);
    assert_eq!(rate(&mut pos, "d1d4"), 800);
}

#[test]
fn draw_is_taken_when_behind() {
    // A rook down; Kh2 repeats the position for the third time
    let mut pos = Game::from_fen("r5k1/8/8/8/8/8/8/7K w - - 0 1").unwrap();
    pos.play_uci(&["h1h2", "g8h8", "h2h1", "h8g8", "h1h2", "g8h8", "h2g1", "h8g8"])
        .unwrap();
    assert!(!pos.is_draw());
    assert_eq!(rate(&mut pos, "g1h2"), MATE_SCORE);
    assert!(rate(&mut pos, "g1f2") < MATE_SCORE);
}

#[test]
fn stalemate_is_avoided_when_ahead() {
    let mut pos = Game::from_fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1").unwrap();
    assert_eq!(rate(&mut pos, "b5b6"), -MATE_SCORE);
    assert_eq!(rate(&mut pos, "b5b7"), MATE_SCORE);
}

#[test]
fn draw_steering_on_tree() {
    let table = PieceValueTable::default();

    // White to move a pawn down; the only move draws
    let mut behind = TreeGame::new(TreeNode::pawns(3, 4), true);
    let drawn = behind.add_child(0, TreeNode::pawns(3, 4).drawn());
    assert_eq!(rate_move(&mut behind, drawn, &table, &mut 0), MATE_SCORE);

    // Same draw a pawn up
    let mut ahead = TreeGame::new(TreeNode::pawns(4, 3), true);
    let drawn = ahead.add_child(0, TreeNode::pawns(4, 3).drawn());
    assert_eq!(rate_move(&mut ahead, drawn, &table, &mut 0), -MATE_SCORE);
}

#[test]
fn worst_reply_is_kept() {
    let table = PieceValueTable::default();
    let mut tree = TreeGame::new(TreeNode::pawns(4, 4), true);
    let risky = tree.add_child(0, TreeNode::pawns(4, 4));
    tree.add_child(risky, TreeNode::pawns(4, 4));
    tree.add_child(risky, TreeNode::pawns(2, 4));
    tree.add_child(risky, TreeNode::pawns(4, 3));
    let safe = tree.add_child(0, TreeNode::pawns(4, 4));
    tree.add_child(safe, TreeNode::pawns(4, 4));

    let mut nodes = 0;
    let rated = rate_moves(&mut tree, &table, &mut nodes);
    assert_eq!(rated, vec![ScoredMove::new(risky, -200), ScoredMove::new(safe, 0)]);
    assert_eq!(nodes, 2 + 4);
    assert!(tree.path().is_empty());
}

#[test]
fn reply_delivering_mate_dominates_material() {
    let table = PieceValueTable::default();
    // Black to move at the root; one reply mates Black but loses White a queen
    let mut tree = TreeGame::new(TreeNode::pawns(4, 4), false);
    let mv = tree.add_child(0, TreeNode::pawns(4, 4));
    tree.add_child(mv, TreeNode::pawns(0, 8).mated());
    tree.add_child(mv, TreeNode::pawns(4, 4));
    assert_eq!(rate_move(&mut tree, mv, &table, &mut 0), -MATE_SCORE);
}

#[test]
fn no_replies_uses_material_after_the_move() {
    let table = PieceValueTable::default();
    // Black to move captures into a position where White has no moves but
    // is neither mated nor drawn
    let mut tree = TreeGame::new(TreeNode::pawns(4, 4), false);
    let mv = tree.add_child(0, TreeNode::pawns(3, 4));
    assert_eq!(rate_move(&mut tree, mv, &table, &mut 0), 100);
}

#[test]
fn rating_leaves_the_position_untouched() {
    let mut pos =
        Game::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .unwrap();
    let before = pos.fen();
    let mut nodes = 0;
    let rated = rate_moves(&mut pos, &PieceValueTable::default(), &mut nodes);
    assert_eq!(rated.len(), pos.legal_moves().len());
    assert!(nodes > rated.len() as u64);
    assert_eq!(pos.fen(), before);
    assert_eq!(pos.ply(), 0);
}
