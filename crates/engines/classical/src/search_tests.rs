use super::*;
use chess_core::eval::leaf_score;
use chess_core::tree::{TreeGame, TreeNode};
use chess_core::{Game, PieceKind, PieceValueTable, Side, MATE_SCORE};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Plain minimax without pruning, as a reference for the root score.
fn minimax<R: Rules>(pos: &mut R, maximizing: bool, depth: u8, table: &PieceValueTable) -> Score {
    if depth == 0 {
        return leaf_score(pos, table);
    }
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return leaf_score(pos, table);
    }
    let scores = moves.into_iter().map(|mv| {
        let mut child = pos.play(mv);
        minimax(&mut *child, !maximizing, depth - 1, table)
    });
    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap()
}

fn search<R: Rules>(pos: &mut R, depth: u8) -> (Option<(R::Move, Score)>, u64) {
    let table = PieceValueTable::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut leaf = LeafEval::new(&table, 0, &mut rng);
    let mut nodes = 0;
    let best = pick_best_move(pos, depth, &mut leaf, &mut nodes);
    (best, nodes)
}

#[test]
fn test_pick_best_move_start_position() {
    let mut pos = Game::startpos();
    let before = pos.fen();
    let (best, nodes) = search(&mut pos, 3);
    let (mv, score) = best.unwrap();
    assert!(pos.legal_moves().contains(&mv));
    assert_eq!(score, 0, "no material can be won within three plies");
    assert!(nodes > 0);
    assert_eq!(pos.fen(), before);
    assert_eq!(pos.ply(), 0);
}

#[test]
fn test_finds_mate_in_one_at_depth_one() {
    let mut pos = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let (best, _) = search(&mut pos, 1);
    let (mv, score) = best.unwrap();
    assert_eq!(pos.move_to_uci(mv), "e1e8");
    assert!(score >= MATE_SCORE);
}

#[test]
fn test_finds_mate_in_one_at_depth_three() {
    let mut pos = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let (best, _) = search(&mut pos, 3);
    let (_, score) = best.unwrap();
    assert!(score >= MATE_SCORE);

    // The immediate mate is among the top-scored moves
    let table = PieceValueTable::default();
    let mate = pos.parse_move("e1e8").unwrap();
    let mut child = pos.play(mate);
    assert_eq!(minimax(&mut *child, false, 2, &table), score);
}

#[test]
fn test_black_finds_mate_in_one() {
    let mut pos = Game::from_fen("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let (best, _) = search(&mut pos, 2);
    let (mv, score) = best.unwrap();
    assert_eq!(pos.move_to_uci(mv), "e8e1");
    assert!(score <= -MATE_SCORE);
}

#[test]
fn test_no_move_when_checkmated() {
    let mut pos =
        Game::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    let (best, nodes) = search(&mut pos, 3);
    assert!(best.is_none());
    assert_eq!(nodes, 0);
}

#[test]
fn test_pruned_score_matches_minimax_on_random_trees() {
    let table = PieceValueTable::default();
    let mut pruned_nodes = 0;
    let mut full_nodes = 0;
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = TreeGame::random(&mut rng, 4, 3, seed % 2 == 0);
        let maximizing = tree.white_to_move();
        let expected = minimax(&mut tree, maximizing, 4, &table);

        let (best, nodes) = search(&mut tree, 4);
        assert_eq!(best.unwrap().1, expected, "seed {seed}");
        assert!(tree.path().is_empty(), "seed {seed} left moves applied");

        pruned_nodes += nodes;
        full_nodes += 3 + 9 + 27 + 81;
    }
    assert!(pruned_nodes < full_nodes, "pruning never cut anything");
}

#[test]
fn test_pruned_score_matches_minimax_on_chess_positions() {
    let table = PieceValueTable::default();
    let fens = [
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        "r3k2r/ppp2ppp/2n5/3qp3/3P4/2P2N2/PP3PPP/R2QKB1R b KQkq - 0 10",
        "8/5k2/8/3Rp3/8/2n5/5K2/8 w - - 0 1",
    ];
    for fen in fens {
        let mut pos = Game::from_fen(fen).unwrap();
        let before = pos.fen();
        let maximizing = pos.white_to_move();
        let expected = minimax(&mut pos, maximizing, 2, &table);
        let (best, _) = search(&mut pos, 2);
        assert_eq!(best.unwrap().1, expected, "{fen}");
        assert_eq!(pos.fen(), before, "{fen}");
    }
}

#[test]
fn test_first_move_wins_ties() {
    let mut tree = TreeGame::new(TreeNode::pawns(4, 4), true);
    let first = tree.add_child(0, TreeNode::pawns(4, 3));
    tree.add_child(0, TreeNode::pawns(4, 3));
    tree.add_child(0, TreeNode::pawns(4, 4));
    let (best, _) = search(&mut tree, 1);
    assert_eq!(best, Some((first, 100)));

    let mut tree = TreeGame::new(TreeNode::pawns(4, 4), false);
    tree.add_child(0, TreeNode::pawns(4, 4));
    let second = tree.add_child(0, TreeNode::pawns(3, 4));
    tree.add_child(0, TreeNode::pawns(3, 4));
    let (best, _) = search(&mut tree, 1);
    assert_eq!(best, Some((second, -100)));
}

#[test]
fn test_mating_child_beats_material() {
    let mut tree = TreeGame::new(TreeNode::pawns(1, 1), true);
    tree.add_child(0, TreeNode::pawns(1, 0).with_count(Side::White, PieceKind::Queen, 3));
    let mate = tree.add_child(0, TreeNode::pawns(0, 8).mated());
    let (best, _) = search(&mut tree, 3);
    assert_eq!(best.unwrap().0, mate);
}

#[test]
fn test_sentinel_scores_return_no_move() {
    // Black to move, and every reply leaves White with saturated material,
    // so no child beats the Score::MAX sentinel
    let mut tree = TreeGame::new(TreeNode::pawns(1, 1), false);
    let saturated = TreeNode::default().with_count(Side::White, PieceKind::Queen, u32::MAX);
    let first = tree.add_child(0, saturated.clone());
    tree.add_child(0, saturated);

    let table = PieceValueTable::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut leaf = LeafEval::new(&table, 0, &mut rng);
    let mut nodes = 0;
    let (mv, score) =
        alpha_beta(&mut tree, false, Score::MIN, Score::MAX, 2, &mut leaf, &mut nodes);
    assert_eq!(mv, None);
    assert_eq!(score, Score::MAX);

    // The root falls back to the first legal move
    let (best, _) = search(&mut tree, 2);
    assert_eq!(best, Some((first, Score::MAX)));
    assert!(tree.path().is_empty());
}

#[test]
fn test_noise_is_bounded_and_reproducible() {
    let table = PieceValueTable::default();
    let run = |seed| {
        let mut pos = Game::startpos();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut leaf = LeafEval::new(&table, 5, &mut rng);
        let mut nodes = 0;
        pick_best_move(&mut pos, 2, &mut leaf, &mut nodes).unwrap()
    };
    let (mv, score) = run(11);
    assert_eq!(run(11), (mv, score));
    assert!((-5..5).contains(&score));
}
