//! Hand-built game trees implementing [`Rules`], for exercising searches
//! without a chess board.
//!
//! Every node carries its own piece counts and terminal flags; moves are
//! node indices. The side to move alternates with the depth of the current
//! path, starting from the root side.

use rand::Rng;

use crate::rules::Rules;
use crate::types::{PieceKind, Side};

#[derive(Clone, Debug, Default)]
pub struct TreeNode {
    pub children: Vec<usize>,
    pub checkmate: bool,
    pub draw: bool,
    /// Piece counts indexed by `[Side::idx()][PieceKind::idx()]`.
    pub counts: [[u32; 6]; 2],
}

impl TreeNode {
    /// A node where each side has a king and the given number of pawns.
    pub fn pawns(white: u32, black: u32) -> Self {
        let mut node = TreeNode::default();
        node.counts[Side::White.idx()][PieceKind::King.idx()] = 1;
        node.counts[Side::Black.idx()][PieceKind::King.idx()] = 1;
        node.counts[Side::White.idx()][PieceKind::Pawn.idx()] = white;
        node.counts[Side::Black.idx()][PieceKind::Pawn.idx()] = black;
        node
    }

    pub fn with_count(mut self, side: Side, kind: PieceKind, count: u32) -> Self {
        self.counts[side.idx()][kind.idx()] = count;
        self
    }

    pub fn mated(mut self) -> Self {
        self.checkmate = true;
        self
    }

    pub fn drawn(mut self) -> Self {
        self.draw = true;
        self
    }
}

#[derive(Clone, Debug)]
pub struct TreeGame {
    nodes: Vec<TreeNode>,
    path: Vec<usize>,
    root_white: bool,
}

impl TreeGame {
    pub fn new(root: TreeNode, root_white: bool) -> Self {
        Self {
            nodes: vec![root],
            path: Vec::new(),
            root_white,
        }
    }

    /// Adds `node` as the last child of `parent` and returns its index,
    /// which doubles as the move leading to it.
    pub fn add_child(&mut self, parent: usize, node: TreeNode) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        self.nodes[parent].children.push(idx);
        idx
    }

    /// A uniform tree of the given depth and branching with random pawn
    /// counts at every node.
    pub fn random<G: Rng + ?Sized>(
        rng: &mut G,
        depth: u32,
        branching: usize,
        root_white: bool,
    ) -> Self {
        let root = TreeNode::pawns(rng.gen_range(0..9), rng.gen_range(0..9));
        let mut game = TreeGame::new(root, root_white);
        let mut frontier = vec![0usize];
        for _ in 0..depth {
            let mut next = Vec::with_capacity(frontier.len() * branching);
            for parent in frontier {
                for _ in 0..branching {
                    let node = TreeNode::pawns(rng.gen_range(0..9), rng.gen_range(0..9));
                    next.push(game.add_child(parent, node));
                }
            }
            frontier = next;
        }
        game
    }

    pub fn current(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    fn node(&self) -> &TreeNode {
        &self.nodes[self.current()]
    }
}

impl Rules for TreeGame {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        self.node().children.clone()
    }

    fn apply(&mut self, mv: usize) {
        assert!(
            self.node().children.contains(&mv),
            "move {mv} is not a child of node {}",
            self.current()
        );
        self.path.push(mv);
    }

    fn undo(&mut self, mv: usize) {
        assert_eq!(self.path.pop(), Some(mv), "undo out of LIFO order");
    }

    fn is_checkmate(&self) -> bool {
        self.node().checkmate
    }

    fn is_draw(&self) -> bool {
        self.node().draw
    }

    fn white_to_move(&self) -> bool {
        self.root_white ^ (self.path.len() % 2 == 1)
    }

    fn piece_count(&self, kind: PieceKind, side: Side) -> u32 {
        self.node().counts[side.idx()][kind.idx()]
    }
}
